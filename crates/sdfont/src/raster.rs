//! Glyph rasterization adapter over fontdue.
//!
//! Produces binary coverage bitmaps: one per glyph, ink box left-aligned at
//! column 0, baseline at the font's ascent, height fixed to ascent + descent
//! so every glyph of a font shares one row count.

use std::path::Path;

use crate::error::{AtlasError, Result};

/// Coverage above this intensity counts as ink.
const INK_THRESHOLD: u8 = 128;

/// A binary ink/background grid, row-major.
#[derive(Clone, Debug)]
pub struct CoverageBitmap {
    pub width: usize,
    pub height: usize,
    bits: Vec<bool>,
}

impl CoverageBitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, ink: bool) {
        self.bits[y * self.width + x] = ink;
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Blit a tight grayscale glyph box into this bitmap, binarizing with the
    /// ink threshold. `top` is the destination row of the box's first row and
    /// may be negative; rows falling outside the bitmap are clipped.
    pub fn blit_gray(&mut self, gray: &[u8], gray_width: usize, top: i32) {
        if gray_width == 0 {
            return;
        }
        let gray_height = gray.len() / gray_width;
        for row in 0..gray_height {
            let y = top + row as i32;
            if y < 0 || y as usize >= self.height {
                continue;
            }
            for col in 0..gray_width.min(self.width) {
                if gray[row * gray_width + col] > INK_THRESHOLD {
                    self.set(col, y as usize, true);
                }
            }
        }
    }
}

/// One rasterized glyph: its coverage bitmap plus the advance width in
/// pixels (fractional; the atlas itself advances by ink width).
pub struct RasterGlyph {
    pub coverage: CoverageBitmap,
    pub advance: f32,
}

/// Rasterizes glyphs of one font at one fixed pixel size.
pub struct Rasterizer {
    face: fontdue::Font,
    pixel_size: f32,
    ascent: i32,
    descent: i32,
}

impl Rasterizer {
    pub fn from_file(path: &Path, pixel_size: u8) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, pixel_size)
    }

    pub fn from_bytes(bytes: &[u8], pixel_size: u8) -> Result<Self> {
        let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| AtlasError::FontParse(e.to_string()))?;
        let metrics = face
            .horizontal_line_metrics(pixel_size as f32)
            .ok_or_else(|| AtlasError::FontParse("font has no horizontal line metrics".into()))?;
        // fontdue reports descent as a negative offset below the baseline
        let ascent = metrics.ascent.round() as i32;
        let descent = (-metrics.descent).round() as i32;
        Ok(Self {
            face,
            pixel_size: pixel_size as f32,
            ascent,
            descent,
        })
    }

    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    pub fn descent(&self) -> i32 {
        self.descent
    }

    /// Shared height of every coverage bitmap this rasterizer produces.
    pub fn line_height(&self) -> usize {
        (self.ascent + self.descent).max(0) as usize
    }

    /// Rasterize one glyph into a binary coverage bitmap.
    ///
    /// The bitmap is `ink_width x line_height`; zero-width glyphs such as
    /// space yield a valid empty bitmap. A character the font does not carry
    /// is a hard error, never a silent skip.
    pub fn coverage(&self, ch: char) -> Result<RasterGlyph> {
        if self.face.lookup_glyph_index(ch) == 0 {
            return Err(AtlasError::MissingGlyph(ch));
        }
        let (metrics, gray) = self.face.rasterize(ch, self.pixel_size);
        let mut coverage = CoverageBitmap::new(metrics.width, self.line_height());
        if metrics.width > 0 {
            let top = self.ascent - (metrics.ymin + metrics.height as i32);
            coverage.blit_gray(&gray, metrics.width, top);
        }
        Ok(RasterGlyph {
            coverage,
            advance: metrics.advance_width,
        })
    }
}
