//! Per-font atlas assembly.
//!
//! Every glyph's run records flatten into one shared byte buffer; a glyph
//! entry records where its stream starts and how many levels a decoder walks.
//! No per-glyph allocation is needed at decode time.

use crate::codec::{self, RunRecord};
use crate::error::{AtlasError, Result};
use crate::sdf::SdfBitmap;

/// Offset table entry for one glyph.
///
/// `size` counts decoded levels (`2 * records`), not bytes; the decoder walks
/// `size / 2` three-byte records starting at `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphEntry {
    pub offset: u32,
    pub size: u16,
    pub width: u16,
    pub height: u16,
    pub character: char,
}

impl GlyphEntry {
    /// Number of wire bytes this glyph occupies in the shared buffer.
    pub fn byte_len(&self) -> usize {
        (self.size as usize / 2) * 3
    }
}

/// A finished per-font atlas: one contiguous data buffer plus the glyph
/// table, ordered by character.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontAtlas {
    pub name: String,
    pub pixel_size: u8,
    pub sdf_data: Vec<u8>,
    pub glyphs: Vec<GlyphEntry>,
}

impl FontAtlas {
    /// Look up a glyph by character (binary search; the table is sorted).
    pub fn glyph(&self, ch: char) -> Option<&GlyphEntry> {
        self.glyphs
            .binary_search_by_key(&ch, |g| g.character)
            .ok()
            .map(|i| &self.glyphs[i])
    }

    /// The raw record stream for one glyph.
    pub fn glyph_bytes(&self, entry: &GlyphEntry) -> &[u8] {
        let start = entry.offset as usize;
        &self.sdf_data[start..start + entry.byte_len()]
    }

    /// Decode one glyph back into quantized samples (`width * height` bytes).
    pub fn decode_glyph(&self, entry: &GlyphEntry) -> Vec<u8> {
        let records: Vec<RunRecord> = self
            .glyph_bytes(entry)
            .chunks_exact(3)
            .map(|c| RunRecord::from_bytes([c[0], c[1], c[2]]))
            .collect();
        codec::decode(&records)
    }
}

/// Accumulates encoded glyphs into a [`FontAtlas`], in push order.
pub struct AtlasBuilder {
    name: String,
    pixel_size: u8,
    sdf_data: Vec<u8>,
    glyphs: Vec<GlyphEntry>,
}

impl AtlasBuilder {
    pub fn new(name: impl Into<String>, pixel_size: u8) -> Self {
        Self {
            name: name.into(),
            pixel_size,
            sdf_data: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    /// Encode one glyph's SDF and append its record stream.
    ///
    /// The entry's offset is recorded before the append, so streams never
    /// overlap and the table stays consistent with the buffer.
    pub fn push_glyph(&mut self, character: char, sdf: &SdfBitmap) -> Result<()> {
        let records = codec::encode(sdf.samples());
        let too_large = |_| AtlasError::GlyphTooLarge {
            ch: character,
            samples: sdf.samples().len(),
        };
        let size = u16::try_from(records.len() * 2).map_err(too_large)?;
        let width = u16::try_from(sdf.width).map_err(too_large)?;
        let height = u16::try_from(sdf.height).map_err(too_large)?;

        let offset = self.sdf_data.len() as u32;
        for record in &records {
            self.sdf_data.extend_from_slice(&record.to_bytes());
        }
        self.glyphs.push(GlyphEntry {
            offset,
            size,
            width,
            height,
            character,
        });
        Ok(())
    }

    pub fn finish(self) -> FontAtlas {
        FontAtlas {
            name: self.name,
            pixel_size: self.pixel_size,
            sdf_data: self.sdf_data,
            glyphs: self.glyphs,
        }
    }
}
