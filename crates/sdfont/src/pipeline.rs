//! Batch pipeline: validated font specs in, finished atlases out.

use std::path::PathBuf;

use crate::atlas::{AtlasBuilder, FontAtlas};
use crate::charset;
use crate::error::{AtlasError, Result};
use crate::raster::Rasterizer;
use crate::sdf::compute_sdf;

/// One font to process: outline source, pixel size, smoothstep edge pair and
/// the character set to bake.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    pub name: String,
    pub source: PathBuf,
    pub pixel_size: u8,
    pub edges: (f32, f32),
    pub chars: Vec<char>,
}

impl FontSpec {
    /// A spec over the default ASCII printable character set.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        pixel_size: u8,
        edges: (f32, f32),
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            pixel_size,
            edges,
            chars: charset::default_charset(),
        }
    }

    /// Replace the character set. The set is sorted and deduplicated so atlas
    /// iteration order stays deterministic.
    pub fn with_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.chars = chars.into_iter().collect();
        self.chars.sort_unstable();
        self.chars.dedup();
        self
    }

    /// Fail-fast validation, run before any glyph work.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AtlasError::Config("font name is empty".into()));
        }
        if self.pixel_size == 0 {
            return Err(AtlasError::Config(format!(
                "font '{}' has pixel size 0",
                self.name
            )));
        }
        let (edge0, edge1) = self.edges;
        if !(0.0..=1.0).contains(&edge0) || !(0.0..=1.0).contains(&edge1) || edge0 >= edge1 {
            return Err(AtlasError::InvalidEdges(edge0, edge1));
        }
        if self.chars.is_empty() {
            return Err(AtlasError::EmptyCharSet);
        }
        if !self.chars.windows(2).all(|w| w[0] < w[1]) {
            return Err(AtlasError::Config(format!(
                "font '{}' has an unsorted character set",
                self.name
            )));
        }
        Ok(())
    }
}

/// Build the atlas for one font.
///
/// Glyphs are processed strictly in character-set order; the first failure
/// aborts the font with no partial atlas.
pub fn build_atlas(spec: &FontSpec) -> Result<FontAtlas> {
    spec.validate()?;
    let rasterizer = Rasterizer::from_file(&spec.source, spec.pixel_size)?;
    let mut builder = AtlasBuilder::new(&spec.name, spec.pixel_size);
    for &ch in &spec.chars {
        let glyph = rasterizer.coverage(ch)?;
        let sdf = compute_sdf(&glyph.coverage, spec.edges.0, spec.edges.1);
        builder.push_glyph(ch, &sdf)?;
    }
    Ok(builder.finish())
}

/// Build atlases for a whole font set, in order.
pub fn build_atlases(specs: &[FontSpec]) -> Result<Vec<FontAtlas>> {
    specs.iter().map(build_atlas).collect()
}
