//! sdfont: quantized SDF font atlas generation for embedded targets.
//! Pipeline: glyph rasterization, signed distance fields, nibble-pair RLE,
//! per-font offset tables, C table emission.

pub mod atlas;
pub mod charset;
pub mod codec;
#[cfg(feature = "emit")]
pub mod emit;
mod error;
mod pipeline;
pub mod raster;
pub mod sdf;

pub use atlas::{AtlasBuilder, FontAtlas, GlyphEntry};
pub use codec::RunRecord;
pub use error::{AtlasError, Result};
pub use pipeline::{build_atlas, build_atlases, FontSpec};
pub use raster::{CoverageBitmap, RasterGlyph, Rasterizer};
pub use sdf::{compute_sdf, SdfBitmap};
