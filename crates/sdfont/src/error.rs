use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("config error: {0}")]
    Config(String),
    #[error("font parse error: {0}")]
    FontParse(String),
    #[error("invalid edge pair ({0}, {1}): need 0 <= edge0 < edge1 <= 1")]
    InvalidEdges(f32, f32),
    #[error("empty character set")]
    EmptyCharSet,
    #[error("glyph {0:?} missing from font")]
    MissingGlyph(char),
    #[error("glyph {ch:?} too large for atlas entry ({samples} samples)")]
    GlyphTooLarge { ch: char, samples: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
