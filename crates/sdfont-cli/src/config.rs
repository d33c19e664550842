use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use sdfont::{charset, FontSpec};

/// One entry of the font-set descriptor file.
#[derive(Deserialize)]
pub struct FontConfig {
    pub name: String,
    pub font: String,
    pub size: u8,
    pub edges: [f32; 2],
    /// Range expression like "a-z0-9"; defaults to ASCII printable.
    #[serde(default)]
    pub chars: Option<String>,
}

/// Load a JSON font-set descriptor into validated-ready specs.
///
/// Font paths are resolved relative to the descriptor's directory.
pub fn load_config(path: &Path) -> Result<Vec<FontSpec>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let configs: Vec<FontConfig> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    Ok(configs
        .into_iter()
        .map(|config| {
            let chars = match &config.chars {
                Some(expr) => charset::parse_charset(expr),
                None => charset::default_charset(),
            };
            FontSpec {
                name: config.name,
                source: base.join(&config.font),
                pixel_size: config.size,
                edges: (config.edges[0], config.edges[1]),
                chars,
            }
        })
        .collect())
}
