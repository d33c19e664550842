use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sdfont::{build_atlases, charset, codec, compute_sdf, emit, FontSpec, Rasterizer};
use std::fs;
use std::path::PathBuf;

use crate::preview::sdf_to_ascii;
mod config;
mod preview;

#[derive(Parser)]
#[command(name = "sdfont", about = "Quantized SDF font atlas generator")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Build all atlases from a font-set descriptor and emit C tables
    Generate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Build atlases and print per-font compression statistics
    Inspect {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Run one glyph through the pipeline and print its decoded SDF
    Preview {
        #[arg(short, long)]
        font: PathBuf,
        #[arg(short, long)]
        size: u8,
        #[arg(short = 'c', long = "char")]
        character: char,
        /// Smoothstep edge pair, e.g. "0.35,0.65"
        #[arg(long, default_value = "0.35,0.65")]
        edges: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Generate { config, out_dir } => {
            let specs = config::load_config(&config)?;
            let atlases = build_atlases(&specs)?;
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let h_path = out_dir.join("fonts.h");
            let c_path = out_dir.join("fonts.c");
            fs::write(&h_path, emit::emit_header(&atlases))?;
            fs::write(&c_path, emit::emit_source(&atlases))?;
            for atlas in &atlases {
                println!(
                    "{}: {} glyphs, {} bytes",
                    atlas.name,
                    atlas.glyphs.len(),
                    atlas.sdf_data.len()
                );
            }
            eprintln!("Wrote {} and {}", h_path.display(), c_path.display());
        }
        Cmd::Inspect { config } => {
            let specs = config::load_config(&config)?;
            let atlases = build_atlases(&specs)?;
            for (atlas, spec) in atlases.iter().zip(&specs) {
                let raw: usize = atlas
                    .glyphs
                    .iter()
                    .map(|g| g.width as usize * g.height as usize)
                    .sum();
                println!("{} ({}px, {:?})", atlas.name, atlas.pixel_size, spec.source);
                println!("  Glyphs: {}", atlas.glyphs.len());
                println!("  Raw samples: {} bytes", raw);
                println!(
                    "  Compressed: {} bytes ({:.1}%)",
                    atlas.sdf_data.len(),
                    if raw > 0 {
                        100.0 * atlas.sdf_data.len() as f64 / raw as f64
                    } else {
                        0.0
                    }
                );
                if let Some(widest) = atlas.glyphs.iter().max_by_key(|g| g.width) {
                    println!(
                        "  Widest glyph: {:?} ({}x{})",
                        widest.character, widest.width, widest.height
                    );
                }
            }
        }
        Cmd::Preview {
            font,
            size,
            character: ch,
            edges,
        } => {
            let (edge0, edge1) = parse_edges(&edges)?;
            // size/edge validation happens before the font file is read
            FontSpec::new("preview", &font, size, (edge0, edge1))
                .with_chars(charset::parse_charset(&ch.to_string()))
                .validate()?;
            let rasterizer = Rasterizer::from_file(&font, size)?;
            let glyph = rasterizer.coverage(ch)?;
            let sdf = compute_sdf(&glyph.coverage, edge0, edge1);
            let records = codec::encode(sdf.samples());
            let decoded = codec::decode(&records);
            println!("{}", sdf_to_ascii(&decoded, sdf.width));
            eprintln!(
                "{}x{} px, advance {:.1}, {} records ({} bytes)",
                sdf.width,
                sdf.height,
                glyph.advance,
                records.len(),
                records.len() * 3
            );
        }
    }
    Ok(())
}

fn parse_edges(edges: &str) -> Result<(f32, f32)> {
    let Some((e0, e1)) = edges.split_once(',') else {
        bail!("edges must be two comma-separated values, got {edges:?}");
    };
    Ok((
        e0.trim().parse().context("invalid edge0")?,
        e1.trim().parse().context("invalid edge1")?,
    ))
}
