//! geodome - geodesic dome STL generator
//!
//! Generates a Spaceship Earth-style geodesic sphere and writes it as an
//! ASCII STL document, to stdout by default. Geometry parameters are
//! compiled-in constants; diagnostics go to stderr so the STL stream stays
//! clean.

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{DomeConfig, DEFAULT_SOLID_NAME};
use geodome_stl::write_dome;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geodome")]
#[command(about = "Generates a Spaceship Earth-style geodesic sphere as ASCII STL")]
#[command(version)]
struct Cli {
    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Solid name embedded in the STL header
    #[arg(long, default_value = DEFAULT_SOLID_NAME)]
    name: String,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DomeConfig::default();

    let facets = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            write_dome(&config, &cli.name, BufWriter::new(file))
        }
        None => {
            let stdout = io::stdout();
            write_dome(&config, &cli.name, BufWriter::new(stdout.lock()))
        }
    }
    .context("dome generation failed")?;

    tracing::info!(
        facets,
        subdivisions = config.subdivisions,
        peak_factor = config.peak_factor,
        "wrote geodesic dome"
    );

    Ok(())
}
