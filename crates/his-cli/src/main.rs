//! rgb2his - converts red, green and blue raster bands to hue, intensity
//! and saturation.
//!
//! Reads three co-registered single-band TIFFs holding raw channel levels,
//! converts every cell with the HIS (hue, intensity, saturation) model and
//! writes three 32-bit float TIFFs, each with a YAML metadata sidecar.

use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod convert;
mod finish;

#[derive(Parser)]
#[command(name = "rgb2his")]
#[command(author, version, about = "Transforms raster bands from RGB (red, green, blue) color space to HIS (hue, intensity, saturation) color space")]
#[command(long_about = "
Transforms three raster bands from RGB (red, green, blue) color space to
HIS (hue, intensity, saturation) color space.

Hue is written in degrees [0, 360), intensity and saturation in [0, 1].
Cells where any input is no-data are no-data in every output, and hue is
no-data wherever the input is a shade of grey.

Examples:
  rgb2his --red r.tif --green g.tif --blue b.tif \\
          --hue h.tif --intensity i.tif --saturation s.tif
  rgb2his ... --bits 16 --nodata 0
  RUST_LOG=his_color=trace rgb2his ...
")]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    /// Input raster for the red channel
    #[arg(long)]
    red: PathBuf,

    /// Input raster for the green channel
    #[arg(long)]
    green: PathBuf,

    /// Input raster for the blue channel
    #[arg(long)]
    blue: PathBuf,

    /// Output hue raster (degrees)
    #[arg(long)]
    hue: PathBuf,

    /// Output intensity raster
    #[arg(long)]
    intensity: PathBuf,

    /// Output saturation raster
    #[arg(long)]
    saturation: PathBuf,

    /// Bit depth of the input imagery (2-16)
    #[arg(short, long, default_value_t = 8, allow_negative_numbers = true)]
    bits: i64,

    /// Raw input level treated as no-data
    #[arg(long, allow_negative_numbers = true)]
    nodata: Option<f64>,

    /// Rows converted per block
    #[arg(long, default_value_t = 64)]
    block_rows: u32,

    /// Replace existing output rasters
    #[arg(long)]
    overwrite: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let bands = convert::run(&cli.args)?;
    for meta in &bands {
        info!(band = %meta.band, min = ?meta.range.min(), max = ?meta.range.max(), "Band range");
    }
    Ok(())
}
