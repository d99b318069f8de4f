//! The conversion run: open inputs, stream rows, finalize outputs.

use std::path::Path;

use anyhow::{bail, Context, Result};
use his_color::RowConverter;
use his_core::{BitDepth, HisBand};
use his_io::{BandMetadata, History, RowSource, TiffBandReader, TiffBandWriter};
use his_ops::{ProgressCallback, RowPipeline};
use tracing::{debug, info, trace};

use crate::finish;
use crate::ConvertArgs;

/// Percent step between progress messages.
const PROGRESS_STEP: u32 = 2;

/// Logs progress whenever another `step` percent of rows is done.
pub struct PercentLogger {
    step: u32,
    next: u32,
}

impl PercentLogger {
    pub fn new(step: u32) -> Self {
        Self { step: step.max(1), next: 0 }
    }
}

impl ProgressCallback for PercentLogger {
    fn on_progress(&mut self, completed: u32, total: u32) {
        if total == 0 {
            return;
        }
        let percent = (completed as u64 * 100 / total as u64) as u32;
        if percent >= self.next {
            info!(completed, total, "{}%", percent);
            self.next = (percent / self.step + 1) * self.step;
        }
    }
}

/// Runs the conversion, returning the metadata written for hue, intensity
/// and saturation.
pub fn run(args: &ConvertArgs) -> Result<Vec<BandMetadata>> {
    trace!(red = %args.red.display(), green = %args.green.display(), blue = %args.blue.display(), "convert::run");

    let depth = BitDepth::new(args.bits).context("Invalid bit depth definition")?;
    let max_colors = depth.max_colors();
    debug!("{}-bit data ranging in [0, {})", depth.bits(), max_colors);

    let outputs = [&args.hue, &args.intensity, &args.saturation];
    for path in outputs {
        if path.exists() && !args.overwrite {
            bail!("<{}> already exists (use --overwrite to replace it)", path.display());
        }
    }

    let red = open_band(&args.red, args.nodata)?;
    let green = open_band(&args.green, args.nodata)?;
    let blue = open_band(&args.blue, args.nodata)?;
    let (width, height) = red.dimensions();

    let sinks = HisBand::ALL.map(|band| {
        let writer = TiffBandWriter::create(outputs[band.index()], width, height);
        match band.period() {
            Some(period) => writer.with_period(period),
            None => writer,
        }
    });
    let converter = RowConverter::from_depth(depth);
    let mut pipeline = RowPipeline::new([red, green, blue], sinks, converter)
        .context("Input rasters must have the same dimensions")?
        .with_block_rows(args.block_rows);

    let summary = pipeline
        .run_with_progress(PercentLogger::new(PROGRESS_STEP))
        .context("Conversion failed")?;
    debug!(rows = summary.rows, columns = summary.columns, "Rows converted");

    let history = History {
        module: "rgb2his".to_string(),
        command: std::env::args().collect::<Vec<_>>().join(" "),
        sources: [&args.red, &args.green, &args.blue]
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    };

    finish::close_bands(pipeline.into_sinks(), width, height, &history)
}

fn open_band(path: &Path, nodata: Option<f64>) -> Result<TiffBandReader> {
    let band = TiffBandReader::open(path, nodata)
        .with_context(|| format!("Unable to open raster <{}>", path.display()))?;
    debug!(path = %band.path().display(), width = band.width(), height = band.height(), "Opened band");
    Ok(band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use his_core::Sample;
    use his_io::metadata::read_sidecar;
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use tiff::encoder::{colortype, TiffEncoder};

    fn write_gray8(path: &Path, width: u32, height: u32, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        encoder
            .write_image::<colortype::Gray8>(width, height, data)
            .unwrap();
    }

    fn args_in(dir: &Path) -> ConvertArgs {
        ConvertArgs {
            red: dir.join("red.tif"),
            green: dir.join("green.tif"),
            blue: dir.join("blue.tif"),
            hue: dir.join("hue.tif"),
            intensity: dir.join("intensity.tif"),
            saturation: dir.join("saturation.tif"),
            bits: 8,
            nodata: None,
            block_rows: 64,
            overwrite: false,
        }
    }

    fn read_all(path: &PathBuf) -> Vec<Sample> {
        let mut band = TiffBandReader::open(path, None).unwrap();
        let (w, h) = band.dimensions();
        let mut out = vec![None; (w * h) as usize];
        for (row, chunk) in out.chunks_mut(w as usize).enumerate() {
            band.read_row(row as u32, chunk).unwrap();
        }
        out
    }

    #[test]
    fn test_primaries_end_to_end() {
        let dir = tempdir().unwrap();
        let args = args_in(dir.path());
        write_gray8(&args.red, 4, 1, &[255, 0, 0, 128]);
        write_gray8(&args.green, 4, 1, &[0, 255, 0, 128]);
        write_gray8(&args.blue, 4, 1, &[0, 0, 255, 128]);

        let bands = run(&args).unwrap();
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].band, HisBand::Hue);

        let hue = read_all(&args.hue);
        assert_eq!(&hue[..3], &[Some(0.0), Some(120.0), Some(240.0)]);
        assert_eq!(hue[3], None);

        let intensity = read_all(&args.intensity);
        assert_relative_eq!(intensity[3].unwrap(), 128.0 / 255.0, epsilon = 1e-6);

        let meta = read_sidecar(&args.hue).unwrap();
        assert_eq!(meta.units.as_deref(), Some("degrees"));
        assert_eq!(meta.range.min_max(), Some((0.0, 240.0)));
        let history = meta.history.unwrap();
        assert_eq!(history.sources.len(), 3);
    }

    #[test]
    fn test_invalid_bits_rejected_before_opening() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.bits = 0;
        // inputs do not exist; the bit depth must fail first
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Invalid bit depth"));
        assert!(!args.hue.exists());
    }

    #[test]
    fn test_existing_output_refused() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        write_gray8(&args.red, 1, 1, &[1]);
        write_gray8(&args.green, 1, 1, &[2]);
        write_gray8(&args.blue, 1, 1, &[3]);
        std::fs::write(&args.saturation, b"keep").unwrap();

        assert!(run(&args).is_err());
        assert_eq!(std::fs::read(&args.saturation).unwrap(), b"keep");

        args.overwrite = true;
        run(&args).unwrap();
        assert_eq!(read_all(&args.saturation).len(), 1);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let dir = tempdir().unwrap();
        let args = args_in(dir.path());
        write_gray8(&args.red, 2, 1, &[1, 2]);
        write_gray8(&args.green, 1, 2, &[1, 2]);
        write_gray8(&args.blue, 2, 1, &[1, 2]);
        assert!(run(&args).is_err());
        assert!(!args.hue.exists());
    }

    #[test]
    fn test_nodata_level() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.nodata = Some(0.0);
        write_gray8(&args.red, 2, 1, &[0, 200]);
        write_gray8(&args.green, 2, 1, &[50, 100]);
        write_gray8(&args.blue, 2, 1, &[50, 50]);
        run(&args).unwrap();

        let saturation = read_all(&args.saturation);
        assert_eq!(saturation[0], None);
        assert!(saturation[1].is_some());
    }

    #[test]
    fn test_percent_logger_steps() {
        let mut logger = PercentLogger::new(2);
        logger.on_progress(1, 100);
        assert_eq!(logger.next, 2);
        logger.on_progress(2, 100);
        assert_eq!(logger.next, 4);
        logger.on_progress(100, 100);
        assert_eq!(logger.next, 102);
        // zero rows never divides
        PercentLogger::new(2).on_progress(0, 0);
    }

    #[test]
    fn test_percent_logger_small_image() {
        // one callback per row: 100 rows cross every 2% step
        let mut logger = PercentLogger::new(2);
        let mut messages = 0;
        for row in 1..=100 {
            let before = logger.next;
            logger.on_progress(row, 100);
            if logger.next != before {
                messages += 1;
            }
        }
        assert_eq!(messages, 51);
        assert_eq!(logger.next, 102);
    }
}
