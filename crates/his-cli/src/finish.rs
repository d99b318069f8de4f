//! Output finalization.
//!
//! Once every row is through the pipeline each output band is encoded, its
//! range taken from the stored values, and a sidecar written with the title,
//! units, grey-scale color table and command history.

use anyhow::{Context, Result};
use his_core::HisBand;
use his_io::metadata::write_sidecar;
use his_io::{BandMetadata, History, TiffBandWriter};
use tracing::{debug, info};

/// Finishes hue, intensity and saturation writers in that order.
pub fn close_bands(
    writers: [TiffBandWriter; 3],
    width: u32,
    height: u32,
    history: &History,
) -> Result<Vec<BandMetadata>> {
    let mut bands = Vec::with_capacity(3);
    for (band, writer) in HisBand::ALL.into_iter().zip(writers) {
        let path = writer.path().to_path_buf();
        let range = writer
            .finish()
            .with_context(|| format!("Unable to write <{}>", path.display()))?;

        let meta = BandMetadata::for_band(band, width, height, range).with_history(history.clone());
        let sidecar = write_sidecar(&path, &meta)
            .with_context(|| format!("Unable to write metadata for <{}>", path.display()))?;
        debug!(band = %band, sidecar = %sidecar.display(), rules = meta.colors.rules.len(), "Wrote sidecar");
        info!(band = %band, path = %path.display(), "Band written");

        bands.push(meta);
    }
    Ok(bands)
}
