use std::path::Path;

use super::{Raster, RasterError};

/// Encodes `raster` as a PNG at `path`.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), RasterError> {
    let too_large = || RasterError::Dimensions { width: raster.width(), height: raster.height() };
    let w = u32::try_from(raster.width()).map_err(|_| too_large())?;
    let h = u32::try_from(raster.height()).map_err(|_| too_large())?;
    let img = image::RgbaImage::from_raw(w, h, raster.to_rgba8()).ok_or_else(too_large)?;
    img.save(path)?;
    log::debug!("wrote {}×{} raster to {}", w, h, path.display());
    Ok(())
}
