use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::error::{RasterError, Result};
use crate::raster::types::Canvas;

/// Encode a canvas as an RGBA PNG, whatever extension `path` carries.
pub fn save_png<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
    let path = path.as_ref();

    debug!("Writing {}x{} PNG to: {:?}", canvas.width(), canvas.height(), path);

    canvas
        .as_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| RasterError::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(())
}
