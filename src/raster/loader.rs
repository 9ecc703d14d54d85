use std::path::Path;

use image::io::Reader as ImageReader;
use tracing::{debug, info};

use crate::error::{RasterError, Result};
use crate::raster::types::Canvas;

/// Decode an image file into an RGBA [`Canvas`].
///
/// The format is sniffed from the file contents, so a JPEG saved with a `.png`
/// extension still loads. RGB, grayscale and paletted sources gain an opaque
/// alpha channel.
pub fn load_canvas<P: AsRef<Path>>(path: P) -> Result<Canvas> {
    let path = path.as_ref();
    let decode_failed = |reason: String| RasterError::Decode {
        path: path.display().to_string(),
        reason,
    };

    debug!("Decoding image from: {:?}", path);

    let image = ImageReader::open(path)
        .map_err(|e| decode_failed(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_failed(e.to_string()))?
        .decode()
        .map_err(|e| decode_failed(e.to_string()))?;

    let color = image.color();
    let canvas = Canvas::new(image.to_rgba8());

    info!("Loaded {:?}: {}x{} ({:?})", path, canvas.width(), canvas.height(), color);

    Ok(canvas)
}
