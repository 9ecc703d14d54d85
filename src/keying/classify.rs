use tracing::debug;

use crate::keying::KeyMode;
use crate::raster::Canvas;

/// Channel value below which R, G and B all have to fall for a pixel to be keyed out
pub const KEY_THRESHOLD: u8 = 50;

/// Output value for keyed-out pixels
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Per-pixel keying decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Near-black; becomes fully transparent
    Background,
    /// Anything else; handed to the active [`KeyMode`]
    Foreground,
}

/// Classify a pixel from its color channels. Input alpha is ignored.
pub fn classify(pixel: [u8; 4]) -> PixelClass {
    let [r, g, b, _] = pixel;
    if r < KEY_THRESHOLD && g < KEY_THRESHOLD && b < KEY_THRESHOLD {
        PixelClass::Background
    } else {
        PixelClass::Foreground
    }
}

/// Key the near-black background out of `overlay`.
///
/// Returns a new canvas of the same size: background pixels become
/// [`TRANSPARENT`], foreground pixels go through `mode`.
pub fn declassify(overlay: &Canvas, mode: &dyn KeyMode) -> Canvas {
    let mut keyed = 0usize;

    let output = overlay.map_pixels(|pixel| match classify(pixel) {
        PixelClass::Background => {
            keyed += 1;
            TRANSPARENT
        }
        PixelClass::Foreground => mode.foreground(pixel),
    });

    let total = overlay.width() as usize * overlay.height() as usize;
    debug!("Keyed {}/{} pixels transparent using '{}' mode", keyed, total, mode.name());

    output
}
