use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::error::Result;

/// An RGBA raster held in memory for the duration of one compositing run.
///
/// This is a thin wrapper around an RGBA image buffer. Transformations never
/// mutate a canvas in place; they build a new one (see [`Canvas::map_pixels`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Create a new canvas from an RGBA image buffer
    pub fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Create a new fully transparent canvas with the given dimensions
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self { buffer: ImageBuffer::new(width, height) }
    }

    /// Create a new canvas with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba(color));
        Self { buffer }
    }

    /// Create a canvas by evaluating `f` at every coordinate
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let buffer = ImageBuffer::from_fn(width, height, |x, y| Rgba(f(x, y)));
        Self { buffer }
    }

    /// Decode an image file into a canvas. See [`crate::raster::load_canvas`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        super::load_canvas(path)
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGBA array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Iterate over `(x, y, rgba)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        self.buffer.enumerate_pixels().map(|(x, y, p)| (x, y, p.0))
    }

    /// Build a new canvas of the same size by mapping every pixel independently
    pub fn map_pixels<F>(&self, mut f: F) -> Canvas
    where
        F: FnMut([u8; 4]) -> [u8; 4],
    {
        Self::from_fn(self.width(), self.height(), |x, y| f(self.get_pixel(x, y)))
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Raw RGBA bytes in row-major order
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Encode the canvas as PNG. See [`crate::raster::save_png`].
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        super::save_png(self, path)
    }
}
