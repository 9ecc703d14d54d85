//! # Raster Module
//!
//! The in-memory RGBA canvas plus decoding from and encoding to image files.

pub mod types;

mod loader;
mod writer;

pub use types::Canvas;
pub use loader::load_canvas;
pub use writer::save_png;
