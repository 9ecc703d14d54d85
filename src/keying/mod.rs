//! # Keying Module
//!
//! Turns the near-black background of an overlay transparent. A pixel is keyed
//! out when its red, green and blue channels are all below [`KEY_THRESHOLD`];
//! what happens to every other pixel is decided by a named [`KeyMode`].
//!
//! ## Built-in Modes
//!
//! - **white**: foreground pixels become opaque white (text masks)
//! - **passthrough**: foreground pixels keep their original RGBA (colored artwork)
//!
//! ## Usage
//!
//! ```rust
//! use keyed_compositor::keying::{declassify, KeyModeRegistry};
//! use keyed_compositor::raster::Canvas;
//!
//! let registry = KeyModeRegistry::new();
//! let white = registry.resolve("white").unwrap();
//!
//! let overlay = Canvas::new_filled(2, 2, [0, 0, 0, 255]);
//! let keyed = declassify(&overlay, white.as_ref());
//! assert_eq!(keyed.get_pixel(0, 0), [0, 0, 0, 0]);
//! ```

pub mod classify;
pub mod registry;
pub mod traits;

// Mode implementations
pub mod passthrough;
pub mod white;

pub use classify::{classify, declassify, PixelClass, KEY_THRESHOLD, TRANSPARENT};
pub use registry::KeyModeRegistry;
pub use traits::KeyMode;

pub use passthrough::PassthroughMode;
pub use white::WhiteMode;
