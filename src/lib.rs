//! # Keyed-Compositor
//!
//! Key the near-black background out of a text or logo image and composite what
//! remains onto an icon background.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keyed_compositor::{
//!     keying::KeyModeRegistry,
//!     pipeline::{CompositeJob, KeyedCompositor},
//! };
//!
//! # fn main() -> keyed_compositor::Result<()> {
//! let registry = KeyModeRegistry::new();
//! let compositor = KeyedCompositor::new(registry.resolve("white")?);
//!
//! let outcome = compositor.run(&CompositeJob {
//!     background: "brand/icon-gradient-only.png".into(),
//!     overlay: "brand/icon-italic.png".into(),
//!     output: "brand/icon-gradient-final.png".into(),
//!     fallback: true,
//! })?;
//!
//! if let Some(reason) = outcome.warning() {
//!     eprintln!("fell back to the plain background: {}", reason);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`raster`] - RGBA canvas, image decoding and PNG output
//! - [`keying`] - near-black classification and the named key modes
//! - [`composite`] - resizing and source-over blending
//! - [`pipeline`] - the end-to-end run with its fallback policy
//! - [`config`] - configuration management
//!
//! ## Custom Key Modes
//!
//! A mode decides what happens to pixels that are not keyed out. Implement the
//! [`KeyMode`](keying::KeyMode) trait and register it:
//!
//! ```rust
//! use keyed_compositor::keying::{KeyMode, KeyModeRegistry};
//!
//! struct GrayMode;
//!
//! impl KeyMode for GrayMode {
//!     fn name(&self) -> &str {
//!         "gray"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Force foreground pixels to opaque mid-gray"
//!     }
//!
//!     fn foreground(&self, _pixel: [u8; 4]) -> [u8; 4] {
//!         [128, 128, 128, 255]
//!     }
//! }
//!
//! let mut registry = KeyModeRegistry::new();
//! registry.register("gray".to_string(), || Box::new(GrayMode));
//! assert!(registry.has_mode("gray"));
//! ```

pub mod composite;
pub mod config;
pub mod error;
pub mod keying;
pub mod pipeline;
pub mod raster;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{CompositorError, Result},
    keying::{KeyMode, KeyModeRegistry},
    pipeline::{CompositeJob, CompositeOutcome, KeyedCompositor},
    raster::Canvas,
};
