//! # Composite Module
//!
//! Bringing the overlay to the background's resolution and blending it on top.

pub mod blend;
pub mod resize;

pub use blend::{blend_pixel, composite_over};
pub use resize::{resize_to, resize_to_match};
