//! # Compositing Pipeline
//!
//! Runs load, resize, key, composite and save for one background/overlay pair
//! and applies the background-copy fallback when a step fails.

pub mod engine;

pub use engine::{CompositeJob, CompositeOutcome, KeyedCompositor, FELL_BACK_EXIT_STATUS};
