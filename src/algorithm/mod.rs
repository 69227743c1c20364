//! Image-level transformation built on the spatial primitives

/// Whole-image flip driver and its outcome
pub mod executor;

pub use executor::{FlipOutcome, TileFlipper};
