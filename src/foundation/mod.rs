//! Frame, color and transform primitives shared by every stage.

/// Frame indices, frame rates, canvas, colors and transforms.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Rounding and hashing helpers.
pub mod math;
