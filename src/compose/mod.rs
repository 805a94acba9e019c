//! Fixed-order draw layer assembly.

/// Layer records and the compositor.
pub mod layers;
