//! Per-frame visual state derived from motion: hue and secondary curves.

/// Collision-driven hue.
pub mod color;
/// Entrance, hit and ambient curves.
pub mod curves;
