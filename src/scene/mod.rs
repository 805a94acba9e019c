//! Scene configuration and its clamped, resolved form.

/// Serializable scene description and host-derived defaults.
pub mod config;
/// Defensive clamping and bounce tracks.
pub mod resolve;
