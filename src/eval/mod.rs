//! Frame and range evaluation entry points.

/// Single-frame and batch evaluation.
pub mod evaluator;
/// Layer-list fingerprints.
pub mod fingerprint;
