//! Closed-form bouncing motion and the collisions derived from it.

/// Wall contacts, proximity and last-collision frame.
pub mod collision;
/// Triangle-wave reflection per axis.
pub mod reflect;
