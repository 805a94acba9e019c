//! Stateless curve primitives: interpolation, springs and periodic signals.

/// Piecewise-linear interpolation.
pub mod interp;
/// Periodic and timed procedural curves.
pub mod proc;
/// Closed-form damped spring.
pub mod spring;
