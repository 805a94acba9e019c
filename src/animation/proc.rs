use crate::{animation::interp::remap_clamped, foundation::core::FrameIndex};

/// Sinusoidal oscillation in `[0, 1]`, starting at the midpoint and rising.
///
/// `period_frames` is floored at 1.
pub fn breathe(frame: FrameIndex, period_frames: u64) -> f64 {
    let period = period_frames.max(1) as f64;
    0.5 + 0.5 * (std::f64::consts::TAU * frame.0 as f64 / period).sin()
}

/// Sawtooth phase in `[0, 1)` that wraps every `period_frames` (floored at 1).
pub fn loop_phase(frame: FrameIndex, period_frames: u64) -> f64 {
    let period = period_frames.max(1);
    (frame.0 % period) as f64 / period as f64
}

/// Linear ramp from `from` to `to` over `[start, start + duration]` frames, held outside.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    /// First frame of the ramp.
    pub start: u64,
    /// Length in frames; 0 makes a step at `start`.
    pub duration: u64,
    /// Value at and before `start`.
    pub from: f64,
    /// Value at and after `start + duration`.
    pub to: f64,
}

impl Ramp {
    /// Sample the ramp at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> f64 {
        let start = self.start as f64;
        let end = start + self.duration as f64;
        remap_clamped(frame.0 as f64, [start, end], [self.from, self.to])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
