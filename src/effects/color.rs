use crate::{
    animation::{interp::remap_clamped, spring::spring},
    foundation::core::FrameIndex,
    motion::collision::CollisionState,
    scene::resolve::Scene,
};

/// Hue of the object at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorState {
    /// `(total_bounces * step) mod 360`.
    pub target_hue_deg: f64,
    /// `target - step`: where the current easing window starts.
    pub from_hue_deg: f64,
    /// Spring progress of the current window, unclamped.
    pub ease: f64,
    /// Displayed hue rotation, always within `[from, target]`.
    pub hue_deg: f64,
}

/// Target hue after `total_bounces` contacts.
pub fn target_hue(total_bounces: u64, hue_step_deg: f64) -> f64 {
    (total_bounces as f64 * hue_step_deg) % 360.0
}

/// Displayed hue at `frame`.
///
/// Each contact opens a new easing window from the previous target to the new one. The window's
/// spring clock runs from the most recent contact frame (from frame 0 before the first one), so
/// the hue is a pure function of the frame and never of a stored "current hue".
pub fn color_at(scene: &Scene, frame: FrameIndex, collision: &CollisionState) -> ColorState {
    let step = scene.hue_step_deg;
    let target = target_hue(collision.total_bounces, step);
    let from = target - step;

    let elapsed = collision.frames_since_collision(frame).unwrap_or(frame.0);
    let ease = spring(elapsed as f64, scene.fps, scene.config.springs.hue);

    ColorState {
        target_hue_deg: target,
        from_hue_deg: from,
        ease,
        hue_deg: remap_clamped(ease, [0.0, 1.0], [from, target]),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
