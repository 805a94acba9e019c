//! Secondary "juice" curves.
//!
//! Every curve is a pure function of the frame index, an optional delay and, for the hit
//! reactions, the wall proximity. None of them reads another curve's output except where noted
//! (glow strength feeds the blur radius and the icon halo).

use crate::{
    animation::{
        interp::remap_clamped,
        proc::{Ramp, breathe, loop_phase},
        spring::spring,
    },
    foundation::core::{FrameIndex, Vec2},
    scene::resolve::Scene,
};

/// Object entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Entrance {
    /// Linear fade-in over the intro frames.
    pub opacity: f64,
    /// Spring-driven scale, 0 to ~1.
    pub scale: f64,
    /// Vertical offset in pixels, shrinking to 0 as the scale settles.
    pub offset_y: f64,
}

/// Icon entrance, delayed after the object's.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IconEntrance {
    /// Spring progress.
    pub progress: f64,
    /// Opacity, up to the configured icon opacity.
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
}

/// Wall-hit glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Glow {
    /// `[0, 1]`, equal to the hit progress.
    pub strength: f64,
    /// Object blur radius derived from `strength`.
    pub blur_px: f64,
}

/// Every secondary curve at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EffectCurves {
    /// Object entrance.
    pub entrance: Entrance,
    /// Icon entrance.
    pub icon: IconEntrance,
    /// Wall proximity mapped through the hit knots, 1 at a wall.
    pub hit_progress: f64,
    /// Punch scale multiplier.
    pub punch_scale: f64,
    /// Per-axis squash multiplier.
    pub squash: Vec2,
    /// Hit glow.
    pub glow: Glow,
    /// Icon breathing scale multiplier.
    pub icon_scale: f64,
    /// Vertical shimmer offset in pixels.
    pub shimmer_shift: f64,
    /// Accent line opacity.
    pub accent_opacity: f64,
}

/// Object entrance at `frame`.
pub fn entrance(scene: &Scene, frame: FrameIndex) -> Entrance {
    let cfg = &scene.config;
    let opacity = remap_clamped(
        frame.0 as f64,
        [0.0, cfg.timing.intro_frames as f64],
        [0.0, 1.0],
    );
    let scale = spring(frame.0 as f64, scene.fps, cfg.springs.intro);
    Entrance {
        opacity,
        scale,
        offset_y: remap_clamped(scale, [0.0, 1.0], [cfg.juice.intro_offset_px, 0.0]),
    }
}

/// Icon entrance at `frame`.
pub fn icon_entrance(scene: &Scene, frame: FrameIndex) -> IconEntrance {
    let cfg = &scene.config;
    let elapsed = frame.0 as f64 - cfg.timing.icon_delay_frames as f64;
    let progress = spring(elapsed, scene.fps, cfg.springs.icon);
    IconEntrance {
        progress,
        opacity: remap_clamped(progress, [0.0, 1.0], [0.0, cfg.juice.icon_opacity]),
        offset_y: remap_clamped(progress, [0.0, 1.0], [cfg.juice.icon_offset_px, 0.0]),
    }
}

/// Wall proximity mapped through the hit knots: 1 at a wall, 0 mid-flight.
pub fn hit_progress(scene: &Scene, proximity: f64) -> f64 {
    scene.config.juice.hit_knots.sample(proximity)
}

/// Punch scale multiplier.
///
/// The peak scale grows with `hit`; a stiff spring whose start lags by up to the punch window
/// eases into it.
pub fn punch(scene: &Scene, frame: FrameIndex, hit: f64) -> f64 {
    let cfg = &scene.config;
    let lag = (hit * cfg.timing.punch_frames as f64).round();
    let progress = spring(frame.0 as f64 - lag, scene.fps, cfg.springs.punch);
    let peak = remap_clamped(hit, [0.0, 1.0], [1.0, cfg.juice.punch_scale]);
    remap_clamped(progress, [0.0, 1.0], [1.0, peak])
}

/// Axis-asymmetric squash: wider and shorter at a wall.
pub fn squash(scene: &Scene, hit: f64) -> Vec2 {
    let amt = remap_clamped(hit, [0.0, 1.0], [0.0, 1.0]);
    let peak = scene.config.juice.squash;
    Vec2::new(
        remap_clamped(amt, [0.0, 1.0], [1.0, peak.x]),
        remap_clamped(amt, [0.0, 1.0], [1.0, peak.y]),
    )
}

/// Glow strength and the blur radius it drives.
pub fn glow(scene: &Scene, hit: f64) -> Glow {
    let strength = remap_clamped(hit, [0.0, 1.0], [0.0, 1.0]);
    Glow {
        strength,
        blur_px: remap_clamped(strength, [0.0, 1.0], [0.0, scene.config.juice.hit_blur_px]),
    }
}

/// Icon breathing scale multiplier; independent of collisions.
pub fn icon_breathe(scene: &Scene, frame: FrameIndex) -> f64 {
    let cfg = &scene.config;
    1.0 + cfg.juice.breathe_amplitude * breathe(frame, cfg.timing.breathe_period_frames)
}

/// Looping vertical offset of the shimmer overlay.
pub fn shimmer_shift(scene: &Scene, frame: FrameIndex) -> f64 {
    let cfg = &scene.config;
    let phase = loop_phase(frame, cfg.timing.shimmer_period_frames);
    remap_clamped(phase, [0.0, 1.0], [0.0, cfg.juice.shimmer_travel_px])
}

/// Accent line fade-in, starting once the icon begins its entrance.
pub fn accent_opacity(scene: &Scene, frame: FrameIndex) -> f64 {
    let cfg = &scene.config;
    Ramp {
        start: cfg.timing.icon_delay_frames,
        duration: cfg.timing.accent_fade_frames,
        from: 0.0,
        to: cfg.juice.accent_opacity,
    }
    .sample(frame)
}

/// Evaluate every curve at `frame` for a wall `proximity`.
pub fn curves_at(scene: &Scene, frame: FrameIndex, proximity: f64) -> EffectCurves {
    let hit = hit_progress(scene, proximity);
    EffectCurves {
        entrance: entrance(scene, frame),
        icon: icon_entrance(scene, frame),
        hit_progress: hit,
        punch_scale: punch(scene, frame, hit),
        squash: squash(scene, hit),
        glow: glow(scene, hit),
        icon_scale: icon_breathe(scene, frame),
        shimmer_shift: shimmer_shift(scene, frame),
        accent_opacity: accent_opacity(scene, frame),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/curves.rs"]
mod tests;
