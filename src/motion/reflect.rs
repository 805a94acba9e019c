use crate::{
    foundation::core::{Fps, FrameIndex, Vec2},
    scene::resolve::{Axis, AxisTrack, Scene},
};

/// Triangle wave: `[0, inf) -> [0, 1]`, rising on even units and falling on odd ones.
pub fn reflect01(u: f64) -> f64 {
    let m = u.rem_euclid(2.0);
    if m <= 1.0 { m } else { 2.0 - m }
}

/// State of one axis at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AxisMotion {
    /// Position within `[min, max]`.
    pub position: f64,
    /// Wall contacts so far, `floor(cycles)`.
    pub bounces: u64,
    /// Travel ranges covered since the left/top wall, `>= 0`.
    pub cycles: f64,
}

/// Position and bounce counters of both axes at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MotionState {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Horizontal axis.
    pub x: AxisMotion,
    /// Vertical axis.
    pub y: AxisMotion,
}

impl MotionState {
    /// Top-left of the object box.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position, self.y.position)
    }

    /// State of `axis`.
    pub fn axis(&self, axis: Axis) -> &AxisMotion {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Normalized progress along `track` at `frame`: travel ranges covered since the min wall.
pub fn cycles_at(track: &AxisTrack, fps: Fps, frame: FrameIndex) -> f64 {
    let secs = fps.frames_to_secs(frame.0);
    ((track.start - track.min + track.speed * secs) / track.travel).max(0.0)
}

/// Closed-form state of one axis at `frame`.
pub fn axis_motion(track: &AxisTrack, fps: Fps, frame: FrameIndex) -> AxisMotion {
    let cycles = cycles_at(track, fps, frame);
    AxisMotion {
        position: (track.min + reflect01(cycles) * track.travel).clamp(track.min, track.max),
        bounces: cycles.floor() as u64,
        cycles,
    }
}

/// Wall contacts on `track` up to and including `frame`.
pub fn bounces_at(track: &AxisTrack, fps: Fps, frame: FrameIndex) -> u64 {
    cycles_at(track, fps, frame).floor() as u64
}

/// First frame at which `track` has made `n` wall contacts.
///
/// Solved in closed form, then nudged by at most a frame or two so the answer agrees exactly
/// with [`bounces_at`] despite rounding in the inverse.
pub fn bounce_frame(track: &AxisTrack, fps: Fps, n: u64) -> FrameIndex {
    if n == 0 {
        return FrameIndex(0);
    }
    let secs = (n as f64 * track.travel - (track.start - track.min)) / track.speed;
    let mut f = fps.secs_to_frames_ceil(secs);
    while bounces_at(track, fps, FrameIndex(f)) < n {
        f += 1;
    }
    while f > 0 && bounces_at(track, fps, FrameIndex(f - 1)) >= n {
        f -= 1;
    }
    FrameIndex(f)
}

/// Closed-form motion of the object at `frame`. O(1) for any frame.
pub fn motion_at(scene: &Scene, frame: FrameIndex) -> MotionState {
    MotionState {
        frame,
        x: axis_motion(&scene.x, scene.fps, frame),
        y: axis_motion(&scene.y, scene.fps, frame),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/reflect.rs"]
mod tests;
