use crate::{
    foundation::core::FrameIndex,
    motion::reflect::{MotionState, bounce_frame, bounces_at},
    scene::resolve::Scene,
};

/// Collision history of the object at one frame, derived without stored state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CollisionState {
    /// Horizontal wall contacts so far.
    pub bounces_x: u64,
    /// Vertical wall contacts so far.
    pub bounces_y: u64,
    /// `bounces_x + bounces_y`; a corner hit counts twice.
    pub total_bounces: u64,
    /// Distance to the nearest wall in travel units; 0 at a wall.
    ///
    /// Measured to the nearer of the two walls of each axis, so it never exceeds 0.5 (reached
    /// mid-travel) even though it is consumed as a `[0, 1]` input by the hit-progress knots.
    pub proximity: f64,
    /// Whether the total changed between the previous frame and this one.
    pub just_collided: bool,
    /// Frame of the most recent contact on either axis, if any.
    pub last_collision: Option<FrameIndex>,
}

impl CollisionState {
    /// Frames elapsed since the most recent contact, if any.
    pub fn frames_since_collision(&self, frame: FrameIndex) -> Option<u64> {
        self.last_collision.map(|c| frame.0.saturating_sub(c.0))
    }
}

/// Distance from a cycle count to the nearest whole cycle (a wall).
pub fn wall_distance(cycles: f64) -> f64 {
    let frac = cycles - cycles.floor();
    frac.min(1.0 - frac)
}

/// Total wall contacts on both axes up to and including `frame`.
pub fn total_bounces_at(scene: &Scene, frame: FrameIndex) -> u64 {
    bounces_at(&scene.x, scene.fps, frame) + bounces_at(&scene.y, scene.fps, frame)
}

/// Derive collision history for the frame of `motion`.
///
/// "Just collided" is a finite difference against the previous frame (clamped at 0), and the
/// most recent contact frame is solved in closed form per axis.
pub fn collision_at(scene: &Scene, motion: &MotionState) -> CollisionState {
    let frame = motion.frame;
    let total_bounces = motion.x.bounces + motion.y.bounces;
    let just_collided = total_bounces != total_bounces_at(scene, frame.prev());

    let last_x = (motion.x.bounces > 0)
        .then(|| bounce_frame(&scene.x, scene.fps, motion.x.bounces));
    let last_y = (motion.y.bounces > 0)
        .then(|| bounce_frame(&scene.y, scene.fps, motion.y.bounces));
    let last_collision = last_x.max(last_y);

    if just_collided {
        tracing::trace!(frame = frame.0, total_bounces, "collision registered");
    }

    CollisionState {
        bounces_x: motion.x.bounces,
        bounces_y: motion.y.bounces,
        total_bounces,
        proximity: wall_distance(motion.x.cycles).min(wall_distance(motion.y.cycles)),
        just_collided,
        last_collision,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/collision.rs"]
mod tests;
