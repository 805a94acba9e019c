//! Ricochet evaluates a bouncing-object motion graphic one frame at a time.
//!
//! An image bounces forever inside a padded canvas, shifting hue on every wall contact, with
//! spring-driven entrance, hit punch, squash, glow and ambient shimmer layered on top. Every
//! frame is a pure function of `(Scene, FrameIndex)`: there is no simulation state, so frames
//! can be requested in any order, repeatedly, or concurrently.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `SceneConfig -> Scene` (defensive clamping, bounce tracks)
//! 2. **Motion**: triangle-wave reflection per axis, bounce counters
//! 3. **Collision**: total contacts, wall proximity, last contact frame
//! 4. **Color** and **curves**: hue spring, entrance/hit/ambient curves
//! 5. **Compose**: fixed-order [`RenderLayer`] list for an external rasterizer
//!
//! [`Evaluator`] runs the pipeline for one frame or a whole [`FrameRange`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Curve primitives.
pub mod animation;
/// Layer assembly.
pub mod compose;
/// Hue and secondary effects.
pub mod effects;
/// Evaluation entry points.
pub mod eval;
/// Shared primitives.
pub mod foundation;
/// Motion and collisions.
pub mod motion;
/// Scene configuration.
pub mod scene;

pub use animation::interp::{Knots, interpolate, remap_clamped};
pub use animation::proc::{Ramp, breathe, loop_phase};
pub use animation::spring::{REST_THRESHOLD, SpringConfig, settle_frames, spring};
pub use compose::layers::{
    BlendMode, DropShadow, Filter, GradientStop, LAYER_ORDER, LayerKind, Paint, RenderLayer,
    compose,
};
pub use effects::color::{ColorState, color_at, target_hue};
pub use effects::curves::{EffectCurves, Entrance, Glow, IconEntrance, curves_at};
pub use eval::evaluator::{EvalThreading, EvaluatedFrame, Evaluator};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_layers};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Rgba8Premul, Transform2D, Vec2,
};
pub use foundation::error::{RicochetError, RicochetResult};
pub use foundation::math::round_half_up;
pub use motion::collision::{CollisionState, collision_at, total_bounces_at};
pub use motion::reflect::{AxisMotion, MotionState, bounce_frame, motion_at, reflect01};
pub use scene::config::{
    AssetHandles, HudLayout, Juice, Palette, SceneConfig, Springs, Timing, VideoConfig,
};
pub use scene::resolve::{Axis, AxisTrack, Scene};
