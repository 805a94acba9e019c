use crate::{
    foundation::core::{Canvas, Fps, Vec2},
    scene::config::SceneConfig,
};

/// Lower bound for per-axis speed, in pixels per second.
pub const MIN_SPEED: f64 = 1e-3;
/// Lower bound for object box edges, in pixels.
pub const MIN_OBJECT_EDGE: f64 = 1.0;
/// Lower bound for the travel range of either axis, in pixels.
pub const MIN_TRAVEL: f64 = 1.0;

/// Bounce interval of one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AxisTrack {
    /// Smallest position (top/left wall contact).
    pub min: f64,
    /// Largest position; always `min + travel`.
    pub max: f64,
    /// Distance between the walls, at least [`MIN_TRAVEL`].
    pub travel: f64,
    /// Position at frame 0, inside `[min, max]`.
    pub start: f64,
    /// Pixels per second, at least [`MIN_SPEED`].
    pub speed: f64,
}

/// Which axis of motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// A [`SceneConfig`] after defensive clamping, with the bounce tracks derived.
///
/// Building a scene never fails; every degenerate value is replaced by the nearest safe one
/// and reported with `tracing::warn!`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Frame rate, at least 1 fps.
    pub fps: Fps,
    /// Canvas, at least 1x1.
    pub canvas: Canvas,
    /// Object box size.
    pub object_size: Vec2,
    /// Horizontal bounce track.
    pub x: AxisTrack,
    /// Vertical bounce track.
    pub y: AxisTrack,
    /// Hue step per collision (0 when non-finite).
    pub hue_step_deg: f64,
    /// Sanitized configuration backing the effect curves and layers.
    pub config: SceneConfig,
}

impl Scene {
    /// Clamp `config` into a renderable scene.
    pub fn new(config: &SceneConfig) -> Self {
        let mut config = config.clone();

        if config.fps == 0 {
            tracing::warn!(field = "fps", "clamped frame rate 0 to 1");
            config.fps = 1;
        }
        let fps = Fps::whole(config.fps);

        config.canvas = Canvas {
            width: clamp_dim("canvas.width", config.canvas.width),
            height: clamp_dim("canvas.height", config.canvas.height),
        };
        config.padding = clamp_min("padding", config.padding, 0.0);
        config.object_size = Vec2::new(
            clamp_min("object_size.x", config.object_size.x, MIN_OBJECT_EDGE),
            clamp_min("object_size.y", config.object_size.y, MIN_OBJECT_EDGE),
        );
        config.speed = Vec2::new(
            clamp_min("speed.x", config.speed.x, MIN_SPEED),
            clamp_min("speed.y", config.speed.y, MIN_SPEED),
        );
        if !config.hue_step_deg.is_finite() {
            tracing::warn!(field = "hue_step_deg", "non-finite hue step replaced by 0");
            config.hue_step_deg = 0.0;
        }
        config.hud.icon_size = clamp_min("hud.icon_size", config.hud.icon_size, 0.0);
        config.hud.hud_height = clamp_min("hud.hud_height", config.hud.hud_height, 0.0);

        let s = &mut config.springs;
        for spring in [&mut s.intro, &mut s.hue, &mut s.punch, &mut s.icon] {
            *spring = spring.sanitized();
        }

        let j = &mut config.juice;
        for opacity in [
            &mut j.glow_opacity,
            &mut j.icon_opacity,
            &mut j.vignette_opacity,
            &mut j.shimmer_opacity,
            &mut j.accent_opacity,
        ] {
            *opacity = clamp_unit(*opacity);
        }
        for px in [&mut j.hit_blur_px, &mut j.glow_blur_px, &mut j.accent_blur_px] {
            *px = px.max(0.0);
        }

        let canvas = config.canvas.size();
        let x = track(
            "x",
            config.padding,
            canvas.x,
            config.object_size.x,
            config.start.x,
            config.speed.x,
        );
        let y = track(
            "y",
            config.padding,
            canvas.y,
            config.object_size.y,
            config.start.y,
            config.speed.y,
        );
        config.start = Vec2::new(x.start, y.start);

        Self {
            fps,
            canvas: config.canvas,
            object_size: config.object_size,
            x,
            y,
            hue_step_deg: config.hue_step_deg,
            config,
        }
    }

    /// Track for `axis`.
    pub fn track(&self, axis: Axis) -> &AxisTrack {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl From<&SceneConfig> for Scene {
    fn from(config: &SceneConfig) -> Self {
        Self::new(config)
    }
}

fn track(
    axis: &'static str,
    padding: f64,
    canvas: f64,
    object: f64,
    start: f64,
    speed: f64,
) -> AxisTrack {
    let min = padding;
    let raw = canvas - padding - object - min;
    let travel = if raw >= MIN_TRAVEL {
        raw
    } else {
        tracing::warn!(axis, raw_travel = raw, "travel range floored to {MIN_TRAVEL}");
        MIN_TRAVEL
    };
    let max = min + travel;

    let clamped_start = if start.is_finite() {
        start.clamp(min, max)
    } else {
        min
    };
    if clamped_start != start {
        tracing::warn!(axis, start, clamped = clamped_start, "start moved inside bounce area");
    }

    AxisTrack {
        min,
        max,
        travel,
        start: clamped_start,
        speed,
    }
}

fn clamp_dim(field: &'static str, v: u32) -> u32 {
    if v == 0 {
        tracing::warn!(field, "clamped dimension 0 to 1");
        1
    } else {
        v
    }
}

fn clamp_min(field: &'static str, v: f64, min: f64) -> f64 {
    // `f64::max` also maps NaN to `min`.
    let out = v.max(min);
    if out != v {
        tracing::warn!(field, value = v, clamped = out, "clamped degenerate scene value");
    }
    out
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/resolve.rs"]
mod tests;
