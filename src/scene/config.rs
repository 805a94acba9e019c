use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::{interp::Knots, spring::SpringConfig},
    foundation::core::{Canvas, Vec2},
    foundation::error::{RicochetError, RicochetResult},
    foundation::math::round_half_up,
};

/// The host's resolved video configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Whole frames per second.
    pub fps: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30,
        }
    }
}

/// Complete, immutable description of the bouncing scene.
///
/// Every field has a default derived from a [`VideoConfig`] (see [`SceneConfig::for_video`]).
/// JSON files may be partial: [`SceneConfig::from_json_str`] derives the defaults from the
/// file's own `canvas`/`fps` and layers the file on top.
///
/// Negative or fractional `fps` and canvas sizes are saturated to whole numbers while loading;
/// other values are not clamped here. [`crate::Scene::new`] performs the defensive clamping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Whole frames per second.
    pub fps: u32,
    /// Output canvas.
    pub canvas: Canvas,
    /// Inset of the bounce area from every canvas edge, in pixels.
    pub padding: f64,
    /// Width/height of the bouncing object box.
    pub object_size: Vec2,
    /// Top-left of the object at frame 0.
    pub start: Vec2,
    /// Per-axis speed in pixels per second.
    pub speed: Vec2,
    /// Hue rotation added per wall contact.
    pub hue_step_deg: f64,
    /// Opaque asset handles resolved by the rasterizer.
    pub assets: AssetHandles,
    /// Scene colors.
    pub palette: Palette,
    /// HUD and icon geometry.
    pub hud: HudLayout,
    /// Frame counts for timed effects.
    pub timing: Timing,
    /// Spring tunables.
    pub springs: Springs,
    /// Effect amplitudes.
    pub juice: Juice,
}

/// Asset handles for the two image layers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetHandles {
    /// The bouncing image.
    pub object: String,
    /// The bottom-center icon.
    pub icon: String,
}

/// Straight sRGB colors used by the fills and gradients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Canvas fill.
    pub background: [u8; 3],
    /// Primary accent (vignette tint, glow rim, icon halo).
    pub accent: [u8; 3],
    /// Secondary accent (glow core, accent line tail).
    pub accent_2: [u8; 3],
}

/// Geometry of the bottom HUD strip and icon.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HudLayout {
    /// Icon edge length in pixels.
    pub icon_size: f64,
    /// Height of the bottom gradient strip.
    pub hud_height: f64,
}

/// Frame counts for the timed effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timing {
    /// Linear fade-in of the object.
    pub intro_frames: u64,
    /// Delay of the icon entrance after the object's.
    pub icon_delay_frames: u64,
    /// Maximum lag of the punch spring at a wall.
    pub punch_frames: u64,
    /// Fade-in of the accent line, starting at the icon delay.
    pub accent_fade_frames: u64,
    /// Period of the icon breathing.
    pub breathe_period_frames: u64,
    /// Period of the background shimmer loop.
    pub shimmer_period_frames: u64,
}

/// Spring tunables per effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Springs {
    /// Object entrance scale.
    pub intro: SpringConfig,
    /// Hue easing after each collision.
    pub hue: SpringConfig,
    /// Hit punch.
    pub punch: SpringConfig,
    /// Icon entrance.
    pub icon: SpringConfig,
}

/// Effect amplitudes and fixed filter values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Juice {
    /// Proximity to hit-progress table.
    pub hit_knots: Knots,
    /// Object starts this many pixels low and rises into place.
    pub intro_offset_px: f64,
    /// Icon starts this many pixels low and rises into place.
    pub icon_offset_px: f64,
    /// Peak punch scale at a wall.
    pub punch_scale: f64,
    /// Peak per-axis squash scale at a wall.
    pub squash: Vec2,
    /// Peak object blur at a wall.
    pub hit_blur_px: f64,
    /// Extra glow layer scale at full glow.
    pub glow_scale: f64,
    /// Glow layer opacity at full glow.
    pub glow_opacity: f64,
    /// Fixed glow layer blur.
    pub glow_blur_px: f64,
    /// Object saturation filter.
    pub saturate: f64,
    /// Object brightness filter.
    pub brightness: f64,
    /// Settled icon opacity.
    pub icon_opacity: f64,
    /// Peak extra icon scale while breathing.
    pub breathe_amplitude: f64,
    /// Vignette layer opacity.
    pub vignette_opacity: f64,
    /// Shimmer layer opacity.
    pub shimmer_opacity: f64,
    /// Vertical travel of the shimmer per loop.
    pub shimmer_travel_px: f64,
    /// Settled accent line opacity.
    pub accent_opacity: f64,
    /// Accent line blur.
    pub accent_blur_px: f64,
}

fn round_px(v: f64) -> f64 {
    round_half_up(v)
}

fn frames(fps: u32, secs: f64) -> u64 {
    round_half_up(f64::from(fps) * secs).max(0.0) as u64
}

impl SceneConfig {
    /// Derive the full scene from the host video configuration.
    pub fn for_video(video: &VideoConfig) -> Self {
        let w = f64::from(video.width);
        let h = f64::from(video.height);
        let fps = video.fps;

        let object = Vec2::new(
            round_px(w * 0.24).max(180.0),
            round_px(h * 0.18).max(110.0),
        );

        Self {
            fps,
            canvas: Canvas {
                width: video.width,
                height: video.height,
            },
            padding: round_px(w * 0.04).max(24.0),
            object_size: object,
            start: Vec2::new(
                round_px((w - object.x) * 0.18).max(0.0),
                round_px((h - object.y) * 0.22).max(0.0),
            ),
            speed: Vec2::new(round_px(w * 0.9).max(480.0), round_px(h * 0.85).max(420.0)),
            hue_step_deg: 42.0,
            assets: AssetHandles {
                object: "object".to_string(),
                icon: "icon".to_string(),
            },
            palette: Palette {
                background: [0x0B, 0x0D, 0x12],
                accent: [0x7C, 0x5C, 0xFF],
                accent_2: [0x22, 0xD3, 0xEE],
            },
            hud: HudLayout {
                icon_size: round_px(w * 0.06).max(44.0),
                hud_height: round_px(h * 0.12).max(70.0),
            },
            timing: Timing {
                intro_frames: frames(fps, 0.7),
                icon_delay_frames: frames(fps, 0.25),
                punch_frames: frames(fps, 0.18),
                accent_fade_frames: frames(fps, 0.35),
                breathe_period_frames: frames(fps, 2.8).max(1),
                shimmer_period_frames: frames(fps, 1.2).max(1),
            },
            springs: Springs {
                intro: SpringConfig::new(16.0, 110.0, 0.9),
                hue: SpringConfig::new(18.0, 120.0, 0.8),
                punch: SpringConfig::new(10.0, 260.0, 0.6),
                icon: SpringConfig::new(18.0, 140.0, 0.9),
            },
            juice: Juice {
                hit_knots: Knots {
                    input: vec![0.0, 0.035, 0.12],
                    output: vec![1.0, 0.65, 0.0],
                },
                intro_offset_px: round_px(h * 0.02),
                icon_offset_px: round_px(h * 0.03),
                punch_scale: 1.06,
                squash: Vec2::new(1.045, 0.96),
                hit_blur_px: 1.2,
                glow_scale: 0.03,
                glow_opacity: 0.55,
                glow_blur_px: round_px(w * 0.003).max(1.0),
                saturate: 1.35,
                brightness: 1.08,
                icon_opacity: 0.92,
                breathe_amplitude: 0.02,
                vignette_opacity: 0.55,
                shimmer_opacity: 0.08,
                shimmer_travel_px: round_px(h * 0.18).max(1.0),
                accent_opacity: 0.22,
                accent_blur_px: round_px(w * 0.0006).max(0.0),
            },
        }
    }

    /// The video configuration this scene renders at.
    pub fn video(&self) -> VideoConfig {
        VideoConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        }
    }

    /// Parse a (possibly partial) JSON scene and validate it.
    pub fn from_json_str(s: &str) -> RicochetResult<Self> {
        let overrides: serde_json::Value =
            serde_json::from_str(s).map_err(|e| RicochetError::serde(e.to_string()))?;
        Self::from_json_value(overrides)
    }

    /// Layer a (possibly partial) JSON object over defaults derived from its own video fields.
    pub fn from_json_value(overrides: serde_json::Value) -> RicochetResult<Self> {
        if !overrides.is_object() {
            return Err(RicochetError::validation("scene JSON must be an object"));
        }

        let base = Self::for_video(&video_hint(&overrides));
        let mut merged =
            serde_json::to_value(&base).map_err(|e| RicochetError::serde(e.to_string()))?;
        merge_json(&mut merged, overrides);
        saturate_whole_fields(&mut merged);

        let cfg: Self =
            serde_json::from_value(merged).map_err(|e| RicochetError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON scene file.
    pub fn from_path(path: &Path) -> RicochetResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject values that clamping cannot repair: non-finite numbers, malformed knot tables,
    /// and empty asset handles.
    pub fn validate(&self) -> RicochetResult<()> {
        let j = &self.juice;
        let scalars = [
            ("padding", self.padding),
            ("object_size.x", self.object_size.x),
            ("object_size.y", self.object_size.y),
            ("start.x", self.start.x),
            ("start.y", self.start.y),
            ("speed.x", self.speed.x),
            ("speed.y", self.speed.y),
            ("hue_step_deg", self.hue_step_deg),
            ("hud.icon_size", self.hud.icon_size),
            ("hud.hud_height", self.hud.hud_height),
            ("juice.intro_offset_px", j.intro_offset_px),
            ("juice.icon_offset_px", j.icon_offset_px),
            ("juice.punch_scale", j.punch_scale),
            ("juice.squash.x", j.squash.x),
            ("juice.squash.y", j.squash.y),
            ("juice.hit_blur_px", j.hit_blur_px),
            ("juice.glow_scale", j.glow_scale),
            ("juice.glow_opacity", j.glow_opacity),
            ("juice.glow_blur_px", j.glow_blur_px),
            ("juice.saturate", j.saturate),
            ("juice.brightness", j.brightness),
            ("juice.icon_opacity", j.icon_opacity),
            ("juice.breathe_amplitude", j.breathe_amplitude),
            ("juice.vignette_opacity", j.vignette_opacity),
            ("juice.shimmer_opacity", j.shimmer_opacity),
            ("juice.shimmer_travel_px", j.shimmer_travel_px),
            ("juice.accent_opacity", j.accent_opacity),
            ("juice.accent_blur_px", j.accent_blur_px),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RicochetError::validation(format!("{name} must be finite")));
        }

        let springs = [
            ("intro", self.springs.intro),
            ("hue", self.springs.hue),
            ("punch", self.springs.punch),
            ("icon", self.springs.icon),
        ];
        if let Some((name, _)) = springs.iter().find(|(_, s)| !s.is_finite()) {
            return Err(RicochetError::validation(format!(
                "springs.{name} must be finite"
            )));
        }

        if !j.hit_knots.is_well_formed() {
            return Err(RicochetError::validation(
                "juice.hit_knots must have >= 2 finite, non-decreasing input knots and matching outputs",
            ));
        }
        if self.assets.object.trim().is_empty() || self.assets.icon.trim().is_empty() {
            return Err(RicochetError::validation("asset handles must be non-empty"));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_video(&VideoConfig::default())
    }
}

fn video_hint(v: &serde_json::Value) -> VideoConfig {
    let d = VideoConfig::default();
    let hint = |pointer: &str, fallback: u32| {
        v.pointer(pointer)
            .and_then(whole_u32)
            .map_or(fallback, |n| n.max(1))
    };
    VideoConfig {
        width: hint("/canvas/width", d.width),
        height: hint("/canvas/height", d.height),
        fps: hint("/fps", d.fps),
    }
}

/// Integer scene fields that JSON may spell as negative or fractional numbers.
const WHOLE_FIELDS: [(&str, &str); 3] = [
    ("/fps", "fps"),
    ("/canvas/width", "canvas.width"),
    ("/canvas/height", "canvas.height"),
];

/// Any JSON number rounded and saturated into `u32`.
fn whole_u32(v: &serde_json::Value) -> Option<u32> {
    v.as_f64()
        .map(|n| round_half_up(n).clamp(0.0, f64::from(u32::MAX)) as u32)
}

/// Rewrite out-of-range whole-number fields in place so deserialization accepts them;
/// [`crate::Scene::new`] then lifts zeros to the safe minimum.
fn saturate_whole_fields(merged: &mut serde_json::Value) {
    for (pointer, field) in WHOLE_FIELDS {
        let Some(slot) = merged.pointer_mut(pointer) else {
            continue;
        };
        let Some(n) = whole_u32(slot) else {
            continue;
        };
        if slot.as_u64() != Some(u64::from(n)) {
            let value = slot.as_f64();
            tracing::warn!(field, ?value, clamped = n, "saturated whole-number scene value");
            *slot = serde_json::Value::from(n);
        }
    }
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
