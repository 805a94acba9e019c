use crate::{
    effects::{color::ColorState, curves::EffectCurves},
    foundation::core::{Affine, Rgba8Premul, Transform2D, Vec2},
    foundation::math::round_half_up,
    motion::reflect::MotionState,
    scene::resolve::Scene,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Role of a layer in the fixed stacking order.
pub enum LayerKind {
    /// Solid canvas fill.
    Background,
    /// Radial vignette over the background.
    Vignette,
    /// Looping light band.
    Shimmer,
    /// Glow behind the object near walls.
    HitGlow,
    /// The bouncing image.
    Object,
    /// Bottom gradient strip.
    Hud,
    /// Bottom-center icon.
    Icon,
    /// Thin line above the icon.
    AccentLine,
}

/// Painter's order; later entries composite on top of earlier ones.
pub const LAYER_ORDER: [LayerKind; 8] = [
    LayerKind::Background,
    LayerKind::Vignette,
    LayerKind::Shimmer,
    LayerKind::HitGlow,
    LayerKind::Object,
    LayerKind::Hud,
    LayerKind::Icon,
    LayerKind::AccentLine,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Blend mode used when compositing a layer.
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// `1 - (1 - src) * (1 - dst)`.
    Screen,
    /// Multiply or screen depending on the destination.
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Color stop of a gradient; `offset` in `[0, 1]`.
pub struct GradientStop {
    /// Position along the gradient.
    pub offset: f64,
    /// Stop color.
    pub color: Rgba8Premul,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
/// What fills a layer's box. Geometry is in layer-local pixels.
pub enum Paint {
    /// Uniform color.
    Solid {
        /// Fill color.
        color: Rgba8Premul,
    },
    /// Opaque asset handle, fitted (contain) into the box.
    Image {
        /// Handle resolved by the rasterizer.
        asset: String,
    },
    /// Linear gradient from `start` to `end`.
    LinearGradient {
        /// Point at offset 0.
        start: Vec2,
        /// Point at offset 1.
        end: Vec2,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
    /// Elliptical radial gradient.
    RadialGradient {
        /// Center point.
        center: Vec2,
        /// Per-axis radius.
        radius: Vec2,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Drop shadow following the layer's alpha.
pub struct DropShadow {
    /// Shadow offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Shadow color.
    pub color: Rgba8Premul,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Filter chain, applied in field order.
pub struct Filter {
    /// Hue rotation in degrees.
    pub hue_rotate_deg: f64,
    /// Saturation multiplier (1 = unchanged).
    pub saturate: f64,
    /// Brightness multiplier (1 = unchanged).
    pub brightness: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Shadows, drawn below the layer in order.
    pub drop_shadows: Vec<DropShadow>,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            hue_rotate_deg: 0.0,
            saturate: 1.0,
            brightness: 1.0,
            blur_px: 0.0,
            drop_shadows: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One draw instruction for the external rasterizer.
pub struct RenderLayer {
    /// Stacking role.
    pub kind: LayerKind,
    /// Fill of the layer box.
    pub paint: Paint,
    /// Box size before the transform.
    pub size: Vec2,
    /// Placement; the anchor is always the box center and rotation is always 0.
    pub transform: Transform2D,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Filter chain.
    pub filter: Filter,
    /// Blend mode.
    pub blend: BlendMode,
}

impl RenderLayer {
    fn new(kind: LayerKind, paint: Paint, size: Vec2) -> Self {
        Self {
            kind,
            paint,
            size,
            transform: Transform2D {
                anchor: size * 0.5,
                ..Transform2D::default()
            },
            opacity: 1.0,
            filter: Filter::default(),
            blend: BlendMode::Normal,
        }
    }

    fn at(mut self, translate: Vec2) -> Self {
        self.transform.translate = translate;
        self
    }

    fn scaled(mut self, scale: Vec2) -> Self {
        self.transform.scale = scale;
        self
    }

    fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = clamp_unit(opacity);
        self
    }

    fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Layer-local to canvas transform.
    pub fn affine(&self) -> Affine {
        self.transform.to_affine()
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn stop(offset: f64, rgb: [u8; 3], alpha: f64) -> GradientStop {
    GradientStop {
        offset,
        color: Rgba8Premul::from_rgb_alpha(rgb, alpha),
    }
}

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

/// Assemble the layer list for one frame, always in [`LAYER_ORDER`].
pub fn compose(
    scene: &Scene,
    motion: &MotionState,
    color: &ColorState,
    curves: &EffectCurves,
) -> Vec<RenderLayer> {
    let cfg = &scene.config;
    let palette = cfg.palette;
    let juice = &cfg.juice;
    let canvas = scene.canvas.size();

    let background = RenderLayer::new(
        LayerKind::Background,
        Paint::Solid {
            color: Rgba8Premul::from_rgb_alpha(palette.background, 1.0),
        },
        canvas,
    );

    // 80% x 70% ellipse centered at (50%, 45%).
    let vignette = RenderLayer::new(
        LayerKind::Vignette,
        Paint::RadialGradient {
            center: Vec2::new(canvas.x * 0.5, canvas.y * 0.45),
            radius: Vec2::new(canvas.x * 0.8, canvas.y * 0.7),
            stops: vec![
                stop(0.0, palette.accent, 0.16),
                stop(0.55, palette.background, 0.0),
                stop(1.0, BLACK, 0.65),
            ],
        },
        canvas,
    )
    .with_opacity(juice.vignette_opacity);

    let shimmer = RenderLayer::new(
        LayerKind::Shimmer,
        Paint::LinearGradient {
            start: Vec2::ZERO,
            end: Vec2::new(0.0, canvas.y),
            stops: vec![
                stop(0.0, WHITE, 0.0),
                stop(0.5, WHITE, 0.25),
                stop(1.0, WHITE, 0.0),
            ],
        },
        canvas,
    )
    .at(Vec2::new(0.0, curves.shimmer_shift))
    .with_opacity(juice.shimmer_opacity)
    .with_blend(BlendMode::Overlay);

    let object_pos = motion.position() + Vec2::new(0.0, curves.entrance.offset_y);
    let glow = curves.glow.strength;

    let glow_scale = curves.entrance.scale * (1.0 + juice.glow_scale * glow);
    let hit_glow = RenderLayer::new(
        LayerKind::HitGlow,
        Paint::RadialGradient {
            center: scene.object_size * 0.5,
            radius: scene.object_size * 0.7,
            stops: vec![
                stop(0.0, palette.accent_2, 0.55),
                stop(0.45, palette.accent, 0.28),
                stop(0.75, BLACK, 0.0),
            ],
        },
        scene.object_size,
    )
    .at(object_pos)
    .scaled(Vec2::new(glow_scale, glow_scale))
    .with_opacity(curves.entrance.opacity * juice.glow_opacity * glow)
    .with_filter(Filter {
        blur_px: juice.glow_blur_px,
        ..Filter::default()
    })
    .with_blend(BlendMode::Screen);

    let uniform = curves.entrance.scale * curves.punch_scale;
    let object = RenderLayer::new(
        LayerKind::Object,
        Paint::Image {
            asset: cfg.assets.object.clone(),
        },
        scene.object_size,
    )
    .at(object_pos)
    .scaled(Vec2::new(uniform * curves.squash.x, uniform * curves.squash.y))
    .with_opacity(curves.entrance.opacity)
    .with_filter(Filter {
        hue_rotate_deg: color.hue_deg,
        saturate: juice.saturate,
        brightness: juice.brightness,
        blur_px: curves.glow.blur_px,
        drop_shadows: vec![DropShadow {
            offset: Vec2::new(0.0, 10.0),
            blur_px: 26.0,
            color: Rgba8Premul::from_rgb_alpha(BLACK, 0.55),
        }],
    });

    let hud_h = cfg.hud.hud_height;
    let hud = RenderLayer::new(
        LayerKind::Hud,
        Paint::LinearGradient {
            start: Vec2::new(0.0, hud_h),
            end: Vec2::ZERO,
            stops: vec![
                stop(0.0, BLACK, 0.55),
                stop(0.55, BLACK, 0.15),
                stop(1.0, BLACK, 0.0),
            ],
        },
        Vec2::new(canvas.x, hud_h),
    )
    .at(Vec2::new(0.0, canvas.y - hud_h));

    let icon_size = cfg.hud.icon_size;
    let icon_pos = Vec2::new(
        (canvas.x - icon_size) * 0.5,
        canvas.y - cfg.padding - icon_size + curves.icon.offset_y,
    );
    let icon = RenderLayer::new(
        LayerKind::Icon,
        Paint::Image {
            asset: cfg.assets.icon.clone(),
        },
        Vec2::new(icon_size, icon_size),
    )
    .at(icon_pos)
    .scaled(Vec2::new(curves.icon_scale, curves.icon_scale))
    .with_opacity(curves.icon.opacity)
    .with_filter(Filter {
        drop_shadows: vec![
            DropShadow {
                offset: Vec2::new(0.0, 10.0),
                blur_px: 22.0,
                color: Rgba8Premul::from_rgb_alpha(BLACK, 0.55),
            },
            DropShadow {
                offset: Vec2::ZERO,
                blur_px: round_half_up(10.0 + 18.0 * glow),
                color: Rgba8Premul::from_rgb_alpha(palette.accent, 0.15 + 0.25 * glow),
            },
        ],
        ..Filter::default()
    });

    let line_w = (canvas.x - 2.0 * cfg.padding).max(0.0);
    let line_bottom = cfg.padding + round_half_up(icon_size * 0.5);
    let accent_line = RenderLayer::new(
        LayerKind::AccentLine,
        Paint::LinearGradient {
            start: Vec2::ZERO,
            end: Vec2::new(line_w, 0.0),
            stops: vec![
                stop(0.0, palette.accent, 0.0),
                stop(0.35, palette.accent, 1.0),
                stop(0.65, palette.accent_2, 1.0),
                stop(1.0, palette.accent_2, 0.0),
            ],
        },
        Vec2::new(line_w, 1.0),
    )
    .at(Vec2::new(cfg.padding, canvas.y - line_bottom - 1.0))
    .with_opacity(curves.accent_opacity)
    .with_filter(Filter {
        blur_px: juice.accent_blur_px,
        ..Filter::default()
    });

    vec![
        background,
        vignette,
        shimmer,
        hit_glow,
        object,
        hud,
        icon,
        accent_line,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layers.rs"]
mod tests;
