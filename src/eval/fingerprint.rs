use crate::{
    compose::layers::{BlendMode, DropShadow, GradientStop, LayerKind, Paint, RenderLayer},
    foundation::core::{Rgba8Premul, Vec2},
    foundation::math::Fnv1a64,
};

/// 128-bit digest of a layer list.
///
/// Two independent FNV-1a 64 streams over the exact `f64` bit patterns, so equal fingerprints
/// mean bit-identical layer parameters (up to hash collisions).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// First stream.
    pub hi: u64,
    /// Second stream.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

struct Pair {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Pair {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn write_u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn write_f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.a.write_bytes(s.as_bytes());
        self.b.write_bytes(s.as_bytes());
    }

    fn write_vec2(&mut self, v: Vec2) {
        self.write_f64(v.x);
        self.write_f64(v.y);
    }

    fn write_color(&mut self, c: Rgba8Premul) {
        for v in [c.r, c.g, c.b, c.a] {
            self.write_u8(v);
        }
    }

    fn write_stops(&mut self, stops: &[GradientStop]) {
        self.write_u64(stops.len() as u64);
        for s in stops {
            self.write_f64(s.offset);
            self.write_color(s.color);
        }
    }

    fn write_shadow(&mut self, s: &DropShadow) {
        self.write_vec2(s.offset);
        self.write_f64(s.blur_px);
        self.write_color(s.color);
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

/// Fingerprint an ordered layer list.
pub fn fingerprint_layers(layers: &[RenderLayer]) -> FrameFingerprint {
    let mut h = Pair::new();
    h.write_u64(layers.len() as u64);
    for l in layers {
        h.write_u8(kind_tag(l.kind));
        match &l.paint {
            Paint::Solid { color } => {
                h.write_u8(0);
                h.write_color(*color);
            }
            Paint::Image { asset } => {
                h.write_u8(1);
                h.write_str(asset);
            }
            Paint::LinearGradient { start, end, stops } => {
                h.write_u8(2);
                h.write_vec2(*start);
                h.write_vec2(*end);
                h.write_stops(stops);
            }
            Paint::RadialGradient {
                center,
                radius,
                stops,
            } => {
                h.write_u8(3);
                h.write_vec2(*center);
                h.write_vec2(*radius);
                h.write_stops(stops);
            }
        }
        h.write_vec2(l.size);
        for c in l.affine().as_coeffs() {
            h.write_f64(c);
        }
        h.write_f64(l.opacity);

        let f = &l.filter;
        h.write_f64(f.hue_rotate_deg);
        h.write_f64(f.saturate);
        h.write_f64(f.brightness);
        h.write_f64(f.blur_px);
        h.write_u64(f.drop_shadows.len() as u64);
        for s in &f.drop_shadows {
            h.write_shadow(s);
        }

        h.write_u8(match l.blend {
            BlendMode::Normal => 0,
            BlendMode::Screen => 1,
            BlendMode::Overlay => 2,
        });
    }
    h.finish()
}

fn kind_tag(kind: LayerKind) -> u8 {
    match kind {
        LayerKind::Background => 0,
        LayerKind::Vignette => 1,
        LayerKind::Shimmer => 2,
        LayerKind::HitGlow => 3,
        LayerKind::Object => 4,
        LayerKind::Hud => 5,
        LayerKind::Icon => 6,
        LayerKind::AccentLine => 7,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
