use crate::foundation::core::Fps;

/// Residual amplitude below which a spring reports exactly `1.0`.
pub const REST_THRESHOLD: f64 = 1e-3;

const MIN_POSITIVE: f64 = 1e-6;

/// Damped harmonic oscillator parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Viscous damping coefficient.
    pub damping: f64,
    /// Spring constant.
    pub stiffness: f64,
    /// Moving mass.
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Shorthand constructor in `(damping, stiffness, mass)` order.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }

    /// Copy with damping >= 0 and strictly positive stiffness and mass.
    pub fn sanitized(self) -> Self {
        Self {
            damping: self.damping.max(0.0),
            stiffness: self.stiffness.max(MIN_POSITIVE),
            mass: self.mass.max(MIN_POSITIVE),
        }
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(self) -> f64 {
        let s = self.sanitized();
        (s.stiffness / s.mass).sqrt()
    }

    /// `c / (2 sqrt(k m))`; below 1 the response overshoots.
    pub fn damping_ratio(self) -> f64 {
        let s = self.sanitized();
        s.damping / (2.0 * (s.stiffness * s.mass).sqrt())
    }

    /// Whether every parameter is a finite number.
    pub fn is_finite(self) -> bool {
        self.damping.is_finite() && self.stiffness.is_finite() && self.mass.is_finite()
    }
}

/// Unit step response of a spring released from rest at 0 towards 1.
///
/// Evaluated in closed form at `elapsed_frames / fps` seconds, so any frame can be sampled
/// without stepping through the preceding ones. Non-positive elapsed time yields `0.0`; once
/// the residual envelope drops below [`REST_THRESHOLD`] the result is exactly `1.0`. Underdamped
/// configurations may overshoot above 1 before that.
pub fn spring(elapsed_frames: f64, fps: Fps, config: SpringConfig) -> f64 {
    if elapsed_frames.is_nan() || elapsed_frames <= 0.0 {
        return 0.0;
    }
    let secs = elapsed_frames / fps.as_f64();
    let (displacement, envelope) = step_response(secs, config.sanitized());
    if envelope < REST_THRESHOLD {
        1.0
    } else {
        1.0 - displacement
    }
}

/// First whole frame at which [`spring`] reports exactly `1.0`.
///
/// `None` when the spring never comes to rest (zero damping) within 2^40 frames.
pub fn settle_frames(fps: Fps, config: SpringConfig) -> Option<u64> {
    let config = config.sanitized();
    let rests = |frame: u64| {
        let secs = fps.frames_to_secs(frame);
        frame > 0 && step_response(secs, config).1 < REST_THRESHOLD
    };

    let mut hi = 1u64;
    while !rests(hi) {
        if hi >= 1 << 40 {
            return None;
        }
        hi *= 2;
    }
    let mut lo = hi / 2;
    // Invariant: !rests(lo) || lo == 0, rests(hi).
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if rests(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(hi)
}

/// Displacement from the target and an upper bound on its magnitude at `secs`.
fn step_response(secs: f64, c: SpringConfig) -> (f64, f64) {
    let w0 = c.natural_frequency();
    let zeta = c.damping_ratio();

    if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * w0 * secs).exp();
        let a = zeta * w0 / wd;
        let displacement = envelope * ((wd * secs).cos() + a * (wd * secs).sin());
        (displacement, envelope * (1.0 + a * a).sqrt())
    } else if zeta == 1.0 {
        let displacement = (-w0 * secs).exp() * (1.0 + w0 * secs);
        (displacement, displacement)
    } else {
        let s = w0 * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * w0 + s;
        let r2 = -zeta * w0 - s;
        let c1 = -r2 / (r1 - r2);
        let c2 = r1 / (r1 - r2);
        let (e1, e2) = ((r1 * secs).exp(), (r2 * secs).exp());
        (c1 * e1 + c2 * e2, c1.abs() * e1 + c2.abs() * e2)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
