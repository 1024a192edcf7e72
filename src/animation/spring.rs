//! Damped-spring progress curve over normalized time.
//!
//! The curve is the step response of a damped harmonic oscillator released from
//! `x = 0` towards `x = 1` with an initial velocity expressed in "total distance per
//! duration". The natural frequency is derived from the damping ratio so that the
//! oscillation envelope has decayed below [`SETTLE_EPSILON`] by `t = 1`, which keeps the
//! whole motion inside the animation's duration.

use crate::foundation::error::{HandoffError, HandoffResult};

/// Residual envelope amplitude left at the end of the duration.
pub const SETTLE_EPSILON: f64 = 1e-3;

const CRITICAL_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringCurve {
    pub damping_ratio: f64,
    pub initial_velocity: f64,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self {
            damping_ratio: 0.85,
            initial_velocity: 0.8,
        }
    }
}

impl SpringCurve {
    pub fn new(damping_ratio: f64, initial_velocity: f64) -> HandoffResult<Self> {
        let curve = Self {
            damping_ratio,
            initial_velocity,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> HandoffResult<()> {
        if !self.damping_ratio.is_finite() || self.damping_ratio <= 0.0 {
            return Err(HandoffError::validation(
                "spring damping_ratio must be finite and > 0",
            ));
        }
        if !self.initial_velocity.is_finite() {
            return Err(HandoffError::validation(
                "spring initial_velocity must be finite",
            ));
        }
        Ok(())
    }

    /// Natural angular frequency, per unit of normalized time.
    pub fn natural_frequency(&self) -> f64 {
        let zeta = self.damping_ratio.max(1e-6);
        // Slowest decaying mode sets the envelope.
        let decay_per_omega = if zeta > 1.0 {
            zeta - (zeta * zeta - 1.0).sqrt()
        } else {
            zeta
        };
        (1.0 / SETTLE_EPSILON).ln() / decay_per_omega
    }

    /// Progress at normalized time `t`. Exactly 0 before the start and exactly 1 at
    /// and after the end; values in between may exceed 1 for underdamped springs.
    pub fn sample(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        1.0 - self.displacement(t)
    }

    // Remaining distance to the target, starting at 1 with velocity -v0.
    fn displacement(&self, t: f64) -> f64 {
        let zeta = self.damping_ratio.max(1e-6);
        let w0 = self.natural_frequency();
        let v0 = self.initial_velocity;

        if (zeta - 1.0).abs() < CRITICAL_TOLERANCE {
            (-w0 * t).exp() * (1.0 + (w0 - v0) * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (zeta * w0 - v0) / wd;
            (-zeta * w0 * t).exp() * ((wd * t).cos() + b * (wd * t).sin())
        } else {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - s);
            let r2 = -w0 * (zeta + s);
            let c2 = (-v0 - r1) / (r2 - r1);
            let c1 = 1.0 - c2;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
