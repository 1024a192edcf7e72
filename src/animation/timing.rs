use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::{ease::Ease, spring::SpringCurve},
    foundation::error::{HandoffError, HandoffResult},
};

/// Tunables for one shared-element transition.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionTiming {
    /// Wall-clock length of the animation in seconds.
    pub duration_secs: f64,
    /// Spring damping ratio; below 1 overshoots slightly before settling.
    pub damping_ratio: f64,
    /// Initial velocity in "total distance per duration".
    pub initial_velocity: f64,
    /// Shaping of the clock that drives the spring.
    pub ease: Ease,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        let spring = SpringCurve::default();
        Self {
            duration_secs: 1.0,
            damping_ratio: spring.damping_ratio,
            initial_velocity: spring.initial_velocity,
            ease: Ease::default(),
        }
    }
}

/// One point of a sampled timing curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveSample {
    pub elapsed_secs: f64,
    pub progress: f64,
}

impl TransitionTiming {
    pub fn from_reader<R: std::io::Read>(r: R) -> HandoffResult<Self> {
        let timing: Self = serde_json::from_reader(r)
            .map_err(|e| HandoffError::serde(format!("parse timing JSON: {e}")))?;
        timing.validate()?;
        Ok(timing)
    }

    pub fn from_json_str(s: &str) -> HandoffResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> HandoffResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HandoffError::validation(format!("open timing JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> HandoffResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(HandoffError::validation(
                "duration_secs must be finite and > 0",
            ));
        }
        self.curve().validate()
    }

    pub fn curve(&self) -> SpringCurve {
        SpringCurve {
            damping_ratio: self.damping_ratio,
            initial_velocity: self.initial_velocity,
        }
    }

    /// Animation progress after `elapsed_secs`; exactly 1 once the duration is reached.
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs >= self.duration_secs {
            return 1.0;
        }
        let t = (elapsed_secs / self.duration_secs).clamp(0.0, 1.0);
        self.curve().sample(self.ease.apply(t))
    }

    /// `count` evenly spaced samples covering both endpoints.
    pub fn samples(&self, count: usize) -> Vec<CurveSample> {
        let count = count.max(2);
        let last = (count - 1) as f64;
        (0..count)
            .map(|i| {
                let elapsed_secs = self.duration_secs * (i as f64) / last;
                CurveSample {
                    elapsed_secs,
                    progress: self.progress(elapsed_secs),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
