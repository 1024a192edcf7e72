use crate::{
    foundation::error::{HandoffError, HandoffResult},
    scene::tree::LayerContainer,
    transition::animation::LayerAnimation,
};

/// Result of advancing a [`FrameAnimator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStatus {
    /// Nothing is animating.
    Idle,
    Running,
    /// The animation reached its end on this tick. Reported once.
    Finished,
}

#[derive(Debug)]
struct Playing {
    animation: LayerAnimation,
    elapsed_secs: f64,
}

/// Plays one [`LayerAnimation`] at a time against a layer container.
#[derive(Debug, Default)]
pub struct FrameAnimator {
    playing: Option<Playing>,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `animation` from zero, replacing any animation still in flight.
    pub fn animate(&mut self, animation: LayerAnimation) {
        if self.playing.is_some() {
            tracing::warn!("replacing an unfinished animation");
        }
        self.playing = Some(Playing {
            animation,
            elapsed_secs: 0.0,
        });
    }

    pub fn is_running(&self) -> bool {
        self.playing.is_some()
    }

    pub fn elapsed_secs(&self) -> Option<f64> {
        self.playing.as_ref().map(|p| p.elapsed_secs)
    }

    /// Advance by `dt_secs` and write the sampled properties into `container`.
    ///
    /// The tick that reaches the duration writes each track's exact end values.
    pub fn tick(
        &mut self,
        dt_secs: f64,
        container: &mut dyn LayerContainer,
    ) -> HandoffResult<AnimationStatus> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(HandoffError::animation(format!(
                "tick delta must be finite and >= 0, got {dt_secs}"
            )));
        }
        let Some(playing) = self.playing.as_mut() else {
            return Ok(AnimationStatus::Idle);
        };

        playing.elapsed_secs += dt_secs;
        if playing.elapsed_secs >= playing.animation.duration_secs() {
            for track in &playing.animation.tracks {
                if !container.set_props(track.layer, track.to) {
                    tracing::warn!(layer = ?track.layer, "animated layer is gone");
                }
            }
            self.playing = None;
            return Ok(AnimationStatus::Finished);
        }

        for (layer, props) in playing.animation.sample(playing.elapsed_secs) {
            if !container.set_props(layer, props) {
                tracing::warn!(?layer, "animated layer is gone");
            }
        }
        Ok(AnimationStatus::Running)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/animator.rs"]
mod tests;
