use crate::{
    animation::timing::TransitionTiming,
    foundation::core::lerp_rect,
    foundation::math::lerp,
    scene::layer::{LayerId, LayerProps},
};

/// Start and end properties of one animated layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTrack {
    pub layer: LayerId,
    pub from: LayerProps,
    pub to: LayerProps,
}

impl LayerTrack {
    /// Frames follow the raw curve (overshoot included); opacity stays within [0, 1].
    pub fn sample(&self, progress: f64) -> LayerProps {
        LayerProps {
            frame: lerp_rect(self.from.frame, self.to.frame, progress),
            opacity: lerp(self.from.opacity, self.to.opacity, progress.clamp(0.0, 1.0))
                .clamp(0.0, 1.0),
        }
    }
}

/// A set of layer tracks sharing one timing curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerAnimation {
    pub timing: TransitionTiming,
    pub tracks: Vec<LayerTrack>,
}

impl LayerAnimation {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            tracks: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: LayerTrack) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn duration_secs(&self) -> f64 {
        self.timing.duration_secs
    }

    pub fn track_for(&self, layer: LayerId) -> Option<&LayerTrack> {
        self.tracks.iter().find(|t| t.layer == layer)
    }

    /// Properties of every track after `elapsed_secs`.
    pub fn sample(&self, elapsed_secs: f64) -> impl Iterator<Item = (LayerId, LayerProps)> + '_ {
        let progress = self.timing.progress(elapsed_secs);
        self.tracks.iter().map(move |t| (t.layer, t.sample(progress)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/animation.rs"]
mod tests;
