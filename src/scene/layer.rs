use std::sync::Arc;

use crate::{
    assets::Bitmap,
    foundation::core::{Rect, Rgba8Premul},
};

/// Handle to a layer inside a [`crate::LayerContainer`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LayerId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub enum LayerContent {
    /// A photo drawn through the layer's content mode.
    Image(Arc<Bitmap>),
    /// A static copy of a screen's rendered state.
    Snapshot(Arc<Bitmap>),
    Solid(Rgba8Premul),
}

/// How image content is mapped into the layer frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    AspectFill,
    AspectFit,
    #[default]
    ScaleToFill,
}

/// The animatable subset of a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerProps {
    pub frame: Rect,
    pub opacity: f64,
}

/// A non-interactive visual in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub frame: Rect,
    pub opacity: f64,
    pub content: LayerContent,
    pub content_mode: ContentMode,
    pub clips_to_bounds: bool,
}

impl Layer {
    /// Photo layer: aspect-fill, clipped to its frame.
    pub fn image(bitmap: Arc<Bitmap>, frame: Rect) -> Self {
        Self {
            frame,
            opacity: 1.0,
            content: LayerContent::Image(bitmap),
            content_mode: ContentMode::AspectFill,
            clips_to_bounds: true,
        }
    }

    pub fn snapshot(bitmap: Arc<Bitmap>, frame: Rect) -> Self {
        Self {
            frame,
            opacity: 1.0,
            content: LayerContent::Snapshot(bitmap),
            content_mode: ContentMode::ScaleToFill,
            clips_to_bounds: true,
        }
    }

    pub fn solid(color: Rgba8Premul, frame: Rect) -> Self {
        Self {
            frame,
            opacity: 1.0,
            content: LayerContent::Solid(color),
            content_mode: ContentMode::ScaleToFill,
            clips_to_bounds: true,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    pub fn props(&self) -> LayerProps {
        LayerProps {
            frame: self.frame,
            opacity: self.opacity,
        }
    }

    pub fn apply(&mut self, props: LayerProps) {
        self.frame = props.frame;
        self.opacity = props.opacity.clamp(0.0, 1.0);
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self.content, LayerContent::Snapshot(_))
    }
}
