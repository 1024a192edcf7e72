use crate::{foundation::core::Rect, scene::layer::Layer};

pub(crate) mod gallery;
pub(crate) mod viewer;

/// A host-owned screen that can be positioned and drawn.
///
/// Like [`crate::TransitionParticipant`], this is implemented on shared handles, so
/// setters take `&self`.
pub trait ScreenView {
    /// Position of the screen in container coordinates.
    fn frame(&self) -> Rect;

    fn set_frame(&self, frame: Rect);

    /// Current visual state, back to front, in container coordinates.
    fn layers(&self) -> Vec<Layer>;
}
