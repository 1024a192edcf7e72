use crate::foundation::core::Rect;

/// A screen that can take part in a shared-element transition.
///
/// Implementors are shared handles to screens owned by the host, so every method
/// takes `&self`; screens keep their transition state in `Cell`/`RefCell`.
pub trait TransitionParticipant {
    /// Hide this screen's own rendering of the shared asset so the animating copy is
    /// the only one visible. Must not fail.
    fn prepare_for_transition(&self);

    /// Undo [`TransitionParticipant::prepare_for_transition`]. The engine calls this
    /// exactly once per transition, whether it completed or was cancelled.
    fn restore_after_transition(&self);

    /// Where the shared asset sits right now, in container coordinates.
    ///
    /// Returns [`Rect::ZERO`] when the screen has no usable layout yet; callers treat
    /// any zero-area rect as "unknown".
    fn asset_frame(&self) -> Rect;
}
