use crate::{
    assets::Bitmap,
    foundation::core::Rect,
    foundation::error::HandoffResult,
    scene::tree::LayerContainer,
    transition::animation::LayerAnimation,
};

/// Which of the two screens in a transition is meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenRole {
    From,
    To,
}

/// What the engine needs from the host environment for one transition.
///
/// All calls happen on the host's UI thread; nothing else may mutate the container
/// or either screen while a transition is running.
pub trait TransitionContext {
    /// Surface that temporary layers are added to, above both screens.
    fn container(&mut self) -> &mut dyn LayerContainer;

    fn screen_frame(&self, role: ScreenRole) -> Rect;

    fn set_screen_frame(&mut self, role: ScreenRole, frame: Rect);

    /// Static copy of the screen's current rendered state, sized to its frame.
    fn snapshot_screen(&mut self, role: ScreenRole) -> HandoffResult<Bitmap>;

    /// Start `animation`. The host must call
    /// [`crate::TransitionEngine::finish`] once it has played out.
    fn animate(&mut self, animation: LayerAnimation);

    /// Read once, while the transition completes.
    fn transition_was_cancelled(&self) -> bool;

    /// Make the destination screen a permanent part of the host's view tree.
    fn attach_destination(&mut self);

    fn complete_transition(&mut self, finished: bool);
}
