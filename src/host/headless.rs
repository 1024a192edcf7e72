use std::rc::Rc;

use crate::{
    assets::Bitmap,
    foundation::core::{Rect, Rgba8Premul},
    foundation::error::HandoffResult,
    host::animator::{AnimationStatus, FrameAnimator},
    render::cpu::rasterize,
    scene::layer::Layer,
    scene::tree::{LayerContainer, LayerTree},
    screens::ScreenView,
    transition::animation::LayerAnimation,
    transition::context::{ScreenRole, TransitionContext},
};

/// Offscreen [`TransitionContext`] that renders with the CPU rasterizer.
///
/// The source screen starts attached; the destination joins it once a transition
/// completes successfully. Temporary layers live in a [`LayerTree`] drawn above
/// both screens.
pub struct HeadlessHost {
    tree: LayerTree,
    from: Rc<dyn ScreenView>,
    to: Rc<dyn ScreenView>,
    animator: FrameAnimator,
    cancelled: bool,
    attached: Vec<ScreenRole>,
    completion: Option<bool>,
    clear: Rgba8Premul,
}

impl HeadlessHost {
    pub fn new(from: Rc<dyn ScreenView>, to: Rc<dyn ScreenView>) -> Self {
        Self {
            tree: LayerTree::new(),
            from,
            to,
            animator: FrameAnimator::new(),
            cancelled: false,
            attached: vec![ScreenRole::From],
            completion: None,
            clear: Rgba8Premul::WHITE,
        }
    }

    pub fn with_clear(mut self, clear: Rgba8Premul) -> Self {
        self.clear = clear;
        self
    }

    /// Mark the running transition as cancelled (an interactive dismissal that was
    /// abandoned, for instance). Takes effect when the engine finishes.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Value passed to [`TransitionContext::complete_transition`], once called.
    pub fn completion(&self) -> Option<bool> {
        self.completion
    }

    pub fn is_attached(&self, role: ScreenRole) -> bool {
        self.attached.contains(&role)
    }

    pub fn tree(&self) -> &LayerTree {
        &self.tree
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn tick(&mut self, dt_secs: f64) -> HandoffResult<AnimationStatus> {
        self.animator.tick(dt_secs, &mut self.tree)
    }

    fn screen(&self, role: ScreenRole) -> &Rc<dyn ScreenView> {
        match role {
            ScreenRole::From => &self.from,
            ScreenRole::To => &self.to,
        }
    }

    /// Composite the attached screens and the temporary layers into one bitmap the
    /// size of the source screen.
    pub fn render_frame(&self) -> HandoffResult<Bitmap> {
        let mut layers: Vec<Layer> = self
            .attached
            .iter()
            .flat_map(|role| self.screen(*role).layers())
            .collect();
        layers.extend(self.tree.layers().cloned());
        rasterize(&layers, self.from.frame(), self.clear)
    }
}

impl TransitionContext for HeadlessHost {
    fn container(&mut self) -> &mut dyn LayerContainer {
        &mut self.tree
    }

    fn screen_frame(&self, role: ScreenRole) -> Rect {
        self.screen(role).frame()
    }

    fn set_screen_frame(&mut self, role: ScreenRole, frame: Rect) {
        self.screen(role).set_frame(frame);
    }

    fn snapshot_screen(&mut self, role: ScreenRole) -> HandoffResult<Bitmap> {
        let screen = self.screen(role);
        rasterize(&screen.layers(), screen.frame(), self.clear)
    }

    fn animate(&mut self, animation: LayerAnimation) {
        tracing::debug!(
            tracks = animation.tracks.len(),
            duration_secs = animation.duration_secs(),
            "animation started"
        );
        self.animator.animate(animation);
    }

    fn transition_was_cancelled(&self) -> bool {
        self.cancelled
    }

    fn attach_destination(&mut self) {
        if !self.attached.contains(&ScreenRole::To) {
            self.attached.push(ScreenRole::To);
        }
    }

    fn complete_transition(&mut self, finished: bool) {
        tracing::debug!(finished, "transition completed");
        self.completion = Some(finished);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
