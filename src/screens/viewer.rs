use std::{cell::Cell, sync::Arc};

use crate::{
    assets::library::{Asset, PhotoLibrary},
    foundation::core::{Rect, Rgba8Premul, Vec2, aspect_fit, is_degenerate},
    foundation::error::{HandoffError, HandoffResult},
    scene::layer::{ContentMode, Layer},
    screens::ScreenView,
    transition::participant::TransitionParticipant,
};

/// Full-screen pager showing one photo per page, aspect-fit on black.
#[derive(Debug)]
pub struct PhotoViewerScreen {
    library: PhotoLibrary,
    frame: Cell<Rect>,
    current: Cell<usize>,
    page_offset: Cell<f64>,
    hide_current: Cell<bool>,
}

impl PhotoViewerScreen {
    /// Open at `index`. The frame may still be empty; paging starts once it is laid out.
    pub fn new(library: PhotoLibrary, index: usize, frame: Rect) -> HandoffResult<Self> {
        if index >= library.len() {
            return Err(HandoffError::validation(format!(
                "viewer has {} photos, cannot open {index}",
                library.len()
            )));
        }
        let viewer = Self {
            library,
            frame: Cell::new(frame),
            current: Cell::new(index),
            page_offset: Cell::new(0.0),
            hide_current: Cell::new(false),
        };
        viewer.page_offset.set(viewer.offset_for(index));
        Ok(viewer)
    }

    fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.frame.get().width().max(0.0)
    }

    pub fn current_index(&self) -> usize {
        self.current.get()
    }

    pub fn current_asset(&self) -> Option<Arc<Asset>> {
        self.library.get(self.current.get())
    }

    /// Title of the photo on screen.
    pub fn title(&self) -> Option<String> {
        self.current_asset().map(|a| a.title.clone())
    }

    pub fn page_offset(&self) -> f64 {
        self.page_offset.get()
    }

    /// Scroll horizontally; the current page becomes the nearest one to `offset`.
    pub fn set_page_offset(&self, offset: f64) {
        let width = self.frame.get().width();
        if width.is_nan() || width <= 0.0 || !offset.is_finite() || self.library.is_empty() {
            return;
        }
        let last = self.library.len() - 1;
        let max = last as f64 * width;
        let offset = offset.clamp(0.0, max);
        let page = (offset / width).round() as usize;
        self.page_offset.set(offset);
        if page.min(last) != self.current.get() {
            tracing::debug!(page, "viewer page changed");
        }
        self.current.set(page.min(last));
    }

    /// Jump straight to `index`, as if paging ended there.
    pub fn show_page(&self, index: usize) -> HandoffResult<()> {
        if index >= self.library.len() {
            return Err(HandoffError::validation(format!(
                "viewer has {} photos, cannot show {index}",
                self.library.len()
            )));
        }
        self.current.set(index);
        self.page_offset.set(self.offset_for(index));
        Ok(())
    }

    pub fn hides_current(&self) -> bool {
        self.hide_current.get()
    }
}

impl TransitionParticipant for PhotoViewerScreen {
    fn prepare_for_transition(&self) {
        self.hide_current.set(true);
    }

    fn restore_after_transition(&self) {
        self.hide_current.set(false);
    }

    fn asset_frame(&self) -> Rect {
        let frame = self.frame.get();
        match self.current_asset() {
            Some(asset) if !is_degenerate(frame) => aspect_fit(asset.size(), frame),
            _ => Rect::ZERO,
        }
    }
}

impl ScreenView for PhotoViewerScreen {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
        // Relayout keeps the current page in place.
        self.page_offset.set(self.offset_for(self.current.get()));
    }

    fn layers(&self) -> Vec<Layer> {
        let frame = self.frame.get();
        let mut layers = vec![Layer::solid(Rgba8Premul::BLACK, frame)];
        if is_degenerate(frame) {
            return layers;
        }
        let width = frame.width();
        let offset = self.page_offset.get();
        for (index, asset) in self.library.iter().enumerate() {
            if index == self.current.get() && self.hide_current.get() {
                continue;
            }
            let page = frame + Vec2::new(index as f64 * width - offset, 0.0);
            if is_degenerate(page.intersect(frame)) {
                continue;
            }
            layers.push(
                Layer::image(asset.image.clone(), page).with_content_mode(ContentMode::AspectFit),
            );
        }
        layers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screens/viewer.rs"]
mod tests;
