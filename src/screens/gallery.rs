use std::{cell::Cell, sync::Arc};

use crate::{
    assets::library::{Asset, PhotoLibrary},
    foundation::core::{Rect, Rgba8Premul, is_degenerate},
    foundation::error::{HandoffError, HandoffResult},
    scene::layer::Layer,
    screens::ScreenView,
    transition::participant::TransitionParticipant,
};

/// Smallest cell edge; the grid fits as many of these per row as the width allows.
pub const MIN_CELL_SIDE: f64 = 78.0;
/// Gap between neighbouring cells, both axes.
pub const CELL_SPACING: f64 = 1.0;

const BACKGROUND: Rgba8Premul = Rgba8Premul::WHITE;

/// Scrollable grid of square thumbnails, one per library photo.
#[derive(Debug)]
pub struct GalleryScreen {
    library: PhotoLibrary,
    frame: Cell<Rect>,
    selected: Cell<Option<usize>>,
    scroll_offset: Cell<f64>,
    hide_selected: Cell<bool>,
}

impl GalleryScreen {
    pub fn new(library: PhotoLibrary, frame: Rect) -> Self {
        Self {
            library,
            frame: Cell::new(frame),
            selected: Cell::new(None),
            scroll_offset: Cell::new(0.0),
            hide_selected: Cell::new(false),
        }
    }

    pub fn library(&self) -> &PhotoLibrary {
        &self.library
    }

    pub fn items_per_row(&self) -> usize {
        let n = (self.frame.get().width() / MIN_CELL_SIDE).floor();
        if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
    }

    pub fn cell_side(&self) -> f64 {
        let n = self.items_per_row() as f64;
        ((self.frame.get().width() - (n - 1.0) * CELL_SPACING) / n).max(0.0)
    }

    /// Height of the whole grid, regardless of scrolling.
    pub fn content_height(&self) -> f64 {
        let rows = self.library.len().div_ceil(self.items_per_row());
        if rows == 0 {
            return 0.0;
        }
        rows as f64 * self.cell_side() + (rows - 1) as f64 * CELL_SPACING
    }

    /// Frame of cell `index` in container coordinates, scrolling applied.
    pub fn cell_frame(&self, index: usize) -> Option<Rect> {
        if index >= self.library.len() {
            return None;
        }
        let per_row = self.items_per_row();
        let side = self.cell_side();
        let stride = side + CELL_SPACING;
        let origin = self.frame.get().origin();
        let x = origin.x + (index % per_row) as f64 * stride;
        let y = origin.y + (index / per_row) as f64 * stride - self.scroll_offset.get();
        Some(Rect::new(x, y, x + side, y + side))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.get()
    }

    pub fn selected_asset(&self) -> Option<Arc<Asset>> {
        self.selected.get().and_then(|i| self.library.get(i))
    }

    /// Select the photo that a tap at `index` would open.
    pub fn select(&self, index: usize) -> HandoffResult<()> {
        if index >= self.library.len() {
            return Err(HandoffError::validation(format!(
                "gallery has {} photos, cannot select {index}",
                self.library.len()
            )));
        }
        self.selected.set(Some(index));
        Ok(())
    }

    /// Follow the page the viewer ended up on, so a dismissal lands on the right cell.
    pub fn update_selected_index(&self, index: usize) -> HandoffResult<()> {
        tracing::debug!(index, "gallery selection updated");
        self.select(index)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    /// Scroll vertically, clamped to the grid's extent.
    pub fn set_scroll_offset(&self, offset: f64) {
        let max = (self.content_height() - self.frame.get().height()).max(0.0);
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.scroll_offset.set(offset.clamp(0.0, max));
    }

    pub fn hides_selected(&self) -> bool {
        self.hide_selected.get()
    }
}

impl TransitionParticipant for GalleryScreen {
    fn prepare_for_transition(&self) {
        self.hide_selected.set(true);
    }

    fn restore_after_transition(&self) {
        self.hide_selected.set(false);
    }

    fn asset_frame(&self) -> Rect {
        if is_degenerate(self.frame.get()) {
            return Rect::ZERO;
        }
        self.selected
            .get()
            .and_then(|i| self.cell_frame(i))
            .unwrap_or(Rect::ZERO)
    }
}

impl ScreenView for GalleryScreen {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
        self.set_scroll_offset(self.scroll_offset.get());
    }

    fn layers(&self) -> Vec<Layer> {
        let frame = self.frame.get();
        let mut layers = vec![Layer::solid(BACKGROUND, frame)];
        if is_degenerate(frame) {
            return layers;
        }
        let hidden = self.hide_selected.get().then(|| self.selected.get()).flatten();
        for (index, asset) in self.library.iter().enumerate() {
            if Some(index) == hidden {
                continue;
            }
            let Some(cell) = self.cell_frame(index) else {
                continue;
            };
            if is_degenerate(cell.intersect(frame)) {
                continue;
            }
            layers.push(Layer::image(asset.image.clone(), cell));
        }
        layers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screens/gallery.rs"]
mod tests;
