//! The gallery/viewer application flow on a headless host.

use std::rc::Rc;

use crate::{
    animation::timing::TransitionTiming,
    assets::library::PhotoLibrary,
    foundation::core::{Fps, FrameIndex, Rect},
    foundation::error::{HandoffError, HandoffResult},
    host::driver::{TransitionReport, drive},
    host::headless::HeadlessHost,
    screens::gallery::GalleryScreen,
    screens::viewer::PhotoViewerScreen,
    transition::engine::TransitionEngine,
};

/// Per-transition playback settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionOptions {
    pub fps: Fps,
    /// Report the transition as cancelled when it completes.
    pub cancel: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            fps: Fps { num: 60, den: 1 },
            cancel: false,
        }
    }
}

/// A photo gallery that opens photos in a full-screen viewer and back, with a
/// shared-element transition each way.
pub struct PhotoApp {
    library: PhotoLibrary,
    screen: Rect,
    gallery: Rc<GalleryScreen>,
    viewer: Option<Rc<PhotoViewerScreen>>,
    engine: TransitionEngine,
}

impl PhotoApp {
    pub fn new(library: PhotoLibrary, screen: Rect, timing: TransitionTiming) -> HandoffResult<Self> {
        if library.is_empty() {
            return Err(HandoffError::validation("photo library is empty"));
        }
        Ok(Self {
            gallery: Rc::new(GalleryScreen::new(library.clone(), screen)),
            library,
            screen,
            viewer: None,
            engine: TransitionEngine::with_timing(timing)?,
        })
    }

    pub fn gallery(&self) -> &Rc<GalleryScreen> {
        &self.gallery
    }

    /// The viewer, while it is presented.
    pub fn viewer(&self) -> Option<&Rc<PhotoViewerScreen>> {
        self.viewer.as_ref()
    }

    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// Open photo `index` from the gallery.
    #[tracing::instrument(skip(self, on_frame))]
    pub fn present<F>(
        &mut self,
        index: usize,
        opts: TransitionOptions,
        on_frame: F,
    ) -> HandoffResult<TransitionReport>
    where
        F: FnMut(FrameIndex, &mut HeadlessHost) -> HandoffResult<()>,
    {
        if self.viewer.is_some() {
            return Err(HandoffError::precondition("viewer is already presented"));
        }
        self.gallery.select(index)?;
        let asset = self
            .library
            .get(index)
            .ok_or_else(|| HandoffError::validation(format!("no photo at {index}")))?;
        // Not laid out until the transition sizes it to the gallery's frame.
        let viewer = Rc::new(PhotoViewerScreen::new(
            self.library.clone(),
            index,
            Rect::ZERO,
        )?);

        let mut host = HeadlessHost::new(self.gallery.clone(), viewer.clone());
        if opts.cancel {
            host.cancel();
        }
        self.engine
            .configure(asset, self.gallery.clone(), viewer.clone())?;
        let report = drive(&mut self.engine, &mut host, opts.fps, on_frame)?;

        if report.success {
            self.viewer = Some(viewer);
        }
        Ok(report)
    }

    /// Close the viewer, landing on the gallery cell of the photo it shows.
    #[tracing::instrument(skip(self, on_frame))]
    pub fn dismiss<F>(
        &mut self,
        opts: TransitionOptions,
        on_frame: F,
    ) -> HandoffResult<TransitionReport>
    where
        F: FnMut(FrameIndex, &mut HeadlessHost) -> HandoffResult<()>,
    {
        let Some(viewer) = self.viewer.clone() else {
            return Err(HandoffError::precondition("no viewer to dismiss"));
        };
        let index = viewer.current_index();
        self.gallery.update_selected_index(index)?;
        let asset = self
            .library
            .get(index)
            .ok_or_else(|| HandoffError::validation(format!("no photo at {index}")))?;

        let mut host = HeadlessHost::new(viewer.clone(), self.gallery.clone());
        if opts.cancel {
            host.cancel();
        }
        self.engine
            .configure(asset, viewer.clone(), self.gallery.clone())?;
        let report = drive(&mut self.engine, &mut host, opts.fps, on_frame)?;

        if report.success {
            self.viewer = None;
        }
        Ok(report)
    }

    /// Size of both screens.
    pub fn screen(&self) -> Rect {
        self.screen
    }
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
