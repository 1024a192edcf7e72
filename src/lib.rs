//! Handoff is a shared-element transition engine.
//!
//! A photo shown on one screen appears to move and resize into its place on another
//! screen while the destination fades in underneath it:
//!
//! - Screens implement [`TransitionParticipant`] to report where the photo sits and to
//!   hide their own copy while it is in flight
//! - The host implements [`TransitionContext`] (or uses the bundled [`HeadlessHost`])
//! - A [`TransitionEngine`] is configured, run, and finished once the host's animation ends
//!
//! [`PhotoApp`] ties a [`GalleryScreen`] and a [`PhotoViewerScreen`] together with CPU
//! rendering, which is what the `handoff` binary drives.
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod animation;
pub(crate) mod app;
pub(crate) mod host;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod screens;
pub(crate) mod transition;

pub use crate::foundation::core::{
    Fps, FrameIndex, Point, Rect, Rgba8Premul, Size, Vec2, aspect_fill, aspect_fit,
    is_degenerate, lerp_rect,
};
pub use crate::foundation::error::{HandoffError, HandoffResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::{SETTLE_EPSILON, SpringCurve};
pub use crate::animation::timing::{CurveSample, TransitionTiming};
pub use crate::app::{PhotoApp, TransitionOptions};
pub use crate::assets::Bitmap;
pub use crate::assets::decode::{decode_image, load_image};
pub use crate::assets::library::{Asset, AssetId, PhotoLibrary};
pub use crate::host::animator::{AnimationStatus, FrameAnimator};
pub use crate::host::driver::{TransitionReport, drive};
pub use crate::host::headless::HeadlessHost;
pub use crate::render::composite::{PremulRgba8, over, over_in_place};
pub use crate::render::cpu::{MAX_RASTER_EDGE, rasterize};
pub use crate::scene::layer::{ContentMode, Layer, LayerContent, LayerId, LayerProps};
pub use crate::scene::tree::{LayerContainer, LayerTree};
pub use crate::screens::ScreenView;
pub use crate::screens::gallery::{CELL_SPACING, GalleryScreen, MIN_CELL_SIDE};
pub use crate::screens::viewer::PhotoViewerScreen;
pub use crate::transition::animation::{LayerAnimation, LayerTrack};
pub use crate::transition::context::{ScreenRole, TransitionContext};
pub use crate::transition::engine::{TransitionEngine, TransitionPhase};
pub use crate::transition::participant::TransitionParticipant;
