use super::*;
use crate::{
    screens::ScreenView,
    transition::{
        context::{ScreenRole, TransitionContext},
        engine::TransitionPhase,
        participant::TransitionParticipant,
    },
};

fn app() -> PhotoApp {
    let timing = TransitionTiming {
        duration_secs: 0.25,
        ..TransitionTiming::default()
    };
    PhotoApp::new(
        PhotoLibrary::numbered(6, 12, 8),
        Rect::new(0.0, 0.0, 160.0, 240.0),
        timing,
    )
    .unwrap()
}

fn opts() -> TransitionOptions {
    TransitionOptions {
        fps: Fps::new(20, 1).unwrap(),
        cancel: false,
    }
}

#[test]
fn present_then_dismiss_round_trip() {
    let mut app = app();
    let report = app.present(3, opts(), |_, _| Ok(())).unwrap();
    assert!(report.success);
    assert!(report.frames > 1);

    let viewer = app.viewer().unwrap().clone();
    assert_eq!(viewer.current_index(), 3);
    assert_eq!(viewer.frame(), app.screen());
    assert!(!viewer.hides_current());
    assert!(!app.gallery().hides_selected());

    let report = app.dismiss(opts(), |_, _| Ok(())).unwrap();
    assert!(report.success);
    assert!(app.viewer().is_none());
    assert_eq!(app.engine().phase(), TransitionPhase::Idle);
}

#[test]
fn dismiss_follows_the_viewer_page() {
    let mut app = app();
    app.present(0, opts(), |_, _| Ok(())).unwrap();
    app.viewer().unwrap().show_page(4).unwrap();

    let mut start = None;
    app.dismiss(opts(), |idx, host| {
        if idx.0 == 0 {
            start = Some(host.screen_frame(ScreenRole::To));
        }
        Ok(())
    })
    .unwrap();
    assert_eq!(app.gallery().selected_index(), Some(4));
    assert_eq!(start, Some(app.screen()));
    assert_eq!(
        app.gallery().asset_frame(),
        app.gallery().cell_frame(4).unwrap()
    );
}

#[test]
fn cancelled_present_keeps_the_gallery() {
    let mut app = app();
    let report = app
        .present(
            2,
            TransitionOptions {
                cancel: true,
                ..opts()
            },
            |_, _| Ok(()),
        )
        .unwrap();
    assert!(!report.success);
    assert!(app.viewer().is_none());
    assert!(!app.gallery().hides_selected());
}

#[test]
fn flow_preconditions() {
    let mut app = app();
    assert!(app.dismiss(opts(), |_, _| Ok(())).unwrap_err().is_precondition());
    assert!(app.present(99, opts(), |_, _| Ok(())).is_err());

    app.present(1, opts(), |_, _| Ok(())).unwrap();
    assert!(app.present(1, opts(), |_, _| Ok(())).unwrap_err().is_precondition());

    assert!(
        PhotoApp::new(PhotoLibrary::default(), Rect::ZERO, TransitionTiming::default()).is_err()
    );
}

#[test]
fn failed_frame_callback_leaves_the_app_usable() {
    let mut app = app();
    let err = app
        .present(2, opts(), |idx, _| {
            if idx.0 == 1 {
                Err(HandoffError::render("disk full"))
            } else {
                Ok(())
            }
        })
        .unwrap_err();
    assert!(err.to_string().contains("disk full"));

    assert_eq!(app.engine().phase(), TransitionPhase::Idle);
    assert!(!app.gallery().hides_selected());
    assert!(app.viewer().is_none());

    let report = app.present(2, opts(), |_, _| Ok(())).unwrap();
    assert!(report.success);
    assert_eq!(app.viewer().map(|v| v.current_index()), Some(2));
}
