//! The shared-element transition orchestrator.
//!
//! One engine drives at most one session at a time:
//!
//! 1. [`TransitionEngine::configure`] stores the asset and both participants.
//! 2. [`TransitionEngine::run`] builds the temporary layer stack, hides the live
//!    copies of the asset and hands a single [`LayerAnimation`] to the host.
//! 3. The host plays the animation and calls [`TransitionEngine::finish`], which
//!    restores both participants, removes every temporary layer, attaches the
//!    destination unless the host cancelled, and reports the outcome.
//!
//! Between steps 2 and 3 the asset is visible only in the animating layer.

use std::{fmt, rc::Rc, sync::Arc};

use crate::{
    animation::timing::TransitionTiming,
    assets::library::Asset,
    foundation::core::{Rect, is_degenerate},
    foundation::error::{HandoffError, HandoffResult},
    scene::layer::{Layer, LayerId, LayerProps},
    transition::animation::{LayerAnimation, LayerTrack},
    transition::context::{ScreenRole, TransitionContext},
    transition::participant::TransitionParticipant,
};

/// Observable lifecycle of a [`TransitionEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    Idle,
    Configured,
    Running,
    Completing,
}

struct Session {
    // Asset layer first, then the snapshots in insertion order.
    layers: Vec<LayerId>,
    start_frame: Rect,
    end_frame: Rect,
}

pub struct TransitionEngine {
    timing: TransitionTiming,
    phase: TransitionPhase,
    asset: Option<Arc<Asset>>,
    from: Option<Rc<dyn TransitionParticipant>>,
    to: Option<Rc<dyn TransitionParticipant>>,
    session: Option<Session>,
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self {
            timing: TransitionTiming::default(),
            phase: TransitionPhase::Idle,
            asset: None,
            from: None,
            to: None,
            session: None,
        }
    }
}

impl fmt::Debug for TransitionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionEngine")
            .field("timing", &self.timing)
            .field("phase", &self.phase)
            .field("asset", &self.asset.as_ref().map(|a| a.id))
            .field("has_from", &self.from.is_some())
            .field("has_to", &self.to.is_some())
            .field(
                "temporary_layers",
                &self.session.as_ref().map_or(0, |s| s.layers.len()),
            )
            .finish()
    }
}

impl TransitionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: TransitionTiming) -> HandoffResult<Self> {
        timing.validate()?;
        let mut engine = Self::default();
        engine.timing = timing;
        Ok(engine)
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Length of the animation handed to the host, in seconds.
    pub fn transition_duration(&self) -> f64 {
        self.timing.duration_secs
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Start and end frames of the animating asset while a session is running.
    pub fn active_frames(&self) -> Option<(Rect, Rect)> {
        self.session.as_ref().map(|s| (s.start_frame, s.end_frame))
    }

    /// Store the inputs for the next [`TransitionEngine::run`].
    ///
    /// Replaces a pending configuration. Fails while a transition is in flight, since
    /// the running session still owns the participants.
    pub fn configure(
        &mut self,
        asset: Arc<Asset>,
        from: Rc<dyn TransitionParticipant>,
        to: Rc<dyn TransitionParticipant>,
    ) -> HandoffResult<()> {
        match self.phase {
            TransitionPhase::Running | TransitionPhase::Completing => {
                Err(HandoffError::precondition(format!(
                    "configure called while a transition is {:?}",
                    self.phase
                )))
            }
            TransitionPhase::Idle | TransitionPhase::Configured => {
                tracing::debug!(asset = ?asset.id, "transition configured");
                self.asset = Some(asset);
                self.from = Some(from);
                self.to = Some(to);
                self.phase = TransitionPhase::Configured;
                Ok(())
            }
        }
    }

    /// Build the temporary layers and start the animation.
    ///
    /// Without a full configuration this returns a precondition error and touches
    /// nothing. A failed snapshot skips the animation: the engine cleans up and
    /// completes the transition immediately.
    #[tracing::instrument(skip(self, ctx))]
    pub fn run(&mut self, ctx: &mut dyn TransitionContext) -> HandoffResult<()> {
        if self.phase != TransitionPhase::Configured {
            return Err(HandoffError::precondition(format!(
                "run requires a configured engine, found {:?}",
                self.phase
            )));
        }
        let (Some(asset), Some(from), Some(to)) =
            (self.asset.clone(), self.from.clone(), self.to.clone())
        else {
            return Err(HandoffError::precondition(
                "run requires an asset and both participants",
            ));
        };

        let screen = ctx.screen_frame(ScreenRole::From);
        ctx.set_screen_frame(ScreenRole::To, screen);

        // Sample before the source hides its copy.
        let start_frame = from.asset_frame();
        if is_degenerate(start_frame) {
            tracing::warn!(?start_frame, "source asset frame is degenerate");
        }
        let asset_layer = ctx
            .container()
            .add_layer(Layer::image(asset.image.clone(), start_frame));

        from.prepare_for_transition();
        to.prepare_for_transition();
        self.phase = TransitionPhase::Running;

        let mut layers = vec![asset_layer];
        let to_snapshot = match insert_snapshots(ctx, screen, &mut layers) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(%err, "snapshot capture failed; completing without animation");
                self.session = Some(Session {
                    layers,
                    start_frame,
                    end_frame: start_frame,
                });
                self.finish(ctx)?;
                return Ok(());
            }
        };

        ctx.container().bring_to_front(asset_layer);

        let end_frame = to.asset_frame();
        if is_degenerate(end_frame) {
            tracing::warn!(?end_frame, "destination asset frame is degenerate");
        }

        let animation = LayerAnimation::new(self.timing)
            .with_track(LayerTrack {
                layer: to_snapshot,
                from: LayerProps {
                    frame: screen,
                    opacity: 0.0,
                },
                to: LayerProps {
                    frame: screen,
                    opacity: 1.0,
                },
            })
            .with_track(LayerTrack {
                layer: asset_layer,
                from: LayerProps {
                    frame: start_frame,
                    opacity: 1.0,
                },
                to: LayerProps {
                    frame: end_frame,
                    opacity: 1.0,
                },
            });

        tracing::debug!(
            ?start_frame,
            ?end_frame,
            duration_secs = self.timing.duration_secs,
            "transition running"
        );
        self.session = Some(Session {
            layers,
            start_frame,
            end_frame,
        });
        ctx.animate(animation);
        Ok(())
    }

    /// Complete the running session once the host's animation has finished.
    ///
    /// Returns the success value reported to the host (`false` when cancelled).
    #[tracing::instrument(skip(self, ctx))]
    pub fn finish(&mut self, ctx: &mut dyn TransitionContext) -> HandoffResult<bool> {
        if self.phase != TransitionPhase::Running {
            return Err(HandoffError::precondition(format!(
                "finish requires a running transition, found {:?}",
                self.phase
            )));
        }
        self.phase = TransitionPhase::Completing;
        let session = self.session.take();

        self.restore_participants();

        if let Some(session) = session {
            for id in session.layers {
                if !ctx.container().remove_layer(id) {
                    tracing::warn!(?id, "temporary layer was already removed");
                }
            }
        }

        let cancelled = ctx.transition_was_cancelled();
        if !cancelled {
            ctx.attach_destination();
        }
        ctx.complete_transition(!cancelled);

        self.asset = None;
        self.phase = TransitionPhase::Idle;
        tracing::debug!(success = !cancelled, "transition finished");
        Ok(!cancelled)
    }

    // Destination first, reverse of preparation. Taking the handles makes a second
    // call a no-op.
    fn restore_participants(&mut self) {
        if let Some(to) = self.to.take() {
            to.restore_after_transition();
        }
        if let Some(from) = self.from.take() {
            from.restore_after_transition();
        }
    }
}

impl Drop for TransitionEngine {
    fn drop(&mut self) {
        if self.phase == TransitionPhase::Running {
            tracing::warn!("transition engine dropped mid-session; restoring participants");
            self.restore_participants();
        }
    }
}

fn insert_snapshots(
    ctx: &mut dyn TransitionContext,
    screen: Rect,
    layers: &mut Vec<LayerId>,
) -> HandoffResult<LayerId> {
    let from = ctx.snapshot_screen(ScreenRole::From)?;
    layers.push(
        ctx.container()
            .add_layer(Layer::snapshot(Arc::new(from), screen)),
    );

    let to = ctx.snapshot_screen(ScreenRole::To)?;
    let to_layer = ctx
        .container()
        .add_layer(Layer::snapshot(Arc::new(to), screen).with_opacity(0.0));
    layers.push(to_layer);
    Ok(to_layer)
}

#[cfg(test)]
#[path = "../../tests/unit/transition/engine.rs"]
mod tests;
