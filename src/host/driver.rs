use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{HandoffError, HandoffResult},
    host::animator::AnimationStatus,
    host::headless::HeadlessHost,
    transition::engine::TransitionEngine,
};

/// Outcome of one driven transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionReport {
    /// The value handed to `complete_transition`.
    pub success: bool,
    /// Frames passed to the callback, including the settled one after completion.
    pub frames: u64,
    /// Animation time played, in seconds.
    pub duration_secs: f64,
}

/// Run a configured `engine` to completion on `host`, one fixed step per frame.
///
/// `on_frame` sees the host before every tick and once more after the engine has
/// finished; it may cancel the transition through [`HeadlessHost::cancel`].
#[tracing::instrument(skip(engine, host, on_frame))]
pub fn drive<F>(
    engine: &mut TransitionEngine,
    host: &mut HeadlessHost,
    fps: Fps,
    mut on_frame: F,
) -> HandoffResult<TransitionReport>
where
    F: FnMut(FrameIndex, &mut HeadlessHost) -> HandoffResult<()>,
{
    let dt = fps.frame_duration_secs();
    tracing::debug!(
        expected_frames = fps.frames_to_cover(engine.transition_duration()),
        "driving transition"
    );
    engine.run(host)?;

    let mut frames = 0u64;
    let mut elapsed = 0.0;

    // A failed snapshot completes inside `run` and never starts an animation.
    if host.completion().is_none() {
        if let Err(err) = play(host, dt, &mut frames, &mut elapsed, &mut on_frame) {
            // Cancelled so `finish` restores both screens without attaching.
            tracing::warn!(%err, frames, "drive aborted; cancelling transition");
            host.cancel();
            engine.finish(host)?;
            return Err(err);
        }
        engine.finish(host)?;
    }

    on_frame(FrameIndex(frames), host)?;
    frames += 1;

    let success = host.completion().unwrap_or(false);
    tracing::info!(success, frames, "transition driven to completion");
    Ok(TransitionReport {
        success,
        frames,
        duration_secs: elapsed,
    })
}

fn play<F>(
    host: &mut HeadlessHost,
    dt: f64,
    frames: &mut u64,
    elapsed: &mut f64,
    on_frame: &mut F,
) -> HandoffResult<()>
where
    F: FnMut(FrameIndex, &mut HeadlessHost) -> HandoffResult<()>,
{
    loop {
        on_frame(FrameIndex(*frames), host)?;
        *frames += 1;
        match host.tick(dt)? {
            AnimationStatus::Running => *elapsed += dt,
            AnimationStatus::Finished => {
                *elapsed += dt;
                return Ok(());
            }
            AnimationStatus::Idle => {
                return Err(HandoffError::animation(
                    "transition is running but the host has no animation",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/driver.rs"]
mod tests;
