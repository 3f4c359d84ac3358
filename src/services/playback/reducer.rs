use tracing::{debug, trace, warn};

use super::{
    events::{EventOutcome, MediaEvent, MediaEventKind},
    types::PlaybackState,
};

/// Applies one media event to the playback state.
///
/// Events raised for a source other than the current one are dropped
/// before anything else is looked at: a load that was superseded must not
/// touch the state of its successor.
pub(crate) fn reduce(state: &mut PlaybackState, event: &MediaEvent) -> EventOutcome {
    if !state.is_current(&event.source) {
        debug!(
            source = %event.source,
            event = %event.kind,
            "Discarding event from superseded source"
        );
        return EventOutcome::Stale;
    }

    trace!(source = %event.source, event = %event.kind, "Applying media event");
    let before = state.clone();

    match &event.kind {
        MediaEventKind::LoadStarted => {
            state.is_loaded = false;
        }
        MediaEventKind::MetadataLoaded { duration } => {
            state.duration = sanitize_duration(*duration);
            state.is_loaded = true;
            state.current_time = state.clamp_position(state.current_time);
        }
        MediaEventKind::CanPlay => {
            state.is_loaded = true;
        }
        MediaEventKind::TimeUpdated { time } => {
            state.current_time = state.clamp_position(*time);
        }
        MediaEventKind::Playing => {
            state.is_playing = true;
            state.started = true;
        }
        MediaEventKind::Paused | MediaEventKind::Waiting => {
            state.is_playing = false;
        }
        MediaEventKind::Ended => {
            state.is_playing = false;
            state.current_time = 0.0;
        }
        MediaEventKind::Errored { message } => {
            warn!(source = %event.source, %message, "Audio playback error");
            state.is_playing = false;
            state.is_loaded = false;
        }
        MediaEventKind::PlayRejected { reason } => {
            debug!(source = %event.source, %reason, "Play request refused");
            state.is_playing = false;
        }
    }

    if *state == before {
        EventOutcome::Unchanged
    } else {
        EventOutcome::Applied
    }
}

/// Live streams report an infinite duration; treat that like unknown.
fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}
