use super::{
    readiness_gate::{DeferredAction, WaitKind},
    MediaElement, MediaElementController, ReadyState, Timers,
};
use crate::{
    bindings::{MediaEvent, MediaType},
    Logger,
};

/// Keeps track of the sources of stalls (generally one per media type) currently known, and
/// of the playback rate to restore once none is left.
#[derive(Debug, Default)]
pub(super) struct StallRegistry {
    /// Sources currently stalled, in the order they were added. Each appears at most once.
    sources: Vec<MediaType>,

    /// Playback rate set before playback was halted due to the stall.
    previous_playback_rate: Option<f64>,
}

impl StallRegistry {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn is_stalled(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Add `source` to the stalled ones.
    ///
    /// Returns `false` if it was already there.
    fn add(&mut self, source: MediaType) -> bool {
        if self.sources.contains(&source) {
            false
        } else {
            self.sources.push(source);
            true
        }
    }

    /// Remove `source` from the stalled ones.
    ///
    /// Returns `false` if it was not there.
    fn remove(&mut self, source: MediaType) -> bool {
        match self.sources.iter().position(|s| *s == source) {
            Some(idx) => {
                self.sources.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(super) fn reset(&mut self) {
        self.sources.clear();
        self.previous_playback_rate = None;
    }
}

impl<M: MediaElement, T: Timers> MediaElementController<M, T> {
    /// Announce that the given source started (`is_stalled` set to `true`) or stopped stalling.
    pub(crate) fn set_stall_state(&mut self, source: Option<MediaType>, is_stalled: bool) {
        if is_stalled {
            self.mark_stalled(source);
        } else {
            self.clear_stalled(source);
        }
    }

    /// Returns `true` if at least one source is currently stalled.
    pub(crate) fn is_stalled(&self) -> bool {
        self.stalls.is_stalled()
    }

    /// Announce that `source` lacks media data to continue playback.
    ///
    /// When the first source begins to stall and synthetic stall events are enabled, playback
    /// is halted by setting the playback rate to `0` and a `waiting` event is sent. Whether
    /// the `readyState` allows it is only checked at that moment.
    pub(crate) fn mark_stalled(&mut self, source: Option<MediaType>) {
        let Some(source) = source else {
            return;
        };
        let Some(media) = self.media.as_mut() else {
            return;
        };
        if media.seeking() || !self.stalls.add(source) {
            return;
        }
        Logger::lazy_info(&|| format!("MEC: {} stalled", source));
        if self.stalls.sources.len() != 1 {
            return;
        }

        let config = self.configuration.synthetic_stall_events;
        if !config.enabled {
            return;
        }

        // A resume from the previous stall must not unfreeze this one
        self.gate.cancel(Some(&mut *media), WaitKind::StallResume);

        if config.ignore_ready_state || media.ready_state() >= ReadyState::HaveFutureData {
            Logger::info("MEC: Halting playback due to stall");
            // A rate update still awaiting is applied on resume instead
            let rate = match self.gate.take_pending(Some(&mut *media), WaitKind::PlaybackRate) {
                Some(DeferredAction::ApplyPlaybackRate(rate)) => rate,
                _ => media.playback_rate(),
            };
            self.stalls.previous_playback_rate = Some(rate);
            media.set_playback_rate(0.);
            media.dispatch_event(MediaEvent::Waiting);
        }
    }

    /// Announce that `source` is not lacking media data anymore.
    ///
    /// When it was the last stalled source and synthetic stall events are enabled, the
    /// playback rate set before the stall is restored (once the media element can play, unless
    /// configured to ignore its `readyState`) and a `playing` event is sent.
    pub(crate) fn clear_stalled(&mut self, source: Option<MediaType>) {
        let Some(source) = source else {
            return;
        };
        if !self.stalls.remove(source) {
            return;
        }
        Logger::lazy_info(&|| format!("MEC: {} not stalled anymore", source));
        if self.stalls.is_stalled() {
            return;
        }
        let previous_rate = self.stalls.previous_playback_rate.take();
        let config = self.configuration.synthetic_stall_events;
        if !config.enabled || self.media.is_none() {
            return;
        }
        let rate = previous_rate
            .filter(|r| *r != 0. && !r.is_nan())
            .unwrap_or(1.);
        self.run_when_playable(
            WaitKind::StallResume,
            DeferredAction::ResumeAfterStall { rate },
            config.ignore_ready_state,
        );
    }

    /// If playback is currently halted due to a stall, keep `rate` to apply it on resume and
    /// return `true`. Return `false` otherwise.
    pub(super) fn hold_rate_while_halted(&mut self, rate: f64) -> bool {
        let Some(previous_rate) = self.stalls.previous_playback_rate.as_mut() else {
            return false;
        };
        Logger::lazy_debug(&|| format!("MEC: Stalled, playback rate {} set on resume", rate));
        *previous_rate = rate;
        self.gate.cancel(self.media.as_mut(), WaitKind::PlaybackRate);
        true
    }

    /// Restore the playback rate at the end of a stall and announce it.
    pub(super) fn resume_after_stall(&mut self, rate: f64) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        Logger::lazy_info(&|| format!("MEC: Resuming playback at rate {}", rate));
        media.set_playback_rate(rate);
        if !media.paused() {
            media.dispatch_event(MediaEvent::Playing);
        }
    }

    /// Reaction to the media element's `playing` event.
    ///
    /// Some browsers send it when `play` is called even when the playback rate is at `0`. If
    /// we're the ones having halted playback, re-send a `waiting` event instead.
    pub(super) fn on_playing(&mut self) {
        if !self.stalls.is_stalled() {
            return;
        }
        if let Some(media) = self.media.as_mut() {
            if media.playback_rate() == 0. {
                Logger::debug("MEC: \"playing\" received while stalled, sending \"waiting\"");
                media.dispatch_event(MediaEvent::Waiting);
            }
        }
    }
}
