use super::{
    readiness_gate::{DeferredAction, WaitKind, WaitOutcome},
    MediaElement, MediaElementController, ReadyState, Timers,
};
use crate::Logger;

impl<M: MediaElement, T: Timers> MediaElementController<M, T> {
    /// Update the playback rate of the media element.
    ///
    /// Unless `ignore_ready_state` is set, the update is only performed once the media element
    /// has enough data to play (`HaveFutureData`), as some browsers do not consider a playback
    /// rate set before that. A new update, even an immediate one, replaces a previous one still
    /// awaiting.
    ///
    /// While playback is halted due to a stall, the rate is only applied once it resumes.
    pub(crate) fn set_playback_rate(&mut self, rate: f64, ignore_ready_state: bool) {
        if self.hold_rate_while_halted(rate) {
            return;
        }
        self.run_when_playable(
            WaitKind::PlaybackRate,
            DeferredAction::ApplyPlaybackRate(rate),
            ignore_ready_state,
        );
    }

    /// Returns the playback rate currently set on the media element.
    ///
    /// Returns `None` if no media element is attached.
    pub(crate) fn playback_rate(&self) -> Option<f64> {
        self.media.as_ref().map(|m| m.playback_rate())
    }

    /// Run `action` now if `ignore_ready_state` is set or if the media element has enough data
    /// to play (`HaveFutureData`). Otherwise register it under `kind` to run once it has.
    pub(super) fn run_when_playable(
        &mut self,
        kind: WaitKind,
        action: DeferredAction,
        ignore_ready_state: bool,
    ) {
        if self.media.is_none() {
            return;
        }
        if ignore_ready_state {
            self.gate.cancel(self.media.as_mut(), kind);
            self.run_deferred_action(action);
            return;
        }
        match self
            .gate
            .wait_for(self.media.as_mut(), ReadyState::HaveFutureData, kind, action)
        {
            WaitOutcome::Immediate(action) => self.run_deferred_action(action),
            WaitOutcome::Pending(handle) => Logger::lazy_debug(&|| {
                format!(
                    "MEC: {:?} ({:?}) awaiting \"{}\"",
                    handle.action, handle.kind, handle.event
                )
            }),
            WaitOutcome::NoMediaElement => {}
        }
    }
}
