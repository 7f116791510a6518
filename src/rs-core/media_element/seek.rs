use super::{
    readiness_gate::{DeferredAction, WaitKind, WaitOutcome},
    MediaElement, MediaElementController, ReadyState, SetCurrentTimeError, Timers,
};
use crate::{
    bindings::{TimerId, TimerReason},
    Logger,
};

/// A seek asked through `set_current_time` and not performed yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct PendingSeek {
    /// The wanted position, in seconds.
    pub(super) time: f64,
    /// If `true`, `time` will be moved to the closest buffered position when performing it.
    pub(super) stick_to_buffered: bool,
}

/// State linked to seek operations.
#[derive(Debug, Default)]
pub(super) struct SeekState {
    /// Only the last asked seek is kept.
    pending: Option<PendingSeek>,

    /// Seeks refused by the media element and awaiting a timer to be retried, with the
    /// position they will set.
    retries: Vec<(TimerId, f64)>,
}

impl SeekState {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Forget the pending seek, if one.
    pub(super) fn abandon_pending(&mut self) {
        self.pending = None;
    }

    /// Reset to the initial state, returning the `TimerId` of retries which were awaited.
    pub(super) fn reset(&mut self) -> Vec<TimerId> {
        self.pending = None;
        self.retries.drain(..).map(|(id, _)| id).collect()
    }
}

impl<M: MediaElement, T: Timers> MediaElementController<M, T> {
    /// Move the media element's position to `time`, in seconds, as soon as it has loaded its
    /// metadata.
    ///
    /// If `stick_to_buffered` is set, the position will be moved to the closest buffered one
    /// at the time the seek is performed.
    ///
    /// A seek asked while another is still awaiting replaces it.
    pub(crate) fn set_current_time(&mut self, time: f64, stick_to_buffered: bool) {
        if self.media.is_none() {
            return;
        }
        self.seek_state.pending = Some(PendingSeek {
            time,
            stick_to_buffered,
        });
        match self.gate.wait_for(
            self.media.as_mut(),
            ReadyState::HaveMetadata,
            WaitKind::SeekApply,
            DeferredAction::ApplySeek,
        ) {
            WaitOutcome::Immediate(action) => self.run_deferred_action(action),
            WaitOutcome::Pending(handle) => Logger::lazy_debug(&|| {
                format!("MEC: Seek to {} awaiting \"{}\"", time, handle.event)
            }),
            WaitOutcome::NoMediaElement => {}
        }
    }

    /// Returns the wanted position: the one of a seek not yet performed if one, else the media
    /// element's current position.
    ///
    /// Returns `None` if no media element is attached.
    pub(crate) fn current_time(&self) -> Option<f64> {
        let media = self.media.as_ref()?;
        Some(match self.seek_state.pending {
            Some(pending) => pending.time,
            None => media.current_time(),
        })
    }

    /// Returns `true` if the media element is seeking or if a seek is waiting to be performed.
    ///
    /// Returns `None` if no media element is attached.
    pub(crate) fn is_seeking(&self) -> Option<bool> {
        let media = self.media.as_ref()?;
        Some(media.seeking() || self.seek_state.pending.is_some())
    }

    /// Perform the pending seek, if one.
    pub(super) fn apply_pending_seek(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        let Some(pending) = self.seek_state.pending else {
            return;
        };

        // Setting the same position again may lead some browsers to send unexpected `pause`
        // events when the playback rate is at `0`.
        if media.current_time() == pending.time {
            self.seek_state.pending = None;
            return;
        }

        let position = if pending.stick_to_buffered {
            let buffered = media.buffered();
            Logger::lazy_debug(&|| {
                let ranges: Vec<String> = buffered
                    .into_iter()
                    .map(|r| format!("[{}, {}]", r.start(), r.end()))
                    .collect();
                format!("MEC: Sticking {} to buffered {}", pending.time, ranges.join(" "))
            });
            buffered.closest_position(pending.time)
        } else {
            pending.time
        };

        if position.is_finite() {
            Logger::lazy_info(&|| format!("MEC: Seeking to {}", position));
            match media.set_current_time(position) {
                Ok(()) => {}
                Err(SetCurrentTimeError::InvalidState { .. })
                    if media.ready_state() == ReadyState::HaveNothing =>
                {
                    // Some browsers refuse updating the position while the `readyState` is
                    // still at `0`, even once the `MediaSource` is opened.
                    Logger::warn("MEC: Seek refused while not ready, retrying later");
                    let timer_id = self
                        .timers
                        .start(self.configuration.seek_retry_delay, TimerReason::SeekRetry);
                    self.seek_state.retries.push((timer_id, position));
                }
                Err(err) => {
                    Logger::lazy_warn(&|| format!("MEC: Could not seek: {}", err));
                }
            }
        } else {
            Logger::lazy_debug(&|| format!("MEC: Ignoring seek to {}", position));
        }
        self.seek_state.pending = None;
    }

    /// Retry a seek refused by the media element.
    pub(super) fn on_seek_retry_timer(&mut self, id: TimerId) {
        let Some(idx) = self.seek_state.retries.iter().position(|(t, _)| *t == id) else {
            return;
        };
        let (_, position) = self.seek_state.retries.remove(idx);
        if let Some(media) = self.media.as_mut() {
            Logger::lazy_info(&|| format!("MEC: Retrying seek to {}", position));
            if let Err(err) = media.set_current_time(position) {
                Logger::lazy_debug(&|| format!("MEC: Seek retry failed: {}", err));
            }
        }
    }
}
