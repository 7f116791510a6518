use super::{MediaElement, ReadyState};
use crate::bindings::{ListenerId, MediaEvent};

/// Category of operation awaiting a `readyState`.
///
/// At most one operation per `WaitKind` can be awaiting at any time: registering a new one
/// cancels the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WaitKind {
    /// A seek waiting for the media element's metadata.
    SeekApply,
    /// The playback rate restoration at the end of a stall.
    StallResume,
    /// A playback rate update asked through the API.
    PlaybackRate,
}

/// Operation to perform once a `readyState` has been reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DeferredAction {
    /// Perform the currently pending seek.
    ApplySeek,
    /// Set the playback rate to the given value.
    ApplyPlaybackRate(f64),
    /// Set the playback rate back to `rate` after a stall and announce that playback resumed.
    ResumeAfterStall { rate: f64 },
}

/// Operation registered in the `ReadinessGate`, waiting for the media element to send the
/// event linked to its `target` `ReadyState`.
#[derive(Clone, Debug)]
struct PendingWait {
    kind: WaitKind,
    target: ReadyState,
    event: MediaEvent,
    action: DeferredAction,
    listener_id: ListenerId,
}

/// Describes an operation now awaiting in the `ReadinessGate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PendingWaitHandle {
    pub(crate) kind: WaitKind,
    pub(crate) action: DeferredAction,
    pub(crate) event: MediaEvent,
}

/// Response of `ReadinessGate::wait_for`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum WaitOutcome {
    /// The `readyState` is already reached: the action should be run right away.
    Immediate(DeferredAction),
    /// The action now awaits the media element's event.
    Pending(PendingWaitHandle),
    /// There's no media element, the action has been dropped.
    NoMediaElement,
}

/// Keeps operations which can only be performed once the media element reached a given
/// `ReadyState`.
///
/// The `ReadinessGate` only keeps track of those operations and of the event listeners linked
/// to them. Running the actions is left to its owner.
#[derive(Debug, Default)]
pub(crate) struct ReadinessGate {
    waits: Vec<PendingWait>,
}

impl ReadinessGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register `action` under `kind`, to run once `media` reaches the `target` `ReadyState`.
    ///
    /// Any action previously registered under the same `kind` is cancelled first.
    ///
    /// If `target` is already reached, nothing is registered and `WaitOutcome::Immediate` is
    /// returned with the action, which should then be run synchronously by the caller.
    pub(crate) fn wait_for<M: MediaElement>(
        &mut self,
        mut media: Option<&mut M>,
        target: ReadyState,
        kind: WaitKind,
        action: DeferredAction,
    ) -> WaitOutcome {
        self.cancel(media.as_deref_mut(), kind);
        let Some(media) = media else {
            return WaitOutcome::NoMediaElement;
        };
        if media.ready_state() >= target {
            return WaitOutcome::Immediate(action);
        }
        let Some(event) = target.event() else {
            return WaitOutcome::Immediate(action);
        };
        let listener_id = media.add_event_listener(event);
        self.waits.push(PendingWait {
            kind,
            target,
            event,
            action,
            listener_id,
        });
        WaitOutcome::Pending(PendingWaitHandle {
            kind,
            action,
            event,
        })
    }

    /// Cancel the action registered under `kind`, if one, so that it will never be run.
    ///
    /// Returns `true` if an action was cancelled.
    pub(crate) fn cancel<M: MediaElement>(&mut self, media: Option<&mut M>, kind: WaitKind) -> bool {
        self.take_pending(media, kind).is_some()
    }

    /// Cancel the action registered under `kind`, if one, and return it so the caller can
    /// decide what to do with it instead.
    pub(crate) fn take_pending<M: MediaElement>(
        &mut self,
        media: Option<&mut M>,
        kind: WaitKind,
    ) -> Option<DeferredAction> {
        let idx = self.waits.iter().position(|w| w.kind == kind)?;
        let wait = self.waits.remove(idx);
        if let Some(media) = media {
            media.remove_event_listener(wait.listener_id);
        }
        Some(wait.action)
    }

    /// To call when the event behind `listener_id` has been received.
    ///
    /// If an action was awaiting it, its listener is removed and the action is returned, so
    /// it can be run. `None` if nothing (anymore) awaits that listener.
    pub(crate) fn take_triggered<M: MediaElement>(
        &mut self,
        media: Option<&mut M>,
        listener_id: ListenerId,
    ) -> Option<DeferredAction> {
        let idx = self.waits.iter().position(|w| w.listener_id == listener_id)?;
        let wait = self.waits.remove(idx);
        if let Some(media) = media {
            media.remove_event_listener(wait.listener_id);
        }
        debug_assert!(wait.target.event() == Some(wait.event));
        Some(wait.action)
    }

    /// Returns the event awaited by the action registered under `kind`, if one.
    #[cfg(test)]
    pub(crate) fn awaited_event(&self, kind: WaitKind) -> Option<MediaEvent> {
        self.waits.iter().find(|w| w.kind == kind).map(|w| w.event)
    }

    /// Cancel all registered actions.
    pub(crate) fn clear<M: MediaElement>(&mut self, mut media: Option<&mut M>) {
        for wait in self.waits.drain(..) {
            if let Some(media) = media.as_deref_mut() {
                media.remove_event_listener(wait.listener_id);
            }
        }
    }
}
