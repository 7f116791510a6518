use std::collections::VecDeque;

use thiserror::Error;

use crate::bindings::{ListenerId, MediaEvent, TimerId, TimerReason};
use crate::utils::time_ranges::TimeRanges;
use crate::Logger;

pub(crate) use self::configuration::{MediaElementConfiguration, SyntheticStallConfiguration};
pub use self::ready_state::ReadyState;
use self::readiness_gate::ReadinessGate;
use self::seek::SeekState;
use self::stall::StallRegistry;

mod configuration;
mod playback;
mod playback_rate;
mod readiness_gate;
mod ready_state;
mod seek;
mod stall;

#[cfg(test)]
mod test_utils;

/// Abstraction over the HTMLMediaElement on which the `MediaElementController` acts.
///
/// All of those operations are synchronous. Events listened to through `add_event_listener`
/// are then reported back through the `MediaElementController::on_media_event` method.
pub(crate) trait MediaElement {
    /// Current `readyState` of the media element.
    fn ready_state(&self) -> ReadyState;

    fn current_time(&self) -> f64;

    /// Update the media element's current time, which may fail depending on its state.
    fn set_current_time(&mut self, time: f64) -> Result<(), SetCurrentTimeError>;

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);

    fn paused(&self) -> bool;
    fn seeking(&self) -> bool;
    fn ended(&self) -> bool;

    /// Ranges of media data currently buffered, in the order reported by the media element.
    fn buffered(&self) -> TimeRanges;

    /// Begin listening to `event`. Each time it is received, `on_media_event` should be called
    /// with the returned `ListenerId`, until `remove_event_listener` is called with it.
    fn add_event_listener(&mut self, event: MediaEvent) -> ListenerId;
    fn remove_event_listener(&mut self, listener_id: ListenerId);

    /// Dispatch a synthetic event on the media element, as if it sent it itself.
    fn dispatch_event(&mut self, event: MediaEvent);

    /// Ask the media element to play. A refusal is reported asynchronously through
    /// `MediaElementController::on_play_rejected`.
    fn play(&mut self);
    fn pause(&mut self);

    fn set_autoplay(&mut self, autoplay: bool);

    /// Set the `preload` attribute to "auto".
    fn set_preload_auto(&mut self);

    /// Set the source of the media element, or remove it (and reload) if `None`.
    fn set_source(&mut self, src: Option<&str>);
    fn source(&self) -> Option<String>;
}

/// Abstraction over a timer implementation.
pub(crate) trait Timers {
    /// Starts a timer for `duration` milliseconds. `on_timer_ended` should be called with the
    /// returned `TimerId` and the same `reason` once it elapsed, unless `clear` was called.
    fn start(&mut self, duration: f64, reason: TimerReason) -> TimerId;
    fn clear(&mut self, id: TimerId);
}

/// Signals sent by the `MediaElementController` to whoever is interested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerSignal {
    /// A `play` call was refused, generally due to autoplay policies.
    PlaybackNotAllowed,
}

/// Kind of HTML element a `MediaElementController` can be linked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MediaElementKind {
    Video,
    Audio,
}

impl MediaElementKind {
    /// Obtain the `MediaElementKind` corresponding to an element's `nodeName`, case-insensitively.
    pub(crate) fn from_node_name(node_name: &str) -> Result<Self, AttachMediaElementError> {
        if node_name.eq_ignore_ascii_case("video") {
            Ok(MediaElementKind::Video)
        } else if node_name.eq_ignore_ascii_case("audio") {
            Ok(MediaElementKind::Audio)
        } else {
            Err(AttachMediaElementError::WrongElementType {
                node_name: node_name.to_string(),
            })
        }
    }
}

/// Structure linked to an HTMLMediaElement which allows to perform media-related actions on it
/// once it is ready for them, such as:
///   - seeking, optionally to the closest buffered position
///   - updating the playback rate
///   - soft-pausing playback while media data is lacking ("stalls"), and resuming it
///   - playing and pausing
pub(crate) struct MediaElementController<M: MediaElement, T: Timers> {
    /// The HTMLMediaElement currently linked. `None` if none is attached for now, in which case
    /// most operations do nothing.
    media: Option<M>,

    timers: T,

    configuration: MediaElementConfiguration,

    /// Operations awaiting a given `readyState` before being performed.
    gate: ReadinessGate,

    /// Seek awaiting to be performed, and seeks awaiting to be retried.
    seek_state: SeekState,

    /// Sources of media data starvation currently known.
    stalls: StallRegistry,

    /// Listener on the media element's `playing` event, set while started.
    playing_listener: Option<ListenerId>,

    is_started: bool,

    /// Signals not yet consumed through `take_signals`.
    signals: VecDeque<PlayerSignal>,
}

impl<M: MediaElement, T: Timers> MediaElementController<M, T> {
    /// Create a new `MediaElementController`, with no media element attached to it.
    pub(crate) fn new(timers: T, configuration: MediaElementConfiguration) -> Self {
        Self {
            media: None,
            timers,
            configuration,
            gate: ReadinessGate::new(),
            seek_state: SeekState::new(),
            stalls: StallRegistry::new(),
            playing_listener: None,
            is_started: false,
            signals: VecDeque::new(),
        }
    }

    /// Link a new media element to this `MediaElementController`, or unlink the current one if
    /// `None`.
    ///
    /// Operations awaiting the previous media element's `readyState` are abandoned, including
    /// a seek not yet performed.
    pub(crate) fn set_media_element(&mut self, media: Option<M>) {
        self.gate.clear(self.media.as_mut());
        self.seek_state.abandon_pending();
        if let Some(listener_id) = self.playing_listener.take() {
            if let Some(previous) = self.media.as_mut() {
                previous.remove_event_listener(listener_id);
            }
        }
        self.media = media;
        if let Some(media) = self.media.as_mut() {
            // Some browsers only send the `canplay` event with it
            media.set_preload_auto();
            if self.is_started {
                self.playing_listener = Some(media.add_event_listener(MediaEvent::Playing));
            }
        }
    }

    pub(crate) fn has_media_element(&self) -> bool {
        self.media.is_some()
    }

    #[cfg(test)]
    pub(crate) fn media_element(&self) -> Option<&M> {
        self.media.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn media_element_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn timers(&self) -> &T {
        &self.timers
    }

    pub(crate) fn configuration_mut(&mut self) -> &mut MediaElementConfiguration {
        &mut self.configuration
    }

    /// Begin reacting to the media element's own events.
    pub(crate) fn start(&mut self) {
        if self.is_started {
            return;
        }
        self.is_started = true;
        if let Some(media) = self.media.as_mut() {
            self.playing_listener = Some(media.add_event_listener(MediaEvent::Playing));
        }
    }

    /// Stop reacting to the media element's events and reset this `MediaElementController` to
    /// its initial state: pending operations and timers are cancelled and stalls are forgotten.
    ///
    /// The media element stays attached.
    pub(crate) fn stop(&mut self) {
        Logger::info("MEC: Resetting media element controller");
        self.is_started = false;
        if let Some(listener_id) = self.playing_listener.take() {
            if let Some(media) = self.media.as_mut() {
                media.remove_event_listener(listener_id);
            }
        }
        self.gate.clear(self.media.as_mut());
        for timer_id in self.seek_state.reset() {
            self.timers.clear(timer_id);
        }
        self.stalls.reset();
        self.signals.clear();
    }

    /// Method to call once an event listened to through a `ListenerId` has been received.
    pub(crate) fn on_media_event(&mut self, listener_id: ListenerId, event: MediaEvent) {
        if self.playing_listener == Some(listener_id) {
            self.on_playing();
        } else if let Some(action) = self.gate.take_triggered(self.media.as_mut(), listener_id) {
            Logger::lazy_debug(&|| format!("MEC: \"{}\" received, running awaited action", event));
            self.run_deferred_action(action);
        }
    }

    /// Method to call once a timer started by this `MediaElementController` has elapsed.
    pub(crate) fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        match reason {
            TimerReason::SeekRetry => self.on_seek_retry_timer(id),
        }
    }

    /// Returns and empties the list of signals sent since the last call.
    pub(crate) fn take_signals(&mut self) -> Vec<PlayerSignal> {
        self.signals.drain(..).collect()
    }

    pub(crate) fn is_paused(&self) -> Option<bool> {
        self.media.as_ref().map(|m| m.paused())
    }

    pub(crate) fn is_ended(&self) -> Option<bool> {
        self.media.as_ref().map(|m| m.ended())
    }

    pub(crate) fn ready_state(&self) -> Option<ReadyState> {
        self.media.as_ref().map(|m| m.ready_state())
    }

    pub(crate) fn buffered(&self) -> Option<TimeRanges> {
        self.media.as_ref().map(|m| m.buffered())
    }

    pub(crate) fn set_source(&mut self, src: Option<&str>) {
        if let Some(media) = self.media.as_mut() {
            media.set_source(src);
        }
    }

    pub(crate) fn source(&self) -> Option<String> {
        self.media.as_ref().and_then(|m| m.source())
    }

    /// Run an action which was awaiting a `readyState` (or which could run right away).
    fn run_deferred_action(&mut self, action: readiness_gate::DeferredAction) {
        use readiness_gate::DeferredAction;
        match action {
            DeferredAction::ApplySeek => self.apply_pending_seek(),
            DeferredAction::ApplyPlaybackRate(rate) => {
                if let Some(media) = self.media.as_mut() {
                    media.set_playback_rate(rate);
                }
            }
            DeferredAction::ResumeAfterStall { rate } => self.resume_after_stall(rate),
        }
    }
}

/// Error that may be returned when updating the current time of a media element.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SetCurrentTimeError {
    #[error("InvalidStateError received when setting the current time: {message}")]
    InvalidState { message: String },
    #[error("Uncategorized Error when setting the current time: {message}")]
    UnknownError { message: String },
}

/// Error communicated when a `play` call was refused.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlayError {
    #[error("Playback not allowed: {message}")]
    NotAllowed { message: String },
    #[error("Uncategorized Error when playing: {message}")]
    UnknownError { message: String },
}

/// Error that may be returned when attaching a media element.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AttachMediaElementError {
    #[error("Element is not video or audio DOM type: got \"{node_name}\"")]
    WrongElementType { node_name: String },
}

#[cfg(test)]
mod tests {
    use super::test_utils::{new_controller, FakeMediaElement};
    use super::*;

    #[test]
    fn test_media_element_kind_from_node_name() {
        assert_eq!(
            MediaElementKind::from_node_name("VIDEO"),
            Ok(MediaElementKind::Video)
        );
        assert_eq!(
            MediaElementKind::from_node_name("audio"),
            Ok(MediaElementKind::Audio)
        );
        assert_eq!(
            MediaElementKind::from_node_name("DIV"),
            Err(AttachMediaElementError::WrongElementType {
                node_name: "DIV".to_string()
            })
        );
        assert!(MediaElementKind::from_node_name("videos").is_err());
    }

    #[test]
    fn test_attach_sets_preload() {
        let mut mec = new_controller();
        assert!(!mec.has_media_element());
        mec.set_media_element(Some(FakeMediaElement::new()));
        assert!(mec.has_media_element());
        assert!(mec.media_element().unwrap().preload_auto);
    }

    #[test]
    fn test_accessors_without_media_element() {
        let mut mec = new_controller();
        assert_eq!(mec.is_paused(), None);
        assert_eq!(mec.is_ended(), None);
        assert_eq!(mec.ready_state(), None);
        assert_eq!(mec.buffered(), None);
        assert_eq!(mec.source(), None);
        mec.set_source(Some("blob:foo"));
        assert_eq!(mec.source(), None);
    }

    #[test]
    fn test_source() {
        let mut mec = new_controller();
        mec.set_media_element(Some(FakeMediaElement::new()));
        mec.set_source(Some("blob:foo"));
        assert_eq!(mec.source(), Some("blob:foo".to_string()));
        mec.set_source(None);
        assert_eq!(mec.source(), None);
        assert_eq!(mec.media_element().unwrap().load_count, 1);
    }

    #[test]
    fn test_start_listens_to_playing() {
        let mut mec = new_controller();
        mec.start();
        mec.set_media_element(Some(FakeMediaElement::new()));
        assert_eq!(
            mec.media_element()
                .unwrap()
                .listeners_for(MediaEvent::Playing)
                .len(),
            1
        );
        mec.stop();
        assert!(mec
            .media_element()
            .unwrap()
            .listeners_for(MediaEvent::Playing)
            .is_empty());
    }

    #[test]
    fn test_replacing_media_element_removes_listeners() {
        let mut mec = new_controller();
        mec.set_media_element(Some(FakeMediaElement::new()));
        mec.start();
        mec.set_current_time(10., false);
        assert_eq!(mec.media_element().unwrap().listener_count(), 2);
        assert_eq!(mec.current_time(), Some(10.));
        mec.set_media_element(Some(FakeMediaElement::new()));
        assert_eq!(mec.media_element().unwrap().listener_count(), 1);
        assert_eq!(mec.current_time(), Some(0.));
        assert_eq!(
            mec.media_element()
                .unwrap()
                .listeners_for(MediaEvent::Playing)
                .len(),
            1
        );
    }
}
