use std::collections::VecDeque;

use super::{
    MediaElement, MediaElementConfiguration, MediaElementController, ReadyState,
    SetCurrentTimeError, Timers,
};
use crate::bindings::{ListenerId, MediaEvent, TimerId, TimerReason};
use crate::utils::time_ranges::TimeRanges;

/// In-memory `MediaElement` recording what was done on it.
#[derive(Debug)]
pub(crate) struct FakeMediaElement {
    pub(crate) ready_state: ReadyState,
    pub(crate) current_time: f64,
    pub(crate) playback_rate: f64,
    pub(crate) paused: bool,
    pub(crate) seeking: bool,
    pub(crate) ended: bool,
    pub(crate) buffered: TimeRanges,
    pub(crate) autoplay: bool,
    pub(crate) preload_auto: bool,
    pub(crate) source: Option<String>,

    /// Errors returned, in order, by the next `set_current_time` calls.
    pub(crate) set_current_time_errors: VecDeque<SetCurrentTimeError>,
    /// Positions successfully set through `set_current_time`.
    pub(crate) set_times: Vec<f64>,
    /// Values given to `set_playback_rate`.
    pub(crate) rate_history: Vec<f64>,
    /// Synthetic events dispatched.
    pub(crate) dispatched: Vec<MediaEvent>,
    pub(crate) play_count: u32,
    pub(crate) pause_count: u32,
    /// Number of times the media element was re-loaded after its source was removed.
    pub(crate) load_count: u32,

    listeners: Vec<(ListenerId, MediaEvent)>,
    next_listener_id: ListenerId,
}

impl FakeMediaElement {
    pub(crate) fn new() -> Self {
        Self {
            ready_state: ReadyState::HaveNothing,
            current_time: 0.,
            playback_rate: 1.,
            paused: true,
            seeking: false,
            ended: false,
            buffered: TimeRanges::new(),
            autoplay: false,
            preload_auto: false,
            source: None,
            set_current_time_errors: VecDeque::new(),
            set_times: vec![],
            rate_history: vec![],
            dispatched: vec![],
            play_count: 0,
            pause_count: 0,
            load_count: 0,
            listeners: vec![],
            next_listener_id: 0,
        }
    }

    /// Listeners currently registered for `event`, in registration order.
    pub(crate) fn listeners_for(&self, event: MediaEvent) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, e)| *e == event)
            .map(|(id, _)| *id)
            .collect()
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl MediaElement for FakeMediaElement {
    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, time: f64) -> Result<(), SetCurrentTimeError> {
        if let Some(err) = self.set_current_time_errors.pop_front() {
            return Err(err);
        }
        self.current_time = time;
        self.set_times.push(time);
        Ok(())
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
        self.rate_history.push(rate);
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn seeking(&self) -> bool {
        self.seeking
    }

    fn ended(&self) -> bool {
        self.ended
    }

    fn buffered(&self) -> TimeRanges {
        self.buffered.clone()
    }

    fn add_event_listener(&mut self, event: MediaEvent) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, event));
        id
    }

    fn remove_event_listener(&mut self, listener_id: ListenerId) {
        self.listeners.retain(|(id, _)| *id != listener_id);
    }

    fn dispatch_event(&mut self, event: MediaEvent) {
        self.dispatched.push(event);
    }

    fn play(&mut self) {
        self.play_count += 1;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.pause_count += 1;
        self.paused = true;
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    fn set_preload_auto(&mut self) {
        self.preload_auto = true;
    }

    fn set_source(&mut self, src: Option<&str>) {
        match src {
            Some(src) => self.source = Some(src.to_string()),
            None => {
                self.source = None;
                self.load_count += 1;
            }
        }
    }

    fn source(&self) -> Option<String> {
        self.source.clone()
    }
}

/// `Timers` implementation which never elapses by itself.
#[derive(Debug, Default)]
pub(crate) struct FakeTimers {
    next_id: TimerId,
    /// Started timers, with their duration and reason.
    pub(crate) started: Vec<(TimerId, f64, TimerReason)>,
    pub(crate) cleared: Vec<TimerId>,
}

impl Timers for FakeTimers {
    fn start(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        self.next_id += 1.;
        self.started.push((self.next_id, duration, reason));
        self.next_id
    }

    fn clear(&mut self, id: TimerId) {
        self.cleared.push(id);
    }
}

pub(crate) fn new_controller() -> MediaElementController<FakeMediaElement, FakeTimers> {
    MediaElementController::new(FakeTimers::default(), MediaElementConfiguration::default())
}

/// Report every event currently listened to for `event` to the controller, as the browser
/// would.
pub(crate) fn fire_event(
    mec: &mut MediaElementController<FakeMediaElement, FakeTimers>,
    event: MediaEvent,
) {
    let listeners = match mec.media_element() {
        Some(media) => media.listeners_for(event),
        None => return,
    };
    for listener_id in listeners {
        mec.on_media_event(listener_id, event);
    }
}

/// Move the `readyState` up to `target`, sending the events of each crossed level in order.
pub(crate) fn advance_ready_state(
    mec: &mut MediaElementController<FakeMediaElement, FakeTimers>,
    target: ReadyState,
) {
    let Some(media) = mec.media_element_mut() else {
        return;
    };
    let previous = media.ready_state;
    media.ready_state = target;
    for level in [
        ReadyState::HaveMetadata,
        ReadyState::HaveCurrentData,
        ReadyState::HaveFutureData,
        ReadyState::HaveEnoughData,
    ] {
        if level <= previous || level > target {
            continue;
        }
        if let Some(event) = level.event() {
            fire_event(mec, event);
        }
    }
}
