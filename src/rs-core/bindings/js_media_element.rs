use super::{
    formatters::time_ranges_from_js,
    js_functions::{
        self, JsResult, ListenerId, MediaEvent, PlayErrorCode, SetCurrentTimeErrorCode, TimerId,
        TimerReason,
    },
};
use crate::{
    media_element::{MediaElement, PlayError, ReadyState, SetCurrentTimeError, Timers},
    utils::time_ranges::TimeRanges,
};

/// `MediaElement` implementation relying on the HTMLMediaElement linked on the
/// JavaScript-side.
#[derive(Debug, Default)]
pub(crate) struct JsMediaElement;

impl MediaElement for JsMediaElement {
    fn ready_state(&self) -> ReadyState {
        ReadyState::from_u8(js_functions::jsGetMediaReadyState())
            .unwrap_or(ReadyState::HaveNothing)
    }

    fn current_time(&self) -> f64 {
        js_functions::jsGetCurrentTime()
    }

    fn set_current_time(&mut self, time: f64) -> Result<(), SetCurrentTimeError> {
        js_functions::jsSetCurrentTime(time)
            .result()
            .map_err(SetCurrentTimeError::from)
    }

    fn playback_rate(&self) -> f64 {
        js_functions::jsGetPlaybackRate()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        js_functions::jsSetPlaybackRate(rate)
    }

    fn paused(&self) -> bool {
        js_functions::jsIsPaused()
    }

    fn seeking(&self) -> bool {
        js_functions::jsIsSeeking()
    }

    fn ended(&self) -> bool {
        js_functions::jsIsEnded()
    }

    fn buffered(&self) -> TimeRanges {
        time_ranges_from_js(&js_functions::jsGetBuffered())
    }

    fn add_event_listener(&mut self, event: MediaEvent) -> ListenerId {
        js_functions::jsAddMediaEventListener(event)
    }

    fn remove_event_listener(&mut self, listener_id: ListenerId) {
        js_functions::jsRemoveMediaEventListener(listener_id)
    }

    fn dispatch_event(&mut self, event: MediaEvent) {
        js_functions::jsDispatchMediaEvent(event)
    }

    fn play(&mut self) {
        js_functions::jsPlay()
    }

    fn pause(&mut self) {
        js_functions::jsPause()
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        js_functions::jsSetAutoplay(autoplay)
    }

    fn set_preload_auto(&mut self) {
        js_functions::jsSetPreloadAuto()
    }

    fn set_source(&mut self, src: Option<&str>) {
        js_functions::jsSetSource(src.map(|s| s.to_string()))
    }

    fn source(&self) -> Option<String> {
        js_functions::jsGetSource()
    }
}

/// `Timers` implementation relying on the JavaScript-side's timers.
#[derive(Debug, Default)]
pub(crate) struct JsTimers;

impl Timers for JsTimers {
    fn start(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        js_functions::jsTimer(duration, reason)
    }

    fn clear(&mut self, id: TimerId) {
        js_functions::jsClearTimer(id)
    }
}

impl From<(SetCurrentTimeErrorCode, Option<String>)> for SetCurrentTimeError {
    fn from((code, message): (SetCurrentTimeErrorCode, Option<String>)) -> Self {
        let message = message.unwrap_or_else(|| "Unknown error".to_string());
        match code {
            SetCurrentTimeErrorCode::InvalidStateError => {
                SetCurrentTimeError::InvalidState { message }
            }
            SetCurrentTimeErrorCode::UnknownError => SetCurrentTimeError::UnknownError { message },
        }
    }
}

impl From<(PlayErrorCode, Option<String>)> for PlayError {
    fn from((code, message): (PlayErrorCode, Option<String>)) -> Self {
        let message = message.unwrap_or_else(|| "Unknown error".to_string());
        match code {
            PlayErrorCode::NotAllowedError => PlayError::NotAllowed { message },
            PlayErrorCode::UnknownError => PlayError::UnknownError { message },
        }
    }
}
