use crate::wasm_bindgen;
use std::fmt;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration` argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since with
    // the `TimerId` returned by this function, the `on_timer_ended` method of the
    // `Dispatcher` will be called with both the corresponding `TimerId` and `reason`.
    pub fn jsTimer(duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(id: TimerId);

    // Returns the current `readyState` attribute of the attached HTMLMediaElement.
    pub fn jsGetMediaReadyState() -> u8;

    // Returns the current `currentTime` attribute of the attached HTMLMediaElement.
    pub fn jsGetCurrentTime() -> f64;

    // Set the `currentTime` attribute of the attached HTMLMediaElement.
    //
    // Some browsers throw when doing that while the `readyState` is still at `0`, this is
    // reported through the returned `SetCurrentTimeResult`.
    pub fn jsSetCurrentTime(position: f64) -> SetCurrentTimeResult;

    // Returns the current `playbackRate` attribute of the attached HTMLMediaElement.
    pub fn jsGetPlaybackRate() -> f64;

    // Method called to change the playback rate (speed of playback).
    pub fn jsSetPlaybackRate(playbackRate: f64);

    pub fn jsIsPaused() -> bool;
    pub fn jsIsSeeking() -> bool;
    pub fn jsIsEnded() -> bool;

    // Get the content of what has been buffered by the HTMLMediaElement, in terms of
    // contiguous time ranges, in seconds.
    //
    // The returned vectors should always have an even length as it is organized by couples
    // of f64: the first of which is the start of the contiguous range in seconds and the
    // second the end.
    pub fn jsGetBuffered() -> Vec<f64>;

    // Begin listening to the given event on the attached HTMLMediaElement.
    //
    // Each time that event is received, the `on_media_event` method of the `Dispatcher`
    // will be called with the `ListenerId` returned here, until
    // `jsRemoveMediaEventListener` is called with it.
    pub fn jsAddMediaEventListener(event: MediaEvent) -> ListenerId;

    // Stop a listener registered through `jsAddMediaEventListener`.
    pub fn jsRemoveMediaEventListener(listener_id: ListenerId);

    // Dispatch a synthetic event with the given name on the attached HTMLMediaElement.
    //
    // The corresponding listeners may call back into the `Dispatcher`, the JavaScript-side
    // should thus perform the dispatch asynchronously (e.g. in a microtask).
    pub fn jsDispatchMediaEvent(event: MediaEvent);

    // Call the `HTMLMediaElement.prototype.play` API.
    //
    // If the returned Promise rejects, the `on_play_rejected` method of the `Dispatcher`
    // will be called asynchronously.
    pub fn jsPlay();

    // Call the `HTMLMediaElement.prototype.pause` API.
    pub fn jsPause();

    pub fn jsSetAutoplay(autoplay: bool);

    // Set the `preload` attribute of the attached HTMLMediaElement to "auto".
    pub fn jsSetPreloadAuto();

    // Update the `src` attribute of the attached HTMLMediaElement.
    //
    // If `None`, the attribute is removed and the media element is re-loaded.
    pub fn jsSetSource(src: Option<String>);

    pub fn jsGetSource() -> Option<String>;

    // Announce that a `play` call has been refused by the browser, generally due to
    // autoplay policies.
    pub fn jsAnnouncePlaybackNotAllowed();
}

/// Trait allowing to convert "JavaScript Results" as exposed by the JavaScript functions into
/// `Result` structs more idiomatic to Rust.
pub(crate) trait JsResult<T, E> {
    fn result(self) -> Result<T, (E, Option<String>)>;
}

/// Errors that can arise when calling the `jsSetCurrentTime` JavaScript function.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetCurrentTimeErrorCode {
    /// An `InvalidStateError` DOMException was thrown, generally because the media element's
    /// `readyState` was still at `0`.
    InvalidStateError,

    /// An unknown error happened.
    UnknownError,
}

/// Result of calling the `jsSetCurrentTime` JavaScript function.
///
/// Creation of a `SetCurrentTimeResult` should only be performed by the JavaScript side
/// through the exposed static constructors.
#[wasm_bindgen]
pub struct SetCurrentTimeResult {
    error: Option<(SetCurrentTimeErrorCode, Option<String>)>,
}

#[wasm_bindgen]
impl SetCurrentTimeResult {
    /// Creates a `SetCurrentTimeResult` indicating success.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn success() -> Self {
        Self { error: None }
    }

    /// Creates a `SetCurrentTimeResult` indicating failure, with the corresponding
    /// error.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn error(err: SetCurrentTimeErrorCode, desc: Option<String>) -> Self {
        Self {
            error: Some((err, desc)),
        }
    }
}

impl JsResult<(), SetCurrentTimeErrorCode> for SetCurrentTimeResult {
    /// Basically unwrap and consume the `SetCurrentTimeResult`, converting it into a
    /// Result enum.
    fn result(self) -> Result<(), (SetCurrentTimeErrorCode, Option<String>)> {
        if let Some(err) = self.error {
            Err(err)
        } else {
            Ok(())
        }
    }
}

/// Reason communicated by the JavaScript-side when the Promise returned by
/// `HTMLMediaElement.prototype.play` rejected.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayErrorCode {
    /// The rejection was a `NotAllowedError`, generally due to autoplay policies.
    NotAllowedError,

    /// Any other rejection.
    UnknownError,
}

/// "Reason" associated to a timer started by the `Dispatcher`.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The timer is linked to a seek which failed because the media element was not ready
    /// yet and which has to be retried.
    SeekRetry = 0,
}

/// Events listened to or dispatched on the HTMLMediaElement.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    LoadedMetadata = 0,
    LoadedData = 1,
    CanPlay = 2,
    CanPlayThrough = 3,
    Playing = 4,
    Waiting = 5,
}

impl MediaEvent {
    /// Name of the corresponding DOM event.
    pub fn name(self) -> &'static str {
        match self {
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::LoadedData => "loadeddata",
            MediaEvent::CanPlay => "canplay",
            MediaEvent::CanPlayThrough => "canplaythrough",
            MediaEvent::Playing => "playing",
            MediaEvent::Waiting => "waiting",
        }
    }
}

impl fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Identify a pending timer.
pub type TimerId = f64;

/// Identify an event listener registered on the HTMLMediaElement.
pub type ListenerId = u32;

/// Type of media a stall can be linked to.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Audio = 0,
    Video = 1,
}

impl fmt::Display for MediaType {
    /// When wanting to display the value, just format Audio as "audio" and
    /// Video as "video"
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MediaType::Audio => "audio",
                MediaType::Video => "video",
            }
        )
    }
}
