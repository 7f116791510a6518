use crate::{
    bindings::{formatters::format_time_ranges_for_js, JsMediaElement, JsTimers, MediaType},
    media_element::{
        MediaElementConfiguration, MediaElementController, MediaElementKind, ReadyState,
        SyntheticStallConfiguration,
    },
    utils::logger::LoggerLevel,
    wasm_bindgen, JsError, Logger,
};

use super::Dispatcher;

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which as its name point at, should be called when particular
/// events happen. Such "event_listeners" are defined in its own file.
#[wasm_bindgen]
impl Dispatcher {
    /// Create a new `Dispatcher`, with no HTMLMediaElement linked to it yet.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Dispatcher {
            media_element: MediaElementController::new(
                JsTimers,
                MediaElementConfiguration::default(),
            ),
        }
    }

    /// Link the HTMLMediaElement now referenced on the JavaScript-side.
    ///
    /// # Arguments
    ///
    /// * `node_name` - The `nodeName` of that element. Only "VIDEO" and "AUDIO" elements are
    ///   accepted, an error is thrown for anything else.
    pub fn attach_media_element(&mut self, node_name: &str) -> Result<(), JsError> {
        let kind = match MediaElementKind::from_node_name(node_name) {
            Ok(kind) => kind,
            Err(err) => {
                Logger::lazy_error(&|| format!("Could not attach media element: {}", err));
                return Err(err.into());
            }
        };
        Logger::lazy_info(&|| format!("Attaching {:?} media element", kind));
        self.media_element.set_media_element(Some(JsMediaElement));
        Ok(())
    }

    /// Unlink the current HTMLMediaElement, if one.
    pub fn detach_media_element(&mut self) {
        if self.media_element.has_media_element() {
            Logger::info("Detaching media element");
            self.media_element.set_media_element(None);
        }
    }

    /// Begin reacting to the HTMLMediaElement's events.
    pub fn start(&mut self) {
        self.media_element.start();
    }

    /// Cancel every pending operation and forget known stalls.
    pub fn stop(&mut self) {
        self.media_element.stop();
    }

    /// Seek to `position`, in seconds, once the HTMLMediaElement has loaded its metadata.
    ///
    /// If `stick_to_buffered` is set, the position is moved to the closest buffered one when
    /// the seek is performed.
    pub fn seek(&mut self, position: f64, stick_to_buffered: bool) {
        self.media_element.set_current_time(position, stick_to_buffered);
    }

    /// Returns the wanted position in seconds, which is the one of a not yet performed seek
    /// if one. `None` if no HTMLMediaElement is linked.
    pub fn current_time(&self) -> Option<f64> {
        self.media_element.current_time()
    }

    pub fn is_seeking(&self) -> Option<bool> {
        self.media_element.is_seeking()
    }

    /// Update the playback rate once the HTMLMediaElement can play, or right away if
    /// `ignore_ready_state` is set.
    pub fn set_playback_rate(&mut self, rate: f64, ignore_ready_state: bool) {
        self.media_element.set_playback_rate(rate, ignore_ready_state);
    }

    pub fn playback_rate(&self) -> Option<f64> {
        self.media_element.playback_rate()
    }

    /// Announce that media data for `media_type` started or stopped lacking.
    ///
    /// A `None` `media_type` is ignored.
    pub fn set_stall_state(&mut self, media_type: Option<MediaType>, is_stalled: bool) {
        self.media_element.set_stall_state(media_type, is_stalled);
    }

    pub fn is_stalled(&self) -> bool {
        self.media_element.is_stalled()
    }

    pub fn play(&mut self) {
        self.media_element.play();
    }

    pub fn pause(&mut self) {
        self.media_element.pause();
    }

    pub fn is_paused(&self) -> Option<bool> {
        self.media_element.is_paused()
    }

    pub fn is_ended(&self) -> Option<bool> {
        self.media_element.is_ended()
    }

    pub fn ready_state(&self) -> Option<ReadyState> {
        self.media_element.ready_state()
    }

    /// Returns the buffered ranges as couples of start and end, in seconds.
    pub fn buffered(&self) -> Option<Vec<f64>> {
        self.media_element.buffered().map(|b| format_time_ranges_for_js(&b))
    }

    /// Set the source of the HTMLMediaElement, or remove it if `None`.
    pub fn set_source(&mut self, src: Option<String>) {
        self.media_element.set_source(src.as_deref());
    }

    pub fn source(&self) -> Option<String> {
        self.media_element.source()
    }

    /// Configure the "synthetic stall events" mechanism.
    ///
    /// # Arguments
    ///
    /// * `enabled` - If `true`, playback is soft-paused during stalls by setting the playback
    ///   rate to `0`, and `waiting` and `playing` events are sent.
    ///
    /// * `ignore_ready_state` - If `true`, those updates are performed regardless of the
    ///   HTMLMediaElement's `readyState`.
    pub fn set_synthetic_stall_events(&mut self, enabled: bool, ignore_ready_state: bool) {
        self.media_element.configuration_mut().synthetic_stall_events =
            SyntheticStallConfiguration {
                enabled,
                ignore_ready_state,
            };
    }

    /// Delay in milliseconds before retrying a seek refused because the HTMLMediaElement was
    /// not ready.
    pub fn set_seek_retry_delay(&mut self, delay: f64) {
        self.media_element.configuration_mut().seek_retry_delay = delay;
    }

    pub fn set_log_level(&mut self, level: LoggerLevel) {
        Logger::set_logger_level(level);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
