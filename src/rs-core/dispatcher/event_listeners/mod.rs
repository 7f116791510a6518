use crate::{
    bindings::{ListenerId, MediaEvent, PlayErrorCode, TimerId, TimerReason},
    dispatcher::Dispatcher,
    media_element::PlayError,
    wasm_bindgen,
};

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl Dispatcher {
    /// The JS code should call this method each time an event listened to through
    /// `jsAddMediaEventListener` is sent by the HTMLMediaElement.
    ///
    /// # Arguments
    ///
    /// * `listener_id` - The identifier returned by `jsAddMediaEventListener`. Events
    ///   received for a removed listener are ignored.
    ///
    /// * `event` - The event received.
    pub fn on_media_event(&mut self, listener_id: ListenerId, event: MediaEvent) {
        self.media_element.on_media_event(listener_id, event);
        self.flush_signals();
    }

    /// The JS code should call this method each time a timer started with the `jsTimer`
    /// function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` returned by `jsTimer` when the timer was started.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer was started.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        self.media_element.on_timer_ended(id, reason);
        self.flush_signals();
    }

    /// The JS code should call this method when the Promise returned by
    /// `HTMLMediaElement.prototype.play` after a `jsPlay` call rejected.
    ///
    /// # Arguments
    ///
    /// * `code` - Category of the rejection.
    ///
    /// * `message` - Message of the rejection, if one.
    pub fn on_play_rejected(&mut self, code: PlayErrorCode, message: Option<String>) {
        self.media_element.on_play_rejected(PlayError::from((code, message)));
        self.flush_signals();
    }
}
