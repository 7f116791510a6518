use crate::{
    bindings::{jsAnnouncePlaybackNotAllowed, JsMediaElement, JsTimers},
    media_element::{MediaElementController, PlayerSignal},
    wasm_bindgen,
};

mod api;
mod event_listeners;

/// The `Dispatcher` is the Interface exported to the JavaScript-side, providing an API to act
/// on the HTMLMediaElement linked to it once it is ready for it.
#[wasm_bindgen]
pub struct Dispatcher {
    /// Performs actions on the HTMLMediaElement, like seeking, updating the playback rate or
    /// handling stalls.
    media_element: MediaElementController<JsMediaElement, JsTimers>,
}

impl Dispatcher {
    /// Communicate to the JavaScript-side the signals sent by the `MediaElementController`
    /// since the last call.
    fn flush_signals(&mut self) {
        for signal in self.media_element.take_signals() {
            match signal {
                PlayerSignal::PlaybackNotAllowed => jsAnnouncePlaybackNotAllowed(),
            }
        }
    }
}
