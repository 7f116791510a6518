use super::{MediaElement, MediaElementController, PlayError, PlayerSignal, Timers};
use crate::Logger;

impl<M: MediaElement, T: Timers> MediaElementController<M, T> {
    /// Ask the media element to play.
    ///
    /// `autoplay` is also set so playback begins by itself once a new content is loaded.
    pub(crate) fn play(&mut self) {
        if let Some(media) = self.media.as_mut() {
            media.set_autoplay(true);
            media.play();
        }
    }

    /// Pause the media element and disable its `autoplay`.
    pub(crate) fn pause(&mut self) {
        if let Some(media) = self.media.as_mut() {
            media.pause();
            media.set_autoplay(false);
        }
    }

    /// To call when a `play` call has been refused by the media element.
    ///
    /// The refusal is not an error from our point of view. A
    /// `PlayerSignal::PlaybackNotAllowed` signal is sent if it was due to autoplay policies.
    pub(crate) fn on_play_rejected(&mut self, err: PlayError) {
        Logger::lazy_warn(&|| format!("MEC: Caught pending play exception - continuing ({})", err));
        if let PlayError::NotAllowed { .. } = err {
            self.signals.push_back(PlayerSignal::PlaybackNotAllowed);
        }
    }
}
