use std::fmt;

use crate::{bindings::MediaEvent, wasm_bindgen};

/// Identify the `readyState` of an HTMLMediaElement, that is how much of its data pipeline has
/// become usable.
///
/// Values are ordered: a media element at `HaveFutureData` also has metadata, current data etc.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadyState {
    /// Corresponds to the `HAVE_NOTHING` readyState.
    HaveNothing = 0,
    /// Corresponds to the `HAVE_METADATA` readyState.
    HaveMetadata = 1,
    /// Corresponds to the `HAVE_CURRENT_DATA` readyState.
    HaveCurrentData = 2,
    /// Corresponds to the `HAVE_FUTURE_DATA` readyState.
    HaveFutureData = 3,
    /// Corresponds to the `HAVE_ENOUGH_DATA` readyState.
    HaveEnoughData = 4,
}

impl ReadyState {
    /// Convert the numeric value of `HTMLMediaElement.prototype.readyState` into a `ReadyState`.
    ///
    /// Returns `None` for any value outside of `0` to `4`.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ReadyState::HaveNothing),
            1 => Some(ReadyState::HaveMetadata),
            2 => Some(ReadyState::HaveCurrentData),
            3 => Some(ReadyState::HaveFutureData),
            4 => Some(ReadyState::HaveEnoughData),
            _ => None,
        }
    }

    /// Event sent by the HTMLMediaElement when it first reaches that `ReadyState`.
    ///
    /// `None` for `HaveNothing`, which is never "reached".
    pub fn event(self) -> Option<MediaEvent> {
        match self {
            ReadyState::HaveNothing => None,
            ReadyState::HaveMetadata => Some(MediaEvent::LoadedMetadata),
            ReadyState::HaveCurrentData => Some(MediaEvent::LoadedData),
            ReadyState::HaveFutureData => Some(MediaEvent::CanPlay),
            ReadyState::HaveEnoughData => Some(MediaEvent::CanPlayThrough),
        }
    }
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReadyState::HaveNothing => "HAVE_NOTHING",
                ReadyState::HaveMetadata => "HAVE_METADATA",
                ReadyState::HaveCurrentData => "HAVE_CURRENT_DATA",
                ReadyState::HaveFutureData => "HAVE_FUTURE_DATA",
                ReadyState::HaveEnoughData => "HAVE_ENOUGH_DATA",
            }
        )
    }
}
