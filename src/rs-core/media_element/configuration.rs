/// Delay, in milliseconds, after which a seek refused because the media element was not ready
/// yet is retried.
const DEFAULT_SEEK_RETRY_DELAY: f64 = 400.;

/// Configuration of the "synthetic stall events" mechanism, where the `MediaElementController`
/// soft-pauses playback by setting the playback rate to `0` when media data is lacking, and
/// emits itself the corresponding `waiting` and `playing` events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SyntheticStallConfiguration {
    /// If `false`, stalls are only tracked: neither the playback rate nor events are touched.
    pub(crate) enabled: bool,

    /// If `true`, the playback rate is updated when entering or exiting a stall regardless of
    /// the media element's `readyState`.
    ///
    /// If `false`, playback is only halted if the media element is at least at
    /// `HaveFutureData` and it is only resumed once it reaches that `readyState`.
    pub(crate) ignore_ready_state: bool,
}

/// Inner configuration on which the `MediaElementController` relies.
/// Can be updated at any time through its `configuration_mut` method.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MediaElementConfiguration {
    pub(crate) synthetic_stall_events: SyntheticStallConfiguration,

    /// Delay in milliseconds awaited before retrying a seek refused with an
    /// `InvalidStateError` by a media element still at `HaveNothing`.
    pub(crate) seek_retry_delay: f64,
}

impl Default for MediaElementConfiguration {
    fn default() -> Self {
        Self {
            synthetic_stall_events: SyntheticStallConfiguration::default(),
            seek_retry_delay: DEFAULT_SEEK_RETRY_DELAY,
        }
    }
}
