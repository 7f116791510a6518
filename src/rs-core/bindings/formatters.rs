use crate::utils::time_ranges::TimeRanges;

/// Convert the flat list of `f64` returned by `jsGetBuffered` (couples of start and end, in
/// seconds) into `TimeRanges`.
///
/// A trailing lone value, which should never happen, is ignored.
pub(crate) fn time_ranges_from_js(flat: &[f64]) -> TimeRanges {
    let mut ranges = TimeRanges::new();
    flat.chunks_exact(2).for_each(|pair| ranges.push(pair[0], pair[1]));
    ranges
}

/// Convert `TimeRanges` into a flat list of `f64` for the JavaScript-side: couples of start and
/// end, in seconds.
pub(crate) fn format_time_ranges_for_js(ranges: &TimeRanges) -> Vec<f64> {
    let mut ret = Vec::with_capacity(ranges.len() * 2);
    for range in ranges {
        ret.push(range.start());
        ret.push(range.end());
    }
    ret
}
