use std::slice::Iter;

/// Represent a range of time, from a start to an end, generally in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    pub(crate) fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns the start time of the range
    pub(crate) fn start(&self) -> f64 {
        self.start
    }

    /// Returns the end time of the range
    pub(crate) fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` if `pos` is inside that range, both bounds included.
    pub(crate) fn contains(&self, pos: f64) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// Abstracts non-contiguous ranges of time, generally expressed in seconds, as reported by a
/// media element's `buffered` attribute.
///
/// Ranges are kept in the order in which they were given: no sorting or merging is performed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TimeRanges {
    ranges: Vec<TimeRange>,
}

impl TimeRanges {
    /// Create a new empty `TimeRanges` object
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a `TimeRanges` object from `(start, end)` couples.
    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            ranges: pairs.iter().map(|(s, e)| TimeRange::new(*s, *e)).collect(),
        }
    }

    /// Add a range of time at the end of that `TimeRanges` object.
    pub(crate) fn push(&mut self, start: f64, end: f64) {
        self.ranges.push(TimeRange::new(start, end));
    }

    /// Returns the number of non-contiguous ranges in this `TimeRanges` object
    pub(crate) fn len(&self) -> usize {
        self.ranges.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the position the closest to `pos` which is buffered.
    ///
    /// `pos` is returned as is if it is already inside a range or if there's no range.
    /// Otherwise, the nearest range boundary is returned. On equal distances, the boundary
    /// found first wins, ranges being considered in order and the start of a range being
    /// considered before its end.
    pub(crate) fn closest_position(&self, pos: f64) -> f64 {
        let mut closest_pos = pos;
        let mut closest_distance = f64::INFINITY;
        for range in self {
            if range.contains(pos) {
                return pos;
            }
            for bound in [range.start, range.end] {
                let distance = (bound - pos).abs();
                if distance < closest_distance {
                    closest_distance = distance;
                    closest_pos = bound;
                }
            }
        }
        closest_pos
    }
}

impl<'a> IntoIterator for &'a TimeRanges {
    type Item = &'a TimeRange;

    type IntoIter = Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_position_between_ranges() {
        let buffered = TimeRanges::from_pairs(&[(0., 5.), (10., 15.)]);
        assert_eq!(buffered.closest_position(7.), 5.);
        assert_eq!(buffered.closest_position(9.), 10.);
        assert_eq!(buffered.closest_position(20.), 15.);
    }

    #[test]
    fn test_closest_position_inside_range() {
        let buffered = TimeRanges::from_pairs(&[(0., 5.), (10., 15.)]);
        assert_eq!(buffered.closest_position(12.), 12.);
        assert_eq!(buffered.closest_position(10.), 10.);
        assert_eq!(buffered.closest_position(5.), 5.);
    }

    #[test]
    fn test_closest_position_without_range() {
        let buffered = TimeRanges::new();
        assert_eq!(buffered.closest_position(42.), 42.);
        assert!(buffered.closest_position(f64::NAN).is_nan());
    }

    #[test]
    fn test_closest_position_ties() {
        // Equidistant from the end of the first range and the start of the second one
        let buffered = TimeRanges::from_pairs(&[(0., 5.), (9., 15.)]);
        assert_eq!(buffered.closest_position(7.), 5.);

        // Same, but with unordered ranges: first found wins
        let buffered = TimeRanges::from_pairs(&[(9., 15.), (0., 5.)]);
        assert_eq!(buffered.closest_position(7.), 9.);

        // A range start is considered before its end
        let buffered = TimeRanges::from_pairs(&[(10., 10.)]);
        assert_eq!(buffered.closest_position(11.), 10.);
    }

    #[test]
    fn test_ranges_keep_their_order() {
        let mut buffered = TimeRanges::new();
        assert!(buffered.is_empty());
        buffered.push(20., 30.);
        buffered.push(0., 10.);
        assert_eq!(buffered.len(), 2);
        let starts: Vec<f64> = buffered.into_iter().map(|r| r.start()).collect();
        assert_eq!(starts, vec![20., 0.]);
        assert_eq!(buffered.closest_position(12.), 10.);
    }
}
