//! Overlap detection between the ranges of a single day.

use super::range::RangeParts;

/// ## Summary
/// Returns true if any two ranges of one day overlap.
///
/// Ranges are sorted by start and only neighbours are compared. Touching
/// ranges (`09:00-12:00`, `12:00-15:00`) do not overlap. A pair is skipped
/// when either side crosses midnight, and tokens that fail to parse are
/// ignored rather than reported here.
///
/// For plain ranges any overlap shows up between some pair of neighbours
/// once sorted. An overflow range sorted between two overlapping ranges
/// breaks that chain, and the overlap goes unreported.
#[must_use]
pub fn has_overlap<S: AsRef<str>>(ranges: &[S]) -> bool {
    if ranges.len() < 2 {
        return false;
    }

    let mut parsed: Vec<(u16, u16)> = ranges
        .iter()
        .filter_map(|range| RangeParts::split(range.as_ref()))
        .map(|parts| (parts.start_minutes(), parts.end_minutes()))
        .collect();

    parsed.sort_by_key(|&(start, _)| start);

    parsed.windows(2).any(|pair| {
        let &[(current_start, current_end), (next_start, next_end)] = pair else {
            return false;
        };

        if current_end <= current_start || next_end <= next_start {
            return false;
        }

        current_end > next_start
    })
}
