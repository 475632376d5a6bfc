//! Exception map checks: date keys and their range lists.

use super::range::validate_syntax;
use crate::model::{DateKey, Exceptions};

/// ## Summary
/// Validates an exception key.
///
/// Accepts an exact date `YYYY-MM-DD` that exists in the calendar, or a
/// recurring `MM-DD` valid in some year (`02-29` is accepted).
#[must_use]
pub fn validate_date_key(key: &str) -> bool {
    DateKey::parse(key).is_some()
}

/// ## Summary
/// Validates an exceptions map.
///
/// An empty map is valid. Every key must pass [`validate_date_key`] and
/// every range must pass [`validate_syntax`]; an empty range list means
/// closed on that date.
#[must_use]
pub fn validate_exceptions(exceptions: &Exceptions) -> bool {
    exceptions.iter().all(|(key, ranges)| {
        if !validate_date_key(key) {
            tracing::trace!(key, "Exception key is not a valid date");
            return false;
        }
        ranges.iter().all(|range| validate_syntax(range))
    })
}
