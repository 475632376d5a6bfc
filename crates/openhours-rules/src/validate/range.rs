//! Checks for single `HH:MM-HH:MM` range tokens.
//!
//! Syntax and logic are separate predicates so callers can report a
//! malformed token differently from a token whose end precedes its start.

/// Clock fields of a range token exactly as written, before any bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RangeParts {
    pub start_hour: u16,
    pub start_minute: u16,
    pub end_hour: u16,
    pub end_minute: u16,
}

impl RangeParts {
    /// Splits a token shaped like `H(H):MM-H(H):MM`.
    ///
    /// Hours are one or two digits, minutes exactly two. Values are not
    /// range-checked, so `99:99-00:00` splits successfully.
    pub(crate) fn split(token: &str) -> Option<Self> {
        let (start, end) = token.split_once('-')?;
        let (start_hour, start_minute) = split_clock(start)?;
        let (end_hour, end_minute) = split_clock(end)?;

        Some(Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        })
    }

    pub(crate) const fn start_minutes(self) -> u16 {
        self.start_hour * 60 + self.start_minute
    }

    pub(crate) const fn end_minutes(self) -> u16 {
        self.end_hour * 60 + self.end_minute
    }
}

fn split_clock(s: &str) -> Option<(u16, u16)> {
    let (hour, minute) = s.split_once(':')?;

    if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((hour.parse().ok()?, minute.parse().ok()?))
}

/// `24:00` is only meaningful as the end of a range.
const fn clock_in_bounds(hour: u16, minute: u16, is_end: bool) -> bool {
    if minute > 59 {
        return false;
    }
    match hour {
        0..=23 => true,
        24 => is_end && minute == 0,
        _ => false,
    }
}

/// ## Summary
/// Validates the syntax of one range token.
///
/// Accepts `H(H):MM-H(H):MM` with hours in `0..=23` and minutes in `0..=59`.
/// `24:00` is accepted as the end of a range only. Ordering is not checked,
/// so `22:00-02:00` passes.
#[must_use]
pub fn validate_syntax(token: &str) -> bool {
    let Some(parts) = RangeParts::split(token) else {
        tracing::trace!(token, "Range token is malformed");
        return false;
    };

    let valid = clock_in_bounds(parts.start_hour, parts.start_minute, false)
        && clock_in_bounds(parts.end_hour, parts.end_minute, true);
    if !valid {
        tracing::trace!(token, "Range token is out of bounds");
    }
    valid
}

/// ## Summary
/// Validates the ordering of one range token.
///
/// An end before the start is treated as a possible midnight overflow and
/// accepted; whether overflow is allowed is up to the caller. Zero-length
/// ranges are rejected.
///
/// Uses a looser pattern than [`validate_syntax`] and does not check bounds,
/// so run that first.
#[must_use]
pub fn validate_logic(token: &str) -> bool {
    let Some(parts) = RangeParts::split(token) else {
        return false;
    };

    let start = parts.start_minutes();
    let end = parts.end_minutes();

    if end < start {
        // Crosses midnight
        return true;
    }

    start < end
}
