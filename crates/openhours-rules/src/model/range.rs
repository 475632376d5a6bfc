use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validate::{RangeParts, validate_syntax};

/// A parsed `HH:MM-HH:MM` range in minutes since midnight.
///
/// `end` may equal [`openhours_core::constants::MINUTES_PER_DAY`] for a range ending at `24:00`. A range
/// whose end is not after its start crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    /// Inclusive.
    pub start: u16,
    /// Exclusive.
    pub end: u16,
}

impl TimeRange {
    /// Parses a token that passes [`validate_syntax`].
    ///
    /// ## Errors
    /// Returns [`ValidationError::InvalidFormat`] for malformed or
    /// out-of-bounds tokens.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        let parts = RangeParts::split(token)
            .filter(|_| validate_syntax(token))
            .ok_or_else(|| ValidationError::InvalidFormat(token.to_string()))?;

        Ok(Self {
            start: parts.start_minutes(),
            end: parts.end_minutes(),
        })
    }

    /// True when the range crosses midnight.
    #[must_use]
    pub const fn is_overflow(self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub const fn is_zero_length(self) -> bool {
        self.end == self.start
    }
}

impl FromStr for TimeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
