//! Validation of opening hours input.
//!
//! The single-token predicates never fail; [`validate_day`] and
//! [`validate_schedule`] turn their answers into [`ValidationError`]s.

mod exceptions;
mod overlap;
mod range;

use std::fmt;

pub use exceptions::{validate_date_key, validate_exceptions};
pub use overlap::has_overlap;
pub(crate) use range::RangeParts;
pub use range::{validate_logic, validate_syntax};

use crate::error::ValidationError;
use crate::model::{FieldValue, OpeningHoursData};

/// Field name used for errors on the exceptions map.
pub const EXCEPTIONS_FIELD: &str = "exceptions";

/// ## Summary
/// Validates one day's input and returns its normalized tokens.
///
/// Each token is checked for syntax, then logic; the first failing token is
/// reported. Overlap is checked once for the whole day. Empty input means
/// closed and yields no tokens.
///
/// ## Errors
/// Returns the first [`ValidationError`] found.
pub fn validate_day(value: &FieldValue) -> Result<Vec<String>, ValidationError> {
    validate_tokens(value.tokens())
}

/// ## Summary
/// Validates already-split range tokens for one day.
///
/// ## Errors
/// Returns the first [`ValidationError`] found.
pub fn validate_tokens(tokens: Vec<String>) -> Result<Vec<String>, ValidationError> {
    for token in &tokens {
        if !validate_syntax(token) {
            return Err(ValidationError::InvalidFormat(token.clone()));
        }
        if !validate_logic(token) {
            tracing::trace!(token, "Range token has invalid ordering");
            return Err(ValidationError::InvalidLogic(token.clone()));
        }
    }

    if has_overlap(&tokens) {
        tracing::trace!(?tokens, "Ranges overlap");
        return Err(ValidationError::Overlapping);
    }

    Ok(tokens)
}

/// ## Summary
/// Validates a stored schedule field by field.
///
/// ## Errors
/// Returns every failing field with its first error.
pub fn validate_schedule(data: &OpeningHoursData) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for (day, ranges) in data.weekly.days() {
        if let Err(err) = validate_tokens(ranges.to_vec()) {
            errors.push(day.as_str(), err);
        }
    }

    if !validate_exceptions(&data.exceptions) {
        errors.push(EXCEPTIONS_FIELD, ValidationError::InvalidExceptions);
    }

    errors.into_result()
}

/// Validation errors keyed by field name, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(String, ValidationError)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, error: ValidationError) {
        self.errors.push((field.into(), error));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, error)| error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors
            .iter()
            .map(|(name, error)| (name.as_str(), error))
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// ## Errors
    /// Returns `self` when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use openhours_core::types::Weekday;

    #[test]
    fn day_empty_is_closed() {
        assert_eq!(validate_day(&FieldValue::from("")), Ok(vec![]));
        assert_eq!(validate_day(&FieldValue::from(" , ")), Ok(vec![]));
    }

    #[test]
    fn day_strips_spaces() {
        let tokens = validate_day(&FieldValue::from("09:00 - 12:00, 14:00-18:00")).unwrap();
        assert_eq!(tokens, vec!["09:00-12:00", "14:00-18:00"]);
    }

    #[test]
    fn day_reports_format_before_logic() {
        let err = validate_day(&FieldValue::from("09:00-09:00,25:00-26:00")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidLogic("09:00-09:00".to_string()));

        let err = validate_day(&FieldValue::from("25:00-26:00,09:00-09:00")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidFormat("25:00-26:00".to_string()));
    }

    #[test]
    fn day_reports_overlap_once() {
        let err =
            validate_day(&FieldValue::from("09:00-13:00,12:00-15:00,14:00-16:00")).unwrap_err();
        assert_eq!(err, ValidationError::Overlapping);
    }

    #[test]
    fn day_accepts_overflow() {
        let tokens = validate_day(&FieldValue::from("18:00-02:00")).unwrap();
        assert_eq!(tokens, vec!["18:00-02:00"]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::InvalidFormat("9-5".to_string()).to_string(),
            "Invalid time range format: 9-5. Use HH:MM-HH:MM format."
        );
        assert_eq!(
            ValidationError::Overlapping.to_string(),
            "Time ranges cannot overlap. Please adjust the times."
        );
    }

    #[test]
    fn schedule_collects_every_field() {
        let mut data = OpeningHoursData::default();
        data.weekly
            .set_day(Weekday::Monday, vec!["09:00-13:00".into(), "12:00-15:00".into()]);
        data.weekly.set_day(Weekday::Tuesday, vec!["09:00-17:00".into()]);
        data.weekly.set_day(Weekday::Friday, vec!["9am-5pm".into()]);
        data.exceptions.insert("2024-13-01", vec![]);

        let errors = validate_schedule(&data).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("monday"), Some(&ValidationError::Overlapping));
        assert_eq!(errors.get("tuesday"), None);
        assert_eq!(
            errors.get("friday"),
            Some(&ValidationError::InvalidFormat("9am-5pm".to_string()))
        );
        assert_eq!(
            errors.get(EXCEPTIONS_FIELD),
            Some(&ValidationError::InvalidExceptions)
        );
    }

    #[test]
    fn schedule_valid() {
        let mut data = OpeningHoursData::default();
        data.weekly.set_day(Weekday::Saturday, vec!["10:00-14:00".into()]);
        data.exceptions.insert("12-25", vec![]);
        assert_eq!(validate_schedule(&data), Ok(()));
    }
}
