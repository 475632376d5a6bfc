//! Opening hours form: layout for editing and validation on submit.

use std::collections::BTreeMap;

use openhours_core::config::DisplayConfig;
use openhours_core::types::Weekday;
use openhours_rules::error::ValidationError;
use openhours_rules::format::messages;
use openhours_rules::model::{Exceptions, FieldValue, OpeningHoursData, hydrate_day};
use openhours_rules::validate::{EXCEPTIONS_FIELD, FieldErrors, validate_day, validate_exceptions};

/// Raw values submitted from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub days: BTreeMap<Weekday, FieldValue>,
    /// Date key and hours, in the order the rows were entered.
    pub exceptions: Vec<(String, FieldValue)>,
    /// `None` when the checkbox was never touched.
    pub overflow: Option<bool>,
}

impl FormInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn day(mut self, day: Weekday, value: impl Into<FieldValue>) -> Self {
        self.days.insert(day, value.into());
        self
    }

    #[must_use]
    pub fn exception(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.exceptions.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn overflow(mut self, overflow: bool) -> Self {
        self.overflow = Some(overflow);
        self
    }
}

/// ## Summary
/// Validates submitted form values and builds the stored shape.
///
/// Each day is normalized and validated on its own; exceptions are
/// normalized to range lists and validated as a whole. An untouched
/// overflow checkbox takes the configured default.
///
/// ## Errors
/// Returns one error per invalid field, keyed by weekday or `exceptions`.
#[tracing::instrument(skip_all, fields(days = input.days.len(), exceptions = input.exceptions.len()))]
pub fn submit_form(
    input: &FormInput,
    display: &DisplayConfig,
) -> Result<OpeningHoursData, FieldErrors> {
    let mut data = OpeningHoursData::default();
    let mut errors = FieldErrors::default();

    for day in Weekday::ALL {
        let Some(value) = input.days.get(&day) else {
            continue;
        };
        match validate_day(value) {
            Ok(ranges) => data.weekly.set_day(day, ranges),
            Err(err) => errors.push(day.as_str(), err),
        }
    }

    let exceptions: Exceptions = input
        .exceptions
        .iter()
        .map(|(key, value)| (key.trim().to_string(), value.tokens()))
        .collect();
    if validate_exceptions(&exceptions) {
        data.exceptions = exceptions;
    } else {
        errors.push(EXCEPTIONS_FIELD, ValidationError::InvalidExceptions);
    }

    data.options.overflow = input.overflow.unwrap_or(display.allow_overflow);

    errors.into_result()?;
    tracing::debug!(open_days = data.weekly.open_days(), "Opening hours form accepted");
    Ok(data)
}

/// One day input, pre-filled for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayField {
    pub day: Weekday,
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub helper: &'static str,
}

/// One exception row, pre-filled for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRow {
    pub key: String,
    pub value: String,
}

/// Everything needed to draw the editing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: String,
    pub collapsed: bool,
    pub weekly_label: &'static str,
    pub days: Vec<DayField>,
    pub exceptions_label: &'static str,
    pub exceptions_helper: &'static str,
    pub exception_key_label: &'static str,
    pub exception_value_label: &'static str,
    pub add_exception_label: &'static str,
    pub exceptions: Vec<ExceptionRow>,
    pub overflow_label: &'static str,
    pub overflow: bool,
}

/// ## Summary
/// Builds the form layout, filling fields from stored state.
#[must_use]
pub fn form_layout(state: Option<&OpeningHoursData>, display: &DisplayConfig) -> FormLayout {
    let days = Weekday::ALL
        .into_iter()
        .map(|day| DayField {
            day,
            label: day.label(),
            value: state.map_or_else(String::new, |data| hydrate_day(data.weekly.day(day))),
            placeholder: messages::TIME_RANGE_PLACEHOLDER,
            helper: messages::TIME_RANGE_FORMAT,
        })
        .collect();

    let exceptions = state
        .map(|data| {
            data.exceptions
                .iter()
                .map(|(key, ranges)| ExceptionRow {
                    key: key.to_string(),
                    value: hydrate_day(ranges),
                })
                .collect()
        })
        .unwrap_or_default();

    FormLayout {
        title: messages::OPENING_HOURS,
        description: messages::DEFINE_HOURS,
        icon: display.icon.clone(),
        collapsed: display.collapsed,
        weekly_label: messages::WEEKLY_HOURS,
        days,
        exceptions_label: messages::SPECIAL_DATES,
        exceptions_helper: messages::EXCEPTIONS_HELPER,
        exception_key_label: messages::EXCEPTION_KEY_LABEL,
        exception_value_label: messages::EXCEPTION_VALUE_LABEL,
        add_exception_label: messages::ADD_EXCEPTION,
        exceptions,
        overflow_label: messages::OVERFLOW_LABEL,
        overflow: state.map_or(display.allow_overflow, |data| data.options.overflow),
    }
}
