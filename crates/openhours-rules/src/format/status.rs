use std::fmt::Write;

use chrono::NaiveDateTime;
use openhours_core::constants::DEFAULT_TIME_FORMAT;
use thiserror::Error;

use super::{Markup, escape_html, messages};

/// Failure reported by a [`ScheduleEvaluator`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluatorError {
    #[error("Invalid time range: {0}")]
    InvalidRange(String),

    #[error("Time range {0} crosses midnight but overflow is disabled")]
    OverflowDisabled(String),

    #[error("Overlapping time ranges on {0}")]
    OverlappingRanges(String),

    #[error("Invalid exception date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Other(String),
}

/// Computes open/closed state from a schedule.
///
/// Implementations may reject schedules the validators accept, for example
/// overflow ranges when overflow is off. Formatting code catches every
/// error; nothing here should panic.
pub trait ScheduleEvaluator {
    /// ## Errors
    /// Returns an error if the schedule cannot be evaluated.
    fn is_open_at(&self, at: NaiveDateTime) -> Result<bool, EvaluatorError>;

    /// Next moment the schedule opens after `at`, if any.
    ///
    /// ## Errors
    /// Returns an error if the schedule cannot be evaluated.
    fn next_open(&self, at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError>;

    /// Next moment the schedule closes after `at`, if any.
    ///
    /// ## Errors
    /// Returns an error if the schedule cannot be evaluated.
    fn next_close(&self, at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError>;
}

/// Open/closed state at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Open { closes_at: Option<NaiveDateTime> },
    Closed { opens_at: Option<NaiveDateTime> },
}

/// ## Summary
/// Asks the evaluator whether it is open at `now` and when that changes.
///
/// ## Errors
/// Propagates evaluator errors.
pub fn current_status(
    evaluator: &dyn ScheduleEvaluator,
    now: NaiveDateTime,
) -> Result<OpenStatus, EvaluatorError> {
    if evaluator.is_open_at(now)? {
        Ok(OpenStatus::Open {
            closes_at: evaluator.next_close(now)?,
        })
    } else {
        Ok(OpenStatus::Closed {
            opens_at: evaluator.next_open(now)?,
        })
    }
}

/// ## Summary
/// Renders the status at `now` as a coloured label with the next change.
///
/// Open shows the closing time in `time_format`; closed shows the weekday
/// and time of the next opening when there is one. Evaluator errors become
/// an `Invalid schedule data` message carrying the error text.
#[must_use]
pub fn format_current_status(
    evaluator: &dyn ScheduleEvaluator,
    now: NaiveDateTime,
    time_format: &str,
) -> Markup {
    match current_status(evaluator, now) {
        Ok(OpenStatus::Open { closes_at }) => {
            let closes = closes_at.map_or_else(
                || messages::UNKNOWN.to_string(),
                |at| format_time(at, time_format, DEFAULT_TIME_FORMAT),
            );
            Markup::new(format!(
                "<span class='text-green-600 font-semibold'>{}</span><br><span class='text-sm text-gray-500'>{}</span>",
                messages::OPEN,
                escape_html(&messages::closes_at(&closes))
            ))
        }
        Ok(OpenStatus::Closed {
            opens_at: Some(opens_at),
        }) => {
            let when = format_time(
                opens_at,
                &format!("%A {time_format}"),
                &format!("%A {DEFAULT_TIME_FORMAT}"),
            );
            Markup::new(format!(
                "<span class='text-red-600 font-semibold'>{}</span><br><span class='text-sm text-gray-500'>{}</span>",
                messages::CLOSED,
                escape_html(&messages::opens(&when))
            ))
        }
        Ok(OpenStatus::Closed { opens_at: None }) => Markup::new(format!(
            "<span class='text-red-600 font-semibold'>{}</span>",
            messages::CLOSED
        )),
        Err(err) => {
            tracing::warn!(error = %err, "Schedule evaluation failed");
            Markup::text(&format!("{} {err}", messages::INVALID_SCHEDULE))
        }
    }
}

/// Formats with a configured pattern, falling back to `fallback` when the
/// pattern is not a valid chrono format.
fn format_time(at: NaiveDateTime, pattern: &str, fallback: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_ok() {
        return out;
    }

    tracing::warn!(pattern, "Invalid time format, using default");
    out.clear();
    if write!(out, "{}", at.format(fallback)).is_err() {
        out.clear();
    }
    out
}
