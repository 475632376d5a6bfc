//! Raw input through validation, storage and formatting.

use chrono::{NaiveDate, NaiveDateTime};
use openhours_core::types::Weekday;
use openhours_rules::error::ValidationError;
use openhours_rules::format::{
    EvaluatorError, ScheduleEvaluator, compact_summary, format_current_status,
    format_weekly_schedule, weekday_range_summary,
};
use openhours_rules::model::{FieldValue, OpeningHoursData};
use openhours_rules::validate::{validate_day, validate_schedule};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

/// Evaluator with canned answers.
struct Fixed {
    open: bool,
    change: Option<NaiveDateTime>,
}

impl ScheduleEvaluator for Fixed {
    fn is_open_at(&self, _at: NaiveDateTime) -> Result<bool, EvaluatorError> {
        Ok(self.open)
    }

    fn next_open(&self, _at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError> {
        Ok(self.change)
    }

    fn next_close(&self, _at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError> {
        Ok(self.change)
    }
}

struct Broken;

impl ScheduleEvaluator for Broken {
    fn is_open_at(&self, _at: NaiveDateTime) -> Result<bool, EvaluatorError> {
        Err(EvaluatorError::Other("<boom>".to_string()))
    }

    fn next_open(&self, _at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError> {
        Err(EvaluatorError::Other("<boom>".to_string()))
    }

    fn next_close(&self, _at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError> {
        Err(EvaluatorError::Other("<boom>".to_string()))
    }
}

/// Each stage short-circuits with its own error.
#[test_log::test]
fn stages_report_their_own_error() {
    assert_eq!(
        validate_day(&FieldValue::from("09:00-12:00, 9:00-1200")),
        Err(ValidationError::InvalidFormat("9:00-1200".to_string()))
    );
    assert_eq!(
        validate_day(&FieldValue::from("12:00-12:00,13:00-25:00")),
        Err(ValidationError::InvalidLogic("12:00-12:00".to_string()))
    );
    assert_eq!(
        validate_day(&FieldValue::from("09:00-12:00,11:00-14:00,13:00-15:00")),
        Err(ValidationError::Overlapping)
    );
    assert_eq!(
        validate_day(&FieldValue::from(vec![
            "22:00-02:00".to_string(),
            "09:00-12:00".to_string(),
        ])),
        Ok(vec!["22:00-02:00".to_string(), "09:00-12:00".to_string()])
    );
}

/// Validated input stored as JSON formats back to the same hours.
#[test_log::test]
fn stored_schedule_formats() {
    let mut data = OpeningHoursData::default();
    for day in Weekday::WORKDAYS {
        let ranges = validate_day(&FieldValue::from("08:30-12:00 , 14:00-17:30")).expect("valid");
        data.weekly.set_day(day, ranges);
    }

    let stored = data.to_json().expect("serializes");
    let data = OpeningHoursData::from_json_validated(&stored).expect("valid");
    assert_eq!(validate_schedule(&data), Ok(()));

    assert_eq!(compact_summary(&data.weekly), "5 days/week");
    assert_eq!(
        weekday_range_summary(&data.weekly),
        "Monday-Friday: 08:30-12:00,14:00-17:30"
    );

    let plain = format_weekly_schedule(&data.weekly).to_plain_text();
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Monday: 08:30-12:00, 14:00-17:30");
    assert_eq!(lines[5], "Saturday: Closed");
}

/// Stored data that bypassed the form is still caught field by field.
#[test_log::test]
fn stored_schedule_is_revalidated() {
    let data = OpeningHoursData::from_json(
        r#"{"tuesday": ["10:00-09:00"], "sunday": ["noon"], "exceptions": {"13-01": []}}"#,
    )
    .expect("well-formed json");

    let errors = validate_schedule(&data).expect_err("invalid");
    let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec!["sunday", "exceptions"]);
    assert!(OpeningHoursData::from_json_validated(r#"{"sunday": ["noon"]}"#).is_err());
}

/// Status rendering goes through the evaluator seam and absorbs its errors.
#[test_log::test]
fn status_through_evaluator() {
    let closes = noon() + chrono::TimeDelta::hours(5);
    let open = format_current_status(
        &Fixed {
            open: true,
            change: Some(closes),
        },
        noon(),
        "%H:%M",
    );
    assert_eq!(open.to_plain_text(), "Open\nCloses at 17:00");

    let closed = format_current_status(
        &Fixed {
            open: false,
            change: None,
        },
        noon(),
        "%H:%M",
    );
    assert_eq!(closed.to_plain_text(), "Closed");

    let broken = format_current_status(&Broken, noon(), "%H:%M");
    assert_eq!(broken.as_str(), "Invalid schedule data &lt;boom&gt;");
    assert_eq!(broken.to_plain_text(), "Invalid schedule data <boom>");
}
