//! Table column rendering.

use chrono::{Datelike, NaiveDateTime};
use openhours_core::types::{DisplayMode, Weekday};
use openhours_rules::format::{
    ScheduleEvaluator, compact_summary, format_weekly_schedule, messages, today_hours,
    weekday_range_summary,
};
use openhours_rules::model::OpeningHoursData;

use crate::evaluator::WeeklyEvaluator;

/// Semantic colour for a cell or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    /// No data.
    Gray,
    /// Open now.
    Success,
    /// Closed now.
    Danger,
    /// The schedule could not be evaluated.
    Warning,
}

impl StatusColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for StatusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Colour reflecting whether the schedule is open at `now`.
#[must_use]
pub fn status_color(state: Option<&OpeningHoursData>, now: NaiveDateTime) -> StatusColor {
    let Some(data) = state else {
        return StatusColor::Gray;
    };

    let open = WeeklyEvaluator::new(data).and_then(|evaluator| evaluator.is_open_at(now));
    match open {
        Ok(true) => StatusColor::Success,
        Ok(false) => StatusColor::Danger,
        Err(err) => {
            tracing::warn!(error = %err, "Cannot evaluate schedule for colour");
            StatusColor::Warning
        }
    }
}

/// How a column shows opening hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    pub mode: DisplayMode,
    /// Render the text as a badge.
    pub show_status: bool,
    /// Attach the full weekly schedule as a tooltip.
    pub show_tooltip: bool,
}

impl ColumnOptions {
    #[must_use]
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn show_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    #[must_use]
    pub fn show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCell {
    pub text: String,
    pub badge: bool,
    pub color: StatusColor,
    pub tooltip: Option<String>,
}

/// ## Summary
/// Renders a table cell for a stored value.
///
/// Unset values show `Not set` in gray. Otherwise the text depends on the
/// display mode, and the colour on whether the schedule is open at `now`.
#[must_use]
pub fn render_column(
    state: Option<&OpeningHoursData>,
    options: &ColumnOptions,
    now: NaiveDateTime,
) -> ColumnCell {
    let Some(data) = state else {
        return ColumnCell {
            text: messages::NOT_SET.to_string(),
            badge: false,
            color: StatusColor::Gray,
            tooltip: None,
        };
    };

    let text = match options.mode {
        DisplayMode::Status => status_text(data, now),
        DisplayMode::Today => today_hours(&data.weekly, Weekday::from(now.weekday())),
        DisplayMode::Summary => compact_summary(&data.weekly),
        DisplayMode::Compact => weekday_range_summary(&data.weekly),
    };

    ColumnCell {
        text,
        badge: options.show_status,
        color: status_color(state, now),
        tooltip: options
            .show_tooltip
            .then(|| format_weekly_schedule(&data.weekly).to_plain_text()),
    }
}

fn status_text(data: &OpeningHoursData, now: NaiveDateTime) -> String {
    let open = WeeklyEvaluator::new(data).and_then(|evaluator| evaluator.is_open_at(now));
    match open {
        Ok(true) => messages::OPEN.to_string(),
        Ok(false) => messages::CLOSED.to_string(),
        Err(_) => messages::INVALID_SCHEDULE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Monday 2024-01-01 at the given time.
    fn monday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn office() -> OpeningHoursData {
        OpeningHoursData::from_json(
            r#"{
                "monday": ["09:00-17:00"], "tuesday": ["09:00-17:00"],
                "wednesday": ["09:00-17:00"], "thursday": ["09:00-17:00"],
                "friday": ["09:00-15:00"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn unset_state() {
        let cell = render_column(None, &ColumnOptions::default().show_tooltip(true), monday(10, 0));
        assert_eq!(cell.text, "Not set");
        assert_eq!(cell.color, StatusColor::Gray);
        assert!(!cell.badge);
        assert_eq!(cell.tooltip, None);
    }

    #[test]
    fn compact_mode() {
        let cell = render_column(Some(&office()), &ColumnOptions::default(), monday(10, 0));
        assert_eq!(cell.text, "Monday-Friday: 09:00-17:00");
        assert_eq!(cell.color, StatusColor::Success);
    }

    #[test]
    fn status_mode() {
        let options = ColumnOptions::new(DisplayMode::Status).show_status(true);
        let open = render_column(Some(&office()), &options, monday(10, 0));
        assert_eq!(open.text, "Open");
        assert!(open.badge);

        let closed = render_column(Some(&office()), &options, monday(18, 0));
        assert_eq!(closed.text, "Closed");
        assert_eq!(closed.color, StatusColor::Danger);
    }

    #[test]
    fn status_mode_invalid_schedule() {
        let data = OpeningHoursData::from_json(r#"{"monday": ["22:00-02:00"]}"#).unwrap();
        let cell = render_column(
            Some(&data),
            &ColumnOptions::new(DisplayMode::Status),
            monday(10, 0),
        );
        assert_eq!(cell.text, "Invalid schedule data");
        assert_eq!(cell.color, StatusColor::Warning);
    }

    #[test]
    fn today_and_summary_modes() {
        let today = render_column(
            Some(&office()),
            &ColumnOptions::new(DisplayMode::Today),
            monday(8, 0),
        );
        assert_eq!(today.text, "Today: 09:00-17:00");

        let summary = render_column(
            Some(&office()),
            &ColumnOptions::new(DisplayMode::Summary),
            monday(8, 0),
        );
        assert_eq!(summary.text, "5 days/week");
    }

    #[test]
    fn tooltip_is_plain_schedule() {
        let cell = render_column(
            Some(&office()),
            &ColumnOptions::default().show_tooltip(true),
            monday(8, 0),
        );
        let tooltip = cell.tooltip.unwrap();
        assert!(tooltip.starts_with("Monday: 09:00-17:00\n"));
        assert!(tooltip.ends_with("Sunday: Closed"));
    }
}
