//! Read-only detail view of an opening hours value.

use chrono::NaiveDateTime;
use openhours_core::config::DisplayConfig;
use openhours_rules::format::{
    Markup, format_current_status, format_exceptions, format_weekly_schedule, messages,
};
use openhours_rules::model::OpeningHoursData;

use crate::column::{StatusColor, status_color};
use crate::evaluator::WeeklyEvaluator;

/// A rendered detail section.
///
/// `exceptions` and `options` are `None` when the section should be hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub title: &'static str,
    pub icon: String,
    pub icon_color: StatusColor,
    pub weekly: Markup,
    pub status: Markup,
    pub exceptions: Option<Markup>,
    pub options: Option<String>,
}

/// ## Summary
/// Renders the weekly schedule, the status at `now`, exceptions and options.
///
/// Evaluation failures never escape: the status shows `Invalid schedule
/// data` with the reason and the icon turns to warning.
#[must_use]
#[tracing::instrument(skip(state, display), fields(has_state = state.is_some()))]
pub fn render_entry(
    state: Option<&OpeningHoursData>,
    now: NaiveDateTime,
    display: &DisplayConfig,
) -> EntryView {
    let icon = display.icon.clone();
    let icon_color = status_color(state, now);

    let Some(data) = state else {
        return EntryView {
            title: messages::OPENING_HOURS,
            icon,
            icon_color,
            weekly: Markup::text(messages::NO_HOURS_DEFINED),
            status: Markup::text(messages::NO_HOURS_DEFINED),
            exceptions: None,
            options: None,
        };
    };

    let status = match WeeklyEvaluator::new(data) {
        Ok(evaluator) => format_current_status(&evaluator, now, &display.time_format),
        Err(err) => {
            tracing::warn!(error = %err, "Schedule rejected by evaluator");
            Markup::text(&format!("{} {err}", messages::INVALID_SCHEDULE))
        }
    };

    EntryView {
        title: messages::OPENING_HOURS,
        icon,
        icon_color,
        weekly: format_weekly_schedule(&data.weekly),
        status,
        exceptions: (!data.exceptions.is_empty()).then(|| format_exceptions(&data.exceptions)),
        options: data
            .options
            .overflow
            .then(|| messages::OVERFLOW_ENABLED.to_string()),
    }
}
