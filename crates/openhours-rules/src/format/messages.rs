//! English display strings.

pub const OPENING_HOURS: &str = "Opening Hours";
pub const WEEKLY_SCHEDULE: &str = "Weekly Schedule";
pub const CURRENT_STATUS: &str = "Current Status";
pub const EXCEPTIONS: &str = "Exceptions";
pub const OPTIONS: &str = "Options";

pub const OPEN: &str = "Open";
pub const CLOSED: &str = "Closed";
pub const UNKNOWN: &str = "Unknown";

pub const NO_HOURS_DEFINED: &str = "No opening hours defined";
pub const NO_EXCEPTIONS: &str = "No exceptions defined";
pub const INVALID_SCHEDULE: &str = "Invalid schedule data";
pub const NOT_SET: &str = "Not set";
pub const ALWAYS_CLOSED: &str = "Always closed";
pub const OPEN_DAILY: &str = "Open daily";
pub const CLOSED_TODAY: &str = "Closed today";
pub const TODAY: &str = "Today";

pub const WEEKLY_HOURS: &str = "Weekly Hours";
pub const SPECIAL_DATES: &str = "Special Dates & Exceptions";
pub const DEFINE_HOURS: &str =
    "Define opening hours for each day of the week. Leave empty for closed days.";
pub const TIME_RANGE_FORMAT: &str = "Enter time ranges separated by commas. Format: HH:MM-HH:MM";
pub const TIME_RANGE_PLACEHOLDER: &str = "09:00-17:00,19:00-22:00";
pub const EXCEPTIONS_HELPER: &str = r#"Define specific dates with different hours or closures. Format: {"2024-12-25": [], "2024-12-31": ["18:00-22:00"]}"#;
pub const EXCEPTION_KEY_LABEL: &str = "Date (YYYY-MM-DD or MM-DD)";
pub const EXCEPTION_VALUE_LABEL: &str = "Hours (comma-separated ranges)";
pub const ADD_EXCEPTION: &str = "Add exception";
pub const OVERFLOW_LABEL: &str = "Allow overflow (hours crossing midnight)";
pub const OVERFLOW_ENABLED: &str = "Overflow enabled (crosses midnight)";

#[must_use]
pub fn days_per_week(count: usize) -> String {
    format!("{count} days/week")
}

#[must_use]
pub fn closes_at(time: &str) -> String {
    format!("Closes at {time}")
}

#[must_use]
pub fn opens(when: &str) -> String {
    format!("Opens {when}")
}
