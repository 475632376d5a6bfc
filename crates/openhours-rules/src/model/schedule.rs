use openhours_core::types::Weekday;
use serde::{Deserialize, Serialize};

use super::Exceptions;
use crate::error::RulesResult;
use crate::validate::validate_schedule;

/// Range strings for one day; empty means closed.
pub type DaySchedule = Vec<String>;

/// Ranges for each weekday. A missing key deserializes as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub monday: DaySchedule,
    #[serde(default)]
    pub tuesday: DaySchedule,
    #[serde(default)]
    pub wednesday: DaySchedule,
    #[serde(default)]
    pub thursday: DaySchedule,
    #[serde(default)]
    pub friday: DaySchedule,
    #[serde(default)]
    pub saturday: DaySchedule,
    #[serde(default)]
    pub sunday: DaySchedule,
}

impl WeeklySchedule {
    #[must_use]
    pub fn day(&self, day: Weekday) -> &[String] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    pub fn set_day(&mut self, day: Weekday, ranges: DaySchedule) {
        *self.day_mut(day) = ranges;
    }

    /// Every weekday with its ranges, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        Weekday::ALL.into_iter().map(|day| (day, self.day(day)))
    }

    /// Number of weekdays with at least one range.
    #[must_use]
    pub fn open_days(&self) -> usize {
        self.days().filter(|(_, ranges)| !ranges.is_empty()).count()
    }
}

/// Flags that change how ranges are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Ranges may cross midnight.
    #[serde(default)]
    pub overflow: bool,
}

/// Stored opening hours: weekday keys at the top level, plus optional
/// `exceptions` and `overflow`.
///
/// ```json
/// {"monday": ["09:00-12:00", "14:00-18:00"], "sunday": [],
///  "exceptions": {"2024-12-25": []}, "overflow": false}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHoursData {
    #[serde(flatten)]
    pub weekly: WeeklySchedule,
    #[serde(default, skip_serializing_if = "Exceptions::is_empty")]
    pub exceptions: Exceptions,
    #[serde(flatten)]
    pub options: ScheduleOptions,
}

impl OpeningHoursData {
    /// Decodes stored JSON without validating the ranges.
    ///
    /// ## Errors
    /// Returns an error if the JSON does not have the stored shape.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes stored JSON and validates every field.
    ///
    /// ## Errors
    /// Returns an error if decoding fails or any field is invalid.
    pub fn from_json_validated(json: &str) -> RulesResult<Self> {
        let data = Self::from_json(json)?;
        validate_schedule(&data)?;
        Ok(data)
    }

    /// ## Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> RulesResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
