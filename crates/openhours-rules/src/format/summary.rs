use openhours_core::types::Weekday;

use super::{format_ranges, messages};
use crate::model::WeeklySchedule;

/// Weekdays needed before a shared range list is shown as `Monday-Friday`.
const COMMON_RANGE_MIN_DAYS: usize = 3;

/// ## Summary
/// Summarizes how many weekdays have hours.
///
/// `Always closed` for none, `Open daily` for all seven, otherwise
/// `N days/week`.
#[must_use]
pub fn compact_summary(schedule: &WeeklySchedule) -> String {
    match schedule.open_days() {
        0 => messages::ALWAYS_CLOSED.to_string(),
        7 => messages::OPEN_DAILY.to_string(),
        count => messages::days_per_week(count),
    }
}

/// ## Summary
/// Shows the hours for `today`, or `Closed today`.
#[must_use]
pub fn today_hours(schedule: &WeeklySchedule, today: Weekday) -> String {
    let ranges = schedule.day(today);
    if ranges.is_empty() {
        return messages::CLOSED_TODAY.to_string();
    }
    format!("{}: {}", messages::TODAY, format_ranges(ranges))
}

/// ## Summary
/// Shows the most common Monday–Friday hours when at least three workdays
/// share them, e.g. `Monday-Friday: 09:00-17:00`.
///
/// Ties go to the range list seen first. Falls back to
/// [`compact_summary`] otherwise.
#[must_use]
pub fn weekday_range_summary(schedule: &WeeklySchedule) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for day in Weekday::WORKDAYS {
        let ranges = schedule.day(day);
        if ranges.is_empty() {
            continue;
        }
        let key = ranges.join(",");
        if let Some(entry) = counts.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 += 1;
        } else {
            counts.push((key, 1));
        }
    }

    let mut common: Option<&(String, usize)> = None;
    for entry in &counts {
        if common.is_none_or(|(_, best)| entry.1 > *best) {
            common = Some(entry);
        }
    }

    match common {
        Some((ranges, count)) if *count >= COMMON_RANGE_MIN_DAYS => format!(
            "{}-{}: {ranges}",
            Weekday::Monday.label(),
            Weekday::Friday.label()
        ),
        _ => compact_summary(schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_days(days: &[Weekday], ranges: &[&str]) -> WeeklySchedule {
        let mut schedule = WeeklySchedule::default();
        for &day in days {
            schedule.set_day(day, ranges.iter().map(|r| (*r).to_string()).collect());
        }
        schedule
    }

    #[test]
    fn summary_counts() {
        assert_eq!(compact_summary(&WeeklySchedule::default()), "Always closed");
        assert_eq!(
            compact_summary(&with_days(&Weekday::ALL, &["09:00-17:00"])),
            "Open daily"
        );
        assert_eq!(
            compact_summary(&with_days(
                &[Weekday::Monday, Weekday::Wednesday, Weekday::Sunday],
                &["09:00-17:00"]
            )),
            "3 days/week"
        );
    }

    #[test]
    fn today() {
        let schedule = with_days(&[Weekday::Tuesday], &["09:00-12:00", "13:00-17:00"]);
        assert_eq!(
            today_hours(&schedule, Weekday::Tuesday),
            "Today: 09:00-12:00, 13:00-17:00"
        );
        assert_eq!(today_hours(&schedule, Weekday::Wednesday), "Closed today");
    }

    #[test]
    fn common_weekday_ranges() {
        let mut schedule = with_days(&Weekday::WORKDAYS, &["09:00-17:00"]);
        schedule.set_day(Weekday::Friday, vec!["09:00-15:00".into()]);
        assert_eq!(
            weekday_range_summary(&schedule),
            "Monday-Friday: 09:00-17:00"
        );
    }

    #[test]
    fn common_ranges_joined_without_spaces() {
        let schedule = with_days(&Weekday::WORKDAYS, &["09:00-12:00", "13:00-17:00"]);
        assert_eq!(
            weekday_range_summary(&schedule),
            "Monday-Friday: 09:00-12:00,13:00-17:00"
        );
    }

    #[test]
    fn too_few_shared_days_falls_back() {
        let mut schedule = with_days(&[Weekday::Monday, Weekday::Tuesday], &["09:00-17:00"]);
        schedule.set_day(Weekday::Wednesday, vec!["10:00-18:00".into()]);
        assert_eq!(weekday_range_summary(&schedule), "3 days/week");
    }

    #[test]
    fn no_weekday_hours_falls_back() {
        let schedule = with_days(&[Weekday::Saturday], &["10:00-14:00"]);
        assert_eq!(weekday_range_summary(&schedule), "1 days/week");
    }
}
