use super::{Markup, escape_html, messages};
use crate::model::{Exceptions, WeeklySchedule};

/// Joins ranges for display: `09:00-12:00, 14:00-18:00`.
#[must_use]
pub fn format_ranges(ranges: &[String]) -> String {
    ranges.join(", ")
}

/// ## Summary
/// Renders one line per weekday, Monday through Sunday.
///
/// Closed days are greyed out; open days show their ranges after a bold
/// day name. Lines are separated by `<br>`.
#[must_use]
pub fn format_weekly_schedule(schedule: &WeeklySchedule) -> Markup {
    let lines: Vec<String> = schedule
        .days()
        .map(|(day, ranges)| {
            if ranges.is_empty() {
                format!(
                    "<span class='text-gray-500'>{}: {}</span>",
                    day.label(),
                    messages::CLOSED
                )
            } else {
                format!(
                    "<strong>{}:</strong> {}",
                    day.label(),
                    escape_html(&format_ranges(ranges))
                )
            }
        })
        .collect();

    Markup::new(lines.join("<br>"))
}

/// ## Summary
/// Renders one line per exception, in insertion order.
#[must_use]
pub fn format_exceptions(exceptions: &Exceptions) -> Markup {
    if exceptions.is_empty() {
        return Markup::text(messages::NO_EXCEPTIONS);
    }

    let lines: Vec<String> = exceptions
        .iter()
        .map(|(key, ranges)| {
            let hours = if ranges.is_empty() {
                messages::CLOSED.to_string()
            } else {
                escape_html(&format_ranges(ranges))
            };
            format!("<strong>{}:</strong> {hours}", escape_html(key))
        })
        .collect();

    Markup::new(lines.join("<br>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_syntax;
    use openhours_core::types::Weekday;

    fn schedule() -> WeeklySchedule {
        let mut schedule = WeeklySchedule::default();
        schedule.set_day(
            Weekday::Monday,
            vec!["09:00-12:00".into(), "14:00-18:00".into()],
        );
        schedule.set_day(Weekday::Saturday, vec!["10:00-14:00".into()]);
        schedule
    }

    #[test]
    fn weekly_lines() {
        let markup = format_weekly_schedule(&schedule());
        let lines: Vec<&str> = markup.as_str().split("<br>").collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "<strong>Monday:</strong> 09:00-12:00, 14:00-18:00");
        assert_eq!(lines[1], "<span class='text-gray-500'>Tuesday: Closed</span>");
        assert_eq!(lines[5], "<strong>Saturday:</strong> 10:00-14:00");
        assert_eq!(lines[6], "<span class='text-gray-500'>Sunday: Closed</span>");
    }

    #[test]
    fn weekly_round_trip() {
        let schedule = schedule();
        let text = format_weekly_schedule(&schedule).to_plain_text();

        let mut reparsed = Vec::new();
        for line in text.lines() {
            let (_, hours) = line.split_once(": ").unwrap();
            if hours == messages::CLOSED {
                continue;
            }
            reparsed.extend(hours.split(", ").map(str::to_string));
        }

        let original: Vec<String> = schedule
            .days()
            .flat_map(|(_, ranges)| ranges.to_vec())
            .collect();
        assert_eq!(reparsed, original);
        assert!(reparsed.iter().all(|token| validate_syntax(token)));
    }

    #[test]
    fn exceptions_empty() {
        assert_eq!(
            format_exceptions(&Exceptions::new()).as_str(),
            "No exceptions defined"
        );
    }

    #[test]
    fn exceptions_in_insertion_order() {
        let mut exceptions = Exceptions::new();
        exceptions.insert("2024-12-31", vec!["18:00-22:00".into()]);
        exceptions.insert("2024-12-25", vec![]);
        assert_eq!(
            format_exceptions(&exceptions).as_str(),
            "<strong>2024-12-31:</strong> 18:00-22:00<br><strong>2024-12-25:</strong> Closed"
        );
    }
}
