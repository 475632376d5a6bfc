//! Default [`ScheduleEvaluator`] over stored opening hours.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use openhours_core::constants::MINUTES_PER_DAY;
use openhours_core::types::Weekday;
use openhours_rules::format::{EvaluatorError, ScheduleEvaluator};
use openhours_rules::model::{DateKey, OpeningHoursData, TimeRange};
use openhours_rules::validate::has_overlap;

/// How far ahead `next_open`/`next_close` look: a year plus a week, enough
/// to get past any run of yearly exceptions.
const SEARCH_HORIZON_DAYS: u64 = 366 + 7;

/// A span of open time, start inclusive and end exclusive.
type Period = (NaiveDateTime, NaiveDateTime);

/// Evaluates weekday hours with date exceptions.
///
/// For a given date an exact-date exception wins over a recurring one,
/// which wins over the weekday. Overflow ranges run into the next day, and
/// periods that touch (`22:00-24:00` then `00:00-02:00`) count as one.
#[derive(Debug, Clone)]
pub struct WeeklyEvaluator {
    weekly: [Vec<TimeRange>; 7],
    exceptions: Vec<(DateKey, Vec<TimeRange>)>,
}

impl WeeklyEvaluator {
    /// ## Summary
    /// Builds an evaluator from stored data.
    ///
    /// ## Errors
    /// Rejects malformed or zero-length ranges, overflow ranges when
    /// overflow is off, overlapping ranges and invalid exception keys.
    #[tracing::instrument(skip(data), fields(overflow = data.options.overflow))]
    pub fn new(data: &OpeningHoursData) -> Result<Self, EvaluatorError> {
        let overflow = data.options.overflow;

        let mut weekly: [Vec<TimeRange>; 7] = Default::default();
        for (slot, (day, ranges)) in weekly.iter_mut().zip(data.weekly.days()) {
            *slot = parse_ranges(day.as_str(), ranges, overflow)?;
        }

        let exceptions = data
            .exceptions
            .iter()
            .map(|(key, ranges)| {
                let date_key =
                    DateKey::parse(key).ok_or_else(|| EvaluatorError::InvalidDate(key.to_string()))?;
                Ok((date_key, parse_ranges(key, ranges, overflow)?))
            })
            .collect::<Result<Vec<_>, EvaluatorError>>()?;

        tracing::debug!(exceptions = exceptions.len(), "Schedule evaluator built");

        Ok(Self { weekly, exceptions })
    }

    /// Ranges in effect on `date`.
    fn ranges_on(&self, date: NaiveDate) -> &[TimeRange] {
        let exact = self
            .exceptions
            .iter()
            .find(|(key, _)| matches!(key, DateKey::Exact(_)) && key.matches(date));
        let recurring = || {
            self.exceptions
                .iter()
                .find(|(key, _)| matches!(key, DateKey::Recurring { .. }) && key.matches(date))
        };

        if let Some((_, ranges)) = exact.or_else(recurring) {
            return ranges;
        }

        let index = Weekday::from(date.weekday()) as usize;
        &self.weekly[index]
    }

    /// Merged open periods starting on any date in `from..=to`.
    fn periods(&self, from: NaiveDate, to: NaiveDate) -> Vec<Period> {
        let mut periods: Vec<Period> = from
            .iter_days()
            .take_while(|date| *date <= to)
            .flat_map(|date| {
                let midnight = date.and_time(NaiveTime::MIN);
                self.ranges_on(date).iter().map(move |range| {
                    let end = if range.is_overflow() {
                        range.end + MINUTES_PER_DAY
                    } else {
                        range.end
                    };
                    (
                        midnight + TimeDelta::minutes(i64::from(range.start)),
                        midnight + TimeDelta::minutes(i64::from(end)),
                    )
                })
            })
            .collect();

        periods.sort_unstable();

        let mut merged: Vec<Period> = Vec::with_capacity(periods.len());
        for (start, end) in periods {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        merged
    }

    /// Periods that can contain or follow `at`, within the search horizon,
    /// and the first moment past that horizon.
    ///
    /// A period reaching the edge may continue beyond it, so its end is not
    /// a known closing time.
    fn periods_around(&self, at: NaiveDateTime) -> (Vec<Period>, NaiveDateTime) {
        let date = at.date();
        let from = date.checked_sub_days(Days::new(1)).unwrap_or(date);
        let to = date
            .checked_add_days(Days::new(SEARCH_HORIZON_DAYS))
            .unwrap_or(date);
        let edge = to
            .checked_add_days(Days::new(1))
            .map_or(NaiveDateTime::MAX, |day| day.and_time(NaiveTime::MIN));
        (self.periods(from, to), edge)
    }
}

fn parse_ranges(
    label: &str,
    tokens: &[String],
    overflow: bool,
) -> Result<Vec<TimeRange>, EvaluatorError> {
    let ranges = tokens
        .iter()
        .map(|token| {
            let range = TimeRange::parse(token).map_err(|err| {
                tracing::debug!(%err, "Stored range does not parse");
                EvaluatorError::InvalidRange(token.clone())
            })?;
            if range.is_zero_length() {
                return Err(EvaluatorError::InvalidRange(token.clone()));
            }
            if range.is_overflow() && !overflow {
                return Err(EvaluatorError::OverflowDisabled(token.clone()));
            }
            Ok(range)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if has_overlap(tokens) {
        return Err(EvaluatorError::OverlappingRanges(label.to_string()));
    }

    Ok(ranges)
}

impl ScheduleEvaluator for WeeklyEvaluator {
    fn is_open_at(&self, at: NaiveDateTime) -> Result<bool, EvaluatorError> {
        let date = at.date();
        let from = date.checked_sub_days(Days::new(1)).unwrap_or(date);
        Ok(self
            .periods(from, date)
            .iter()
            .any(|(start, end)| *start <= at && at < *end))
    }

    fn next_open(&self, at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError> {
        let (periods, _) = self.periods_around(at);
        Ok(periods
            .into_iter()
            .map(|(start, _)| start)
            .find(|start| *start > at))
    }

    fn next_close(&self, at: NaiveDateTime) -> Result<Option<NaiveDateTime>, EvaluatorError> {
        let (periods, edge) = self.periods_around(at);
        let close = periods.into_iter().map(|(_, end)| end).find(|end| *end > at);
        Ok(close.filter(|end| *end < edge))
    }
}
