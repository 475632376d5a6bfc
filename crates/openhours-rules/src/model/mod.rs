//! Opening hours data model.
//!
//! Schedules store ranges as the strings the user typed (after space
//! stripping); [`TimeRange`] is the parsed form used for computation.

mod exceptions;
mod field;
mod range;
mod schedule;

pub use exceptions::{DateKey, Exceptions};
pub use field::{FieldValue, hydrate_day};
pub use range::TimeRange;
pub use schedule::{DaySchedule, OpeningHoursData, ScheduleOptions, WeeklySchedule};
