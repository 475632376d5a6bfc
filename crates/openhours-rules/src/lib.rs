//! Opening hours text format: parsing, validation and display formatting.
//!
//! Everything here is a pure function of its input. Current time is always
//! passed in explicitly, and open/closed computation is delegated to a
//! [`format::ScheduleEvaluator`].

pub mod error;
pub mod format;
pub mod model;
pub mod validate;
