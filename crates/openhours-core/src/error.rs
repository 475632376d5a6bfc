use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Unknown display mode: {0}")]
    UnknownDisplayMode(String),
}
