use thiserror::Error;

use crate::validate::FieldErrors;

/// Why a piece of opening hours input was rejected.
///
/// Display strings are the user-facing messages shown next to a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid time range format: {0}. Use HH:MM-HH:MM format.")]
    InvalidFormat(String),

    #[error(
        "Invalid time range logic: {0}. Start time should be before end time (unless overflow is enabled)."
    )]
    InvalidLogic(String),

    #[error("Time ranges cannot overlap. Please adjust the times.")]
    Overlapping,

    #[error(
        "Invalid exceptions format. Use date keys (YYYY-MM-DD or MM-DD) with arrays of time ranges."
    )]
    InvalidExceptions,
}

/// Errors raised while decoding or checking stored schedules
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidFields(#[from] FieldErrors),
}

pub type RulesResult<T> = std::result::Result<T, RulesError>;
