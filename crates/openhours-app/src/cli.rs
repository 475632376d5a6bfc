//! Command-line arguments.

use openhours_core::error::CoreError;
use openhours_core::types::DisplayMode;
use thiserror::Error;

pub const USAGE: &str = "usage: openhours <schedule.json> [compact|status|today|summary]";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("missing schedule file\n{USAGE}")]
    MissingPath,

    #[error("unexpected argument: {0}\n{USAGE}")]
    UnexpectedArgument(String),

    #[error(transparent)]
    InvalidMode(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub path: String,
    /// Overrides the configured column mode.
    pub mode: Option<DisplayMode>,
}

impl CliArgs {
    /// ## Summary
    /// Parses arguments, excluding the program name.
    ///
    /// ## Errors
    /// Returns an error for a missing path, an unknown mode or extra arguments.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut args = args.into_iter();
        let path = args.next().ok_or(CliError::MissingPath)?;
        let mode = args
            .next()
            .map(|mode| mode.parse::<DisplayMode>())
            .transpose()?;

        if let Some(extra) = args.next() {
            return Err(CliError::UnexpectedArgument(extra));
        }

        Ok(Self { path, mode })
    }
}
