//! Error types for ical-fixtures.

use thiserror::Error;

/// Errors that can occur while generating the fixture calendar.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("please only provide an output file path")]
    InvalidArguments,

    #[error("given output file path is not in an existing folder")]
    InvalidOutputPath,

    #[error("Invalid event window: {0}")]
    InvalidWindow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
