//! Error types for the pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while importing rate tables and
//! worked-hours records or calculating pay.

use thiserror::Error;

/// The main error type for the pay engine.
///
/// # Example
///
/// ```
/// use pay_engine::error::EngineError;
///
/// let error = EngineError::UnknownDayCode {
///     code: "XX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown day code: XX");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day value did not contain a numeric hour before `:`.
    #[error("Invalid hour in time value '{value}'")]
    InvalidHour {
        /// The time text that failed to parse.
        value: String,
    },

    /// A day code was not one of MO, TU, WE, TH, FR, SA, SU.
    #[error("Unknown day code: {code}")]
    UnknownDayCode {
        /// The offending day code.
        code: String,
    },

    /// The rate field of a pay-rate line was not an integer.
    #[error("Invalid hourly rate '{value}'")]
    InvalidRate {
        /// The rate text that failed to parse.
        value: String,
    },

    /// A worked-hours record did not have the `NAME=UNITS` shape.
    #[error("Malformed worked-hours record '{record}': {message}")]
    MalformedRecord {
        /// The record text.
        record: String,
        /// What was wrong with it.
        message: String,
    },

    /// Pay was requested before any rate collection was supplied.
    #[error("Missing configuration: {message}")]
    MissingConfiguration {
        /// A description of what is missing.
        message: String,
    },

    /// Accumulated pay did not fit in an `i64`.
    #[error("Pay for '{name}' overflows the total")]
    PayOverflow {
        /// The employee whose total overflowed.
        name: String,
    },

    /// An input file could not be read.
    #[error("Unable to read source '{path}': {message}")]
    SourceNotFound {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A YAML configuration or rate file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by malformed input text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidHour { .. }
                | EngineError::UnknownDayCode { .. }
                | EngineError::InvalidRate { .. }
                | EngineError::MalformedRecord { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
