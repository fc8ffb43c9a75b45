//! Error types for the Bonus Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while processing a feedback
//! request or loading configuration.

use thiserror::Error;

/// The main error type for the Bonus Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use bonus_engine::error::BonusError;
///
/// let error = BonusError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum BonusError {
    /// Field-level constraint checking reported one or more errors.
    #[error("Validation failed: {details}")]
    ValidationFailed {
        /// A description of the failed constraints.
        details: String,
    },

    /// A field carried a value outside its enumeration's known set.
    #[error("Unsupported value '{value}' for field '{field}'")]
    UnsupportedValue {
        /// The field holding the unsupported value.
        field: String,
        /// The unsupported value itself.
        value: String,
    },

    /// An unexpected internal fault surfaced during request processing.
    #[error("Unknown error: {message}")]
    Unknown {
        /// A description of the fault.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed its consistency checks.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No coefficient table is effective for the requested year.
    #[error("No bonus table is effective for year {year}")]
    TableNotFound {
        /// The year for which a table was requested.
        year: i32,
    },

    /// A coefficient table has no entry for the requested position.
    #[error("No coefficients for position '{code}' in the bonus table effective {year}")]
    CoefficientsNotFound {
        /// The position code that was not found.
        code: String,
        /// The effective year of the table that was searched.
        year: i32,
    },

    /// A modifier name from the service configuration matched no known strategy.
    #[error("Unknown modifier: {name}")]
    UnknownModifier {
        /// The name that could not be resolved.
        name: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return BonusError.
pub type BonusResult<T> = Result<T, BonusError>;
