//! Response outcome and error code enumerations.

use serde::{Deserialize, Serialize};

/// Overall outcome of processing a feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Codes {
    /// The request was processed and bonuses were computed.
    Success,
    /// The request was rejected; no bonuses are present.
    Failed,
}

/// Machine-readable error classification carried on every response.
///
/// `Empty` accompanies a successful response; the remaining variants map
/// one-to-one onto the failure kinds the validation boundary can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCodes {
    /// No error occurred.
    Empty,
    /// Field-level constraint checking failed.
    ValidationException,
    /// A field carried a value outside its enumeration's known set.
    UnsupportedException,
    /// An unexpected internal fault occurred.
    UnknownException,
}

/// Human-readable error message, one-to-one with [`ErrorCodes`].
///
/// Serialized as the message text itself so the wire carries a readable
/// string rather than a variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorMessages {
    /// No error occurred.
    #[serde(rename = "")]
    Empty,
    /// Field-level constraint checking failed.
    #[serde(rename = "Validation failed")]
    Validation,
    /// A field carried a value outside its enumeration's known set.
    #[serde(rename = "Unsupported value")]
    Unsupported,
    /// An unexpected internal fault occurred.
    #[serde(rename = "Unknown error")]
    Unknown,
}

impl ErrorMessages {
    /// Returns the message paired with the given error code.
    pub fn for_code(code: ErrorCodes) -> Self {
        match code {
            ErrorCodes::Empty => ErrorMessages::Empty,
            ErrorCodes::ValidationException => ErrorMessages::Validation,
            ErrorCodes::UnsupportedException => ErrorMessages::Unsupported,
            ErrorCodes::UnknownException => ErrorMessages::Unknown,
        }
    }
}
