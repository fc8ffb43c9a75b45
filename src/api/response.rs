//! Failure-to-status mapping for the HTTP API.

use axum::http::StatusCode;

use crate::error::BonusError;
use crate::models::{ErrorCodes, ErrorMessages};

/// Maps a failure surfaced at the validation boundary onto the HTTP status
/// and response error fields.
///
/// Exactly one classification applies per call:
/// - [`BonusError::ValidationFailed`] → 400 / `VALIDATION_EXCEPTION`
/// - [`BonusError::UnsupportedValue`] → 500 / `UNSUPPORTED_EXCEPTION`
/// - anything else → 500 / `UNKNOWN_EXCEPTION`
pub fn classify_failure(error: &BonusError) -> (StatusCode, ErrorCodes, ErrorMessages) {
    match error {
        BonusError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            ErrorCodes::ValidationException,
            ErrorMessages::Validation,
        ),
        BonusError::UnsupportedValue { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCodes::UnsupportedException,
            ErrorMessages::Unsupported,
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCodes::UnknownException,
            ErrorMessages::Unknown,
        ),
    }
}
