//! The feedback response model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Codes, ErrorCodes, ErrorMessages, Systems};

/// Format string for the `systemTime` response field.
///
/// UTC, microsecond precision, lexicographically ordered.
pub const SYSTEM_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Formats a timestamp for the `systemTime` response field.
///
/// # Example
///
/// ```
/// use bonus_engine::models::format_system_time;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 7, 1, 12, 30, 45).unwrap();
/// assert_eq!(format_system_time(at), "2024-07-01T12:30:45.000000");
/// ```
pub fn format_system_time(at: DateTime<Utc>) -> String {
    at.format(SYSTEM_TIME_FORMAT).to_string()
}

/// The response returned for every feedback request.
///
/// The shape never varies: failure paths stamp `code`, `errorCode` and
/// `errorMessage` on the same skeleton that a success would fill with bonus
/// figures. Bonus fields are omitted from the wire unless populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    /// Unique identifier echoed from the request, when one was readable.
    pub uid: Option<String>,
    /// Operation identifier echoed from the request, when one was readable.
    pub operation_uid: Option<String>,
    /// Sender identity echoed from the request, when recognizable.
    pub system_name: Option<Systems>,
    /// Timestamp of response construction (see [`SYSTEM_TIME_FORMAT`]).
    pub system_time: String,
    /// Overall processing outcome.
    pub code: Codes,
    /// Annual bonus amount; present on success only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_bonus: Option<Decimal>,
    /// Quarterly bonus amount; present on success for managerial positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarterly_bonus: Option<Decimal>,
    /// Error classification; `EMPTY` when the call succeeded.
    pub error_code: ErrorCodes,
    /// Error message paired with `error_code`.
    pub error_message: ErrorMessages,
}

impl FeedbackResponse {
    /// Builds the response skeleton for a freshly received request.
    ///
    /// Echoes the identifiers, presumes success, and stamps the current
    /// time. Failure paths later overwrite the outcome fields in place;
    /// the shape itself never changes.
    pub fn skeleton(
        uid: Option<String>,
        operation_uid: Option<String>,
        system_name: Option<Systems>,
    ) -> Self {
        Self {
            uid,
            operation_uid,
            system_name,
            system_time: format_system_time(Utc::now()),
            code: Codes::Success,
            annual_bonus: None,
            quarterly_bonus: None,
            error_code: ErrorCodes::Empty,
            error_message: ErrorMessages::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_skeleton_presumes_success() {
        let response = FeedbackResponse::skeleton(
            Some("msg_001".to_string()),
            Some("op_001".to_string()),
            Some(Systems::SecondService),
        );

        assert_eq!(response.uid.as_deref(), Some("msg_001"));
        assert_eq!(response.operation_uid.as_deref(), Some("op_001"));
        assert_eq!(response.system_name, Some(Systems::SecondService));
        assert_eq!(response.code, Codes::Success);
        assert_eq!(response.error_code, ErrorCodes::Empty);
        assert_eq!(response.error_message, ErrorMessages::Empty);
        assert!(response.annual_bonus.is_none());
        assert!(response.quarterly_bonus.is_none());
        assert!(!response.system_time.is_empty());
    }

    #[test]
    fn test_bonus_fields_omitted_when_absent() {
        let response = FeedbackResponse::skeleton(None, None, None);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("annualBonus"));
        assert!(!json.contains("quarterlyBonus"));
        assert!(json.contains("\"uid\":null"));
        assert!(json.contains("\"errorCode\":\"EMPTY\""));
        assert!(json.contains("\"errorMessage\":\"\""));
    }

    #[test]
    fn test_bonus_fields_serialized_when_present() {
        let mut response = FeedbackResponse::skeleton(
            Some("msg_001".to_string()),
            Some("op_001".to_string()),
            Some(Systems::FirstService),
        );
        response.annual_bonus = Some(Decimal::from_str("63000.00").unwrap());
        response.quarterly_bonus = Some(Decimal::from_str("1872000.0").unwrap());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"annualBonus\":\"63000.00\""));
        assert!(json.contains("\"quarterlyBonus\":\"1872000.0\""));
    }

    #[test]
    fn test_round_trip() {
        let mut response = FeedbackResponse::skeleton(
            Some("msg_001".to_string()),
            None,
            Some(Systems::ThirdService),
        );
        response.code = Codes::Failed;
        response.error_code = ErrorCodes::ValidationException;
        response.error_message = ErrorMessages::Validation;

        let json = serde_json::to_string(&response).unwrap();
        let deserialized: FeedbackResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, deserialized);
    }

    #[test]
    fn test_format_system_time_is_stable() {
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_system_time(at), "2023-12-31T23:59:59.000000");
    }
}
