//! Response modifier strategies.

use chrono::Utc;

use crate::error::{BonusError, BonusResult};
use crate::models::{FeedbackResponse, format_system_time};

/// A post-processing strategy applied to a built response.
///
/// Implementations take ownership of the response and return the modified
/// value; chains apply them in configured order.
pub trait ResponseModifier: Send + Sync {
    /// The name this strategy is selected by in the service configuration.
    fn name(&self) -> &'static str;

    /// Applies the strategy to a response.
    fn modify(&self, response: FeedbackResponse) -> FeedbackResponse;
}

/// Overwrites `systemTime` with the moment of modification.
///
/// The skeleton stamps construction time; running this strategy last in the
/// chain makes `systemTime` reflect when the response actually left the
/// pipeline.
pub struct SystemTimeResponseModifier;

impl SystemTimeResponseModifier {
    /// The configuration name of this strategy.
    pub const NAME: &'static str = "system_time";
}

impl ResponseModifier for SystemTimeResponseModifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn modify(&self, mut response: FeedbackResponse) -> FeedbackResponse {
        response.system_time = format_system_time(Utc::now());
        response
    }
}

/// Resolves a response modifier strategy by its configuration name.
///
/// # Example
///
/// ```
/// use bonus_engine::modifier::response_modifier;
///
/// let modifier = response_modifier("system_time").unwrap();
/// assert_eq!(modifier.name(), "system_time");
/// assert!(response_modifier("reverse_uid").is_err());
/// ```
pub fn response_modifier(name: &str) -> BonusResult<Box<dyn ResponseModifier>> {
    match name {
        SystemTimeResponseModifier::NAME => Ok(Box::new(SystemTimeResponseModifier)),
        _ => Err(BonusError::UnknownModifier {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackResponse;

    #[test]
    fn test_system_time_modifier_overwrites_timestamp() {
        let mut response = FeedbackResponse::skeleton(
            Some("msg_001".to_string()),
            Some("op_001".to_string()),
            None,
        );
        response.system_time = "1970-01-01T00:00:00.000000".to_string();

        let modified = SystemTimeResponseModifier.modify(response);

        assert_ne!(modified.system_time, "1970-01-01T00:00:00.000000");
        // Everything else is untouched.
        assert_eq!(modified.uid.as_deref(), Some("msg_001"));
        assert_eq!(modified.operation_uid.as_deref(), Some("op_001"));
    }

    #[test]
    fn test_registry_resolves_system_time() {
        let modifier = response_modifier("system_time").unwrap();
        assert_eq!(modifier.name(), SystemTimeResponseModifier::NAME);
    }

    #[test]
    fn test_registry_rejects_unknown_name() {
        match response_modifier("reverse_uid") {
            Err(BonusError::UnknownModifier { name }) => assert_eq!(name, "reverse_uid"),
            other => panic!("Expected UnknownModifier, got {:?}", other.map(|m| m.name())),
        }
    }
}
