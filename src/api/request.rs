//! Wire request type for the feedback endpoint.
//!
//! Every field deserializes as optional or raw so that missing data and
//! out-of-set enum values reach the validation layer as classifiable
//! conditions instead of serde hard failures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Systems;
use crate::validation::BindingOutcome;

/// The raw request body of `POST /feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    /// Unique identifier of the message.
    pub uid: Option<String>,
    /// Unique identifier of the operation.
    pub operation_uid: Option<String>,
    /// Sender identity code; membership is checked during validation.
    pub system_name: Option<String>,
    /// Position code; membership is checked during validation.
    pub position: Option<String>,
    /// The employee's salary.
    pub salary: Option<Decimal>,
    /// The bonus multiplier.
    pub bonus: Option<Decimal>,
    /// Days worked in the period under consideration.
    pub work_days: Option<i64>,
}

impl FeedbackPayload {
    /// Runs field-level constraint checking over the raw payload.
    ///
    /// Checks presence of every required field and the value ranges of
    /// `salary` and `workDays`. Enum membership is deliberately not checked
    /// here: an out-of-set value is a different failure class, detected by
    /// [`validate`](crate::validation::validate).
    pub fn bind(&self) -> BindingOutcome {
        let mut outcome = BindingOutcome::default();

        match self.uid.as_deref() {
            None => outcome.push_error("uid", "is required"),
            Some(uid) if uid.trim().is_empty() => outcome.push_error("uid", "must not be blank"),
            Some(_) => {}
        }

        match self.operation_uid.as_deref() {
            None => outcome.push_error("operationUid", "is required"),
            Some(operation_uid) if operation_uid.trim().is_empty() => {
                outcome.push_error("operationUid", "must not be blank");
            }
            Some(_) => {}
        }

        if self.system_name.is_none() {
            outcome.push_error("systemName", "is required");
        }

        if self.position.is_none() {
            outcome.push_error("position", "is required");
        }

        match self.salary {
            None => outcome.push_error("salary", "is required"),
            Some(salary) if salary < Decimal::ZERO => {
                outcome.push_error("salary", "must not be negative");
            }
            Some(_) => {}
        }

        if self.bonus.is_none() {
            outcome.push_error("bonus", "is required");
        }

        match self.work_days {
            None => outcome.push_error("workDays", "is required"),
            Some(work_days) if work_days < 0 => {
                outcome.push_error("workDays", "must not be negative");
            }
            Some(work_days) if u32::try_from(work_days).is_err() => {
                outcome.push_error("workDays", "is out of range");
            }
            Some(_) => {}
        }

        outcome
    }

    /// Echoes the sender identity when the payload carries a known code.
    pub fn parsed_system_name(&self) -> Option<Systems> {
        self.system_name.as_deref().and_then(Systems::from_code)
    }
}
