//! Domain representation of a validated feedback request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Positions, Systems};

/// A feedback request that passed validation.
///
/// All fields are present and well-typed; the enums are guaranteed to be
/// within their known sets. Instances are owned by the handling of a single
/// call and never shared across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// Unique identifier of the message.
    pub uid: String,
    /// Unique identifier of the operation.
    pub operation_uid: String,
    /// Identity of the sending system.
    pub system_name: Systems,
    /// The employee's position.
    pub position: Positions,
    /// The employee's salary. Never negative.
    pub salary: Decimal,
    /// The bonus multiplier.
    pub bonus: Decimal,
    /// Days worked in the period under consideration.
    pub work_days: u32,
}
