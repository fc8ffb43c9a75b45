//! Request validation.
//!
//! Field-level constraint checking happens upstream in the API layer and
//! yields a [`BindingOutcome`]; this module classifies that outcome together
//! with the raw payload as valid, structurally invalid, or carrying an
//! unsupported enumerated value, and on success parses the payload into the
//! domain [`FeedbackRequest`].

use crate::api::FeedbackPayload;
use crate::error::{BonusError, BonusResult};
use crate::models::{FeedbackRequest, Positions, Systems};

/// A single failed field-level constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The wire name of the offending field.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

/// The outcome of field-level constraint checking.
///
/// An empty error list means every required field was present and within
/// range; it says nothing about enum membership, which is classified
/// separately by [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingOutcome {
    errors: Vec<FieldError>,
}

impl BindingOutcome {
    /// Records a failed constraint.
    pub fn push_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Returns true when no constraint failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the recorded field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Renders all failures as a single detail string.
    pub fn details(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validates a payload against its binding outcome.
///
/// Classification runs in fixed priority order and stops at the first
/// failure:
/// 1. any field error in the outcome fails with
///    [`BonusError::ValidationFailed`];
/// 2. a present enum field whose value is outside the known set fails with
///    [`BonusError::UnsupportedValue`];
/// 3. otherwise the parsed domain request is returned.
///
/// Internal inconsistencies (a valid outcome over a payload with missing
/// fields) surface as [`BonusError::Unknown`] for the caller to classify.
pub fn validate(payload: &FeedbackPayload, outcome: &BindingOutcome) -> BonusResult<FeedbackRequest> {
    if !outcome.is_valid() {
        return Err(BonusError::ValidationFailed {
            details: outcome.details(),
        });
    }

    let (
        Some(uid),
        Some(operation_uid),
        Some(system_name),
        Some(position),
        Some(salary),
        Some(bonus),
        Some(work_days),
    ) = (
        payload.uid.as_deref(),
        payload.operation_uid.as_deref(),
        payload.system_name.as_deref(),
        payload.position.as_deref(),
        payload.salary,
        payload.bonus,
        payload.work_days,
    )
    else {
        return Err(BonusError::Unknown {
            message: "binding outcome disagrees with payload contents".to_string(),
        });
    };

    let system_name =
        Systems::from_code(system_name).ok_or_else(|| BonusError::UnsupportedValue {
            field: "systemName".to_string(),
            value: system_name.to_string(),
        })?;

    let position = Positions::from_code(position).ok_or_else(|| BonusError::UnsupportedValue {
        field: "position".to_string(),
        value: position.to_string(),
    })?;

    let work_days = u32::try_from(work_days).map_err(|_| BonusError::Unknown {
        message: format!("workDays {work_days} escaped range checking"),
    })?;

    Ok(FeedbackRequest {
        uid: uid.to_string(),
        operation_uid: operation_uid.to_string(),
        system_name,
        position,
        salary,
        bonus,
        work_days,
    })
}
