//! HTTP request handlers for the Bonus Calculation Engine API.
//!
//! This module contains the handler for the feedback endpoint, which
//! drives a request through validation, bonus calculation, and the
//! response modifier chain.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Datelike, Utc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_annual_bonus, calculate_quarterly_bonus, quarter_from_month0};
use crate::models::{Codes, ErrorCodes, ErrorMessages, FeedbackResponse};
use crate::validation::validate;

use super::request::FeedbackPayload;
use super::response::classify_failure;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/feedback", post(feedback_handler))
        .with_state(state)
}

/// Handler for POST /feedback endpoint.
///
/// Builds the response skeleton first, so every path out of this function
/// returns the same payload shape: failures only change the outcome fields
/// and the HTTP status.
async fn feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackPayload>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    // An unreadable body flows through the same pipeline as a readable one:
    // the rejection detail becomes a binding error on an empty payload.
    let (payload, body_error) = match payload {
        Ok(Json(payload)) => (payload, None),
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %detail,
                "request body rejected"
            );
            (FeedbackPayload::default(), Some(detail))
        }
    };

    info!(
        correlation_id = %correlation_id,
        uid = payload.uid.as_deref().unwrap_or(""),
        operation_uid = payload.operation_uid.as_deref().unwrap_or(""),
        "processing feedback request"
    );

    let mut response = FeedbackResponse::skeleton(
        payload.uid.clone(),
        payload.operation_uid.clone(),
        payload.parsed_system_name(),
    );

    let mut outcome = payload.bind();
    if let Some(detail) = body_error {
        outcome.push_error("body", detail);
    }

    let request = match validate(&payload, &outcome) {
        Ok(request) => request,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "validation failed");
            let (status, error_code, error_message) = classify_failure(&err);
            return generate_error_response(
                response,
                error_code,
                error_message,
                status,
                correlation_id,
            );
        }
    };

    let now = Utc::now();
    let current_year = now.year();

    response.annual_bonus = match calculate_annual_bonus(
        request.position,
        request.salary,
        request.bonus,
        request.work_days,
        current_year,
        state.config().config(),
    ) {
        Ok(amount) => Some(amount),
        Err(err) => {
            // A calculator failure past validation is a defect in the wiring
            // or configuration, not a request failure.
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "annual bonus calculation failed"
            );
            return generate_error_response(
                response,
                ErrorCodes::UnknownException,
                ErrorMessages::Unknown,
                StatusCode::INTERNAL_SERVER_ERROR,
                correlation_id,
            );
        }
    };

    if request.position.is_manager() {
        let quarter = quarter_from_month0(now.month0());
        response.quarterly_bonus = match calculate_quarterly_bonus(
            request.position,
            request.salary,
            request.bonus,
            request.work_days,
            current_year,
            quarter,
            state.config().config(),
        ) {
            Ok(amount) => Some(amount),
            Err(err) => {
                error!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "quarterly bonus calculation failed"
                );
                return generate_error_response(
                    response,
                    ErrorCodes::UnknownException,
                    ErrorMessages::Unknown,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    correlation_id,
                );
            }
        };
    }

    // Request-modifier stage: dormant unless strategies are configured. The
    // rewritten request feeds the downstream notifier, never the response.
    if !state.request_modifiers().is_empty() {
        let mut rewritten = request.clone();
        for modifier in state.request_modifiers() {
            rewritten = modifier.modify(rewritten);
        }
        debug!(
            correlation_id = %correlation_id,
            system_name = %rewritten.system_name,
            "request modifiers applied"
        );
    }

    let mut modified = response;
    for modifier in state.response_modifiers() {
        modified = modifier.modify(modified);
    }

    info!(
        correlation_id = %correlation_id,
        uid = %request.uid,
        annual_bonus = %modified.annual_bonus.unwrap_or_default(),
        "feedback response ready"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(modified),
    )
        .into_response()
}

/// Stamps the failure outcome onto the response skeleton and emits it.
fn generate_error_response(
    mut response: FeedbackResponse,
    error_code: ErrorCodes,
    error_message: ErrorMessages,
    status: StatusCode,
    correlation_id: Uuid,
) -> axum::response::Response {
    response.code = Codes::Failed;
    response.error_code = error_code;
    response.error_message = error_message;

    info!(
        correlation_id = %correlation_id,
        error_code = ?response.error_code,
        status = %status,
        "response error data added"
    );

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/bonus").expect("Failed to load config");
        AppState::new(config).expect("Failed to assemble state")
    }

    fn create_valid_body() -> serde_json::Value {
        json!({
            "uid": "msg_001",
            "operationUid": "op_001",
            "systemName": "FIRST_SERVICE",
            "position": "PM",
            "salary": "100000.00",
            "bonus": "3.0",
            "workDays": 250
        })
    }

    async fn post_feedback(
        router: Router,
        body: String,
    ) -> (StatusCode, FeedbackResponse) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/feedback")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: FeedbackResponse = serde_json::from_slice(&body).unwrap();

        (status, parsed)
    }

    #[tokio::test]
    async fn test_valid_request_returns_200_with_bonuses() {
        let router = create_router(create_test_state());

        let (status, response) =
            post_feedback(router, create_valid_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.code, Codes::Success);
        assert_eq!(response.error_code, ErrorCodes::Empty);
        assert!(response.annual_bonus.is_some());
        assert!(response.quarterly_bonus.is_some());
        assert_eq!(response.uid.as_deref(), Some("msg_001"));
        assert_eq!(response.operation_uid.as_deref(), Some("op_001"));
    }

    #[tokio::test]
    async fn test_missing_field_returns_400_validation() {
        let router = create_router(create_test_state());

        let mut body = create_valid_body();
        body.as_object_mut().unwrap().remove("salary");

        let (status, response) = post_feedback(router, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.code, Codes::Failed);
        assert_eq!(response.error_code, ErrorCodes::ValidationException);
        assert_eq!(response.error_message, ErrorMessages::Validation);
        assert!(response.annual_bonus.is_none());
        assert_eq!(response.uid.as_deref(), Some("msg_001"));
    }

    #[tokio::test]
    async fn test_unknown_position_returns_500_unsupported() {
        let router = create_router(create_test_state());

        let mut body = create_valid_body();
        body["position"] = json!("INTERN");

        let (status, response) = post_feedback(router, body.to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.code, Codes::Failed);
        assert_eq!(response.error_code, ErrorCodes::UnsupportedException);
        assert_eq!(response.error_message, ErrorMessages::Unsupported);
        assert!(response.annual_bonus.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400_with_skeleton() {
        let router = create_router(create_test_state());

        let (status, response) = post_feedback(router, "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.code, Codes::Failed);
        assert_eq!(response.error_code, ErrorCodes::ValidationException);
        assert!(response.uid.is_none());
        assert!(!response.system_time.is_empty());
    }

    #[tokio::test]
    async fn test_non_manager_gets_no_quarterly_bonus() {
        let router = create_router(create_test_state());

        let mut body = create_valid_body();
        body["position"] = json!("DEV");

        let (status, response) = post_feedback(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(response.annual_bonus.is_some());
        assert!(response.quarterly_bonus.is_none());
    }
}
