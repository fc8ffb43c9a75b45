//! HTTP API module for the Bonus Calculation Engine.
//!
//! This module provides the `POST /feedback` endpoint that validates a
//! compensation feedback request, computes bonuses, and returns the
//! enriched response.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::FeedbackPayload;
pub use response::classify_failure;
pub use state::AppState;
