//! Core data models for the Bonus Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod codes;
mod positions;
mod request;
mod response;
mod systems;

pub use codes::{Codes, ErrorCodes, ErrorMessages};
pub use positions::Positions;
pub use request::FeedbackRequest;
pub use response::{FeedbackResponse, SYSTEM_TIME_FORMAT, format_system_time};
pub use systems::Systems;
