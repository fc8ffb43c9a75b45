//! Post-processing modifier strategies.
//!
//! Modifiers are small interchangeable strategies applied after calculation.
//! Each strategy has a name; the service configuration lists the names to
//! assemble at startup, so swapping a strategy never touches the request
//! orchestration. Response modifiers run on the live path; request
//! modifiers are wired but dormant unless configured.

mod request;
mod response;

pub use request::{
    DownstreamNotifier, LogNotifier, RequestModifier, RewriteSystemNameModifier, request_modifier,
};
pub use response::{ResponseModifier, SystemTimeResponseModifier, response_modifier};
