//! Request modifier strategies.
//!
//! The request-rewriting stage exists in the pipeline but the default
//! service configuration selects no strategy for it, so nothing here runs
//! on the live path unless explicitly configured.

use tracing::info;

use crate::error::{BonusError, BonusResult};
use crate::models::{FeedbackRequest, Systems};

/// Receives a rewritten request for downstream delivery.
///
/// Fire-and-forget: implementations must not block the caller, and a
/// delivery failure is the downstream's problem, never reflected in the
/// response returned to the original caller.
pub trait DownstreamNotifier: Send + Sync {
    /// Hands a rewritten request to the downstream system.
    fn notify(&self, request: &FeedbackRequest);
}

/// A [`DownstreamNotifier`] that only records the hand-off in the log.
///
/// Stands in for actual transport, which belongs to an external
/// collaborator.
pub struct LogNotifier;

impl DownstreamNotifier for LogNotifier {
    fn notify(&self, request: &FeedbackRequest) {
        info!(
            uid = %request.uid,
            operation_uid = %request.operation_uid,
            system_name = %request.system_name,
            "forwarding rewritten request downstream"
        );
    }
}

/// A strategy applied to a validated request before response modification.
pub trait RequestModifier: Send + Sync {
    /// The name this strategy is selected by in the service configuration.
    fn name(&self) -> &'static str;

    /// Applies the strategy to a request.
    fn modify(&self, request: FeedbackRequest) -> FeedbackRequest;
}

/// Rewrites `systemName` to `FIRST_SERVICE` and notifies the downstream.
pub struct RewriteSystemNameModifier {
    notifier: Box<dyn DownstreamNotifier>,
}

impl RewriteSystemNameModifier {
    /// The configuration name of this strategy.
    pub const NAME: &'static str = "rewrite_system_name";

    /// Creates the strategy with the given downstream notifier.
    pub fn new(notifier: Box<dyn DownstreamNotifier>) -> Self {
        Self { notifier }
    }
}

impl RequestModifier for RewriteSystemNameModifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn modify(&self, mut request: FeedbackRequest) -> FeedbackRequest {
        request.system_name = Systems::FirstService;
        self.notifier.notify(&request);
        request
    }
}

/// Resolves a request modifier strategy by its configuration name.
pub fn request_modifier(name: &str) -> BonusResult<Box<dyn RequestModifier>> {
    match name {
        RewriteSystemNameModifier::NAME => {
            Ok(Box::new(RewriteSystemNameModifier::new(Box::new(LogNotifier))))
        }
        _ => Err(BonusError::UnknownModifier {
            name: name.to_string(),
        }),
    }
}
