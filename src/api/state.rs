//! Application state for the Bonus Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::BonusResult;
use crate::modifier::{RequestModifier, ResponseModifier, request_modifier, response_modifier};

/// Shared application state.
///
/// Assembled once at startup from the loaded configuration and read-only
/// thereafter: the configuration itself plus the modifier strategies the
/// configuration selects by name.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// Response modifiers in application order.
    response_modifiers: Arc<Vec<Box<dyn ResponseModifier>>>,
    /// Request modifiers in application order; empty in the default wiring.
    request_modifiers: Arc<Vec<Box<dyn RequestModifier>>>,
}

impl AppState {
    /// Assembles application state from a loaded configuration.
    ///
    /// Fails when the configuration names a modifier strategy that does
    /// not exist, so a bad wiring is caught at startup rather than on the
    /// first request.
    pub fn new(config: ConfigLoader) -> BonusResult<Self> {
        let response_modifiers = config
            .service()
            .response_modifiers
            .iter()
            .map(|name| response_modifier(name))
            .collect::<BonusResult<Vec<_>>>()?;

        let request_modifiers = config
            .service()
            .request_modifiers
            .iter()
            .map(|name| request_modifier(name))
            .collect::<BonusResult<Vec<_>>>()?;

        Ok(Self {
            config: Arc::new(config),
            response_modifiers: Arc::new(response_modifiers),
            request_modifiers: Arc::new(request_modifiers),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured response modifiers in application order.
    pub fn response_modifiers(&self) -> &[Box<dyn ResponseModifier>] {
        &self.response_modifiers
    }

    /// Returns the configured request modifiers in application order.
    pub fn request_modifiers(&self) -> &[Box<dyn RequestModifier>] {
        &self.request_modifiers
    }
}
