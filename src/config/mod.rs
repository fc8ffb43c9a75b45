//! Configuration loading and management for the Bonus Calculation Engine.
//!
//! This module provides functionality to load the service configuration and
//! the effective-dated bonus coefficient tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use bonus_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bonus").unwrap();
//! println!("Loaded service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusConfig, BonusTable, PositionCoefficients, ServiceConfig};
