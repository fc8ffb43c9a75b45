//! Configuration types for bonus calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{BonusError, BonusResult};
use crate::models::Positions;

/// Number of quarters in a year; every table must carry this many weights.
pub(crate) const QUARTERS_PER_YEAR: usize = 4;

/// Service-level configuration from `service.yaml`.
///
/// Carries identifying metadata and the modifier strategies to assemble at
/// startup, each selected by name.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// The human-readable name of the service.
    pub name: String,
    /// The version or effective date of this configuration.
    pub version: String,
    /// Response modifier strategies, applied in order after calculation.
    pub response_modifiers: Vec<String>,
    /// Request modifier strategies. Empty by default: the request-rewriting
    /// stage is wired but deliberately not selected.
    #[serde(default)]
    pub request_modifiers: Vec<String>,
}

/// Bonus coefficients for a single position.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionCoefficients {
    /// Multiplier applied to the annual bonus.
    pub annual: Decimal,
    /// Multiplier applied to the quarterly bonus.
    pub quarterly: Decimal,
}

/// Coefficient table effective from a given year.
///
/// Loaded from one file under `tables/`; the most recent table whose
/// `effective_year` is on or before the calculation year applies.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusTable {
    /// The first year these coefficients apply to.
    pub effective_year: i32,
    /// Worked days required for the full annual bonus; fewer days prorate it.
    pub annual_qualifying_days: u32,
    /// Worked days required for the full quarterly bonus.
    pub quarterly_qualifying_days: u32,
    /// Per-quarter weight, indexed by zero-based quarter.
    pub quarter_weights: Vec<Decimal>,
    /// Map of position code to coefficients.
    pub positions: HashMap<String, PositionCoefficients>,
}

impl BonusTable {
    /// Returns the coefficients for a position.
    pub fn coefficients(&self, position: Positions) -> BonusResult<&PositionCoefficients> {
        self.positions
            .get(position.code())
            .ok_or_else(|| BonusError::CoefficientsNotFound {
                code: position.code().to_string(),
                year: self.effective_year,
            })
    }

    /// Returns the weight for a zero-based quarter.
    pub fn quarter_weight(&self, quarter: u32) -> BonusResult<Decimal> {
        self.quarter_weights
            .get(quarter as usize)
            .copied()
            .ok_or_else(|| BonusError::Calculation {
                message: format!("quarter {quarter} is out of range"),
            })
    }
}

/// The complete configuration loaded from a config directory.
///
/// Aggregates the service configuration and all coefficient tables, the
/// latter sorted by effective year ascending.
#[derive(Debug, Clone)]
pub struct BonusConfig {
    /// Service metadata and modifier wiring.
    service: ServiceConfig,
    /// Coefficient tables by effective year (sorted oldest first).
    tables: Vec<BonusTable>,
}

impl BonusConfig {
    /// Creates a new BonusConfig from its component parts.
    pub fn new(service: ServiceConfig, tables: Vec<BonusTable>) -> Self {
        let mut sorted_tables = tables;
        sorted_tables.sort_by_key(|table| table.effective_year);
        Self {
            service,
            tables: sorted_tables,
        }
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns all coefficient tables.
    pub fn tables(&self) -> &[BonusTable] {
        &self.tables
    }

    /// Returns the most recent table effective on or before the given year.
    pub fn table_for_year(&self, year: i32) -> BonusResult<&BonusTable> {
        self.tables
            .iter()
            .rfind(|table| table.effective_year <= year)
            .ok_or(BonusError::TableNotFound { year })
    }
}
