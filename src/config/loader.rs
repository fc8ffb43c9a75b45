//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration and bonus coefficient tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{BonusError, BonusResult};
use crate::models::Positions;

use super::types::{BonusConfig, BonusTable, QUARTERS_PER_YEAR, ServiceConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them for completeness before the server starts serving.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/bonus/
/// ├── service.yaml     # Service metadata and modifier selection
/// └── tables/
///     ├── 2020.yaml    # Coefficients effective from this year
///     └── 2024.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use bonus_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bonus").unwrap();
/// let table = loader.config().table_for_year(2024).unwrap();
/// println!("Quarter weights: {:?}", table.quarter_weights);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BonusConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/bonus")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A table omits a known position, carries the wrong number of quarter
    ///   weights, or sets a qualifying-day threshold to zero
    pub fn load<P: AsRef<Path>>(path: P) -> BonusResult<Self> {
        let path = path.as_ref();

        let service_path = path.join("service.yaml");
        let service = Self::load_yaml::<ServiceConfig>(&service_path)?;

        let tables_dir = path.join("tables");
        let tables = Self::load_tables(&tables_dir)?;

        Ok(Self {
            config: BonusConfig::new(service, tables),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BonusResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BonusError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BonusError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all coefficient tables from the tables directory.
    fn load_tables(tables_dir: &Path) -> BonusResult<Vec<BonusTable>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(BonusError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| BonusError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| BonusError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<BonusTable>(&path)?;
                Self::check_table(&table, &path)?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(BonusError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Validates a single coefficient table.
    ///
    /// Completeness is enforced here so that calculator-side lookups can
    /// only fail on a configuration edited after load.
    fn check_table(table: &BonusTable, path: &Path) -> BonusResult<()> {
        let parse_error = |message: String| BonusError::ConfigParse {
            path: path.display().to_string(),
            message,
        };

        if table.quarter_weights.len() != QUARTERS_PER_YEAR {
            return Err(parse_error(format!(
                "expected {} quarter weights, found {}",
                QUARTERS_PER_YEAR,
                table.quarter_weights.len()
            )));
        }

        if table.annual_qualifying_days == 0 {
            return Err(parse_error("annual_qualifying_days must not be zero".to_string()));
        }

        if table.quarterly_qualifying_days == 0 {
            return Err(parse_error(
                "quarterly_qualifying_days must not be zero".to_string(),
            ));
        }

        for position in Positions::ALL {
            if !table.positions.contains_key(position.code()) {
                return Err(parse_error(format!(
                    "missing coefficients for position '{}'",
                    position.code()
                )));
            }
        }

        Ok(())
    }

    /// Wraps an already-built configuration, bypassing the filesystem.
    #[cfg(test)]
    pub(crate) fn from_config(config: BonusConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &BonusConfig {
        &self.config
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        self.config.service()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/bonus"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.service().name, "Bonus Calculation Engine");
        assert_eq!(loader.service().response_modifiers, vec!["system_time"]);
        assert!(loader.service().request_modifiers.is_empty());
    }

    #[test]
    fn test_every_table_covers_every_position() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        for table in loader.config().tables() {
            for position in Positions::ALL {
                assert!(
                    table.coefficients(position).is_ok(),
                    "table {} misses {}",
                    table.effective_year,
                    position.code()
                );
            }
        }
    }

    #[test]
    fn test_table_selection_by_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.config().table_for_year(2023).unwrap();
        assert_eq!(table.effective_year, 2020);

        let table = loader.config().table_for_year(2026).unwrap();
        assert_eq!(table.effective_year, 2024);
    }

    #[test]
    fn test_pm_quarterly_coefficient_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.config().table_for_year(2023).unwrap();
        let coefficients = table.coefficients(Positions::Pm).unwrap();
        assert_eq!(coefficients.quarterly, dec("2.6"));
    }

    #[test]
    fn test_quarter_weights_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.config().table_for_year(2023).unwrap();
        assert_eq!(
            table.quarter_weights,
            vec![dec("1.2"), dec("1.8"), dec("2.4"), dec("3.0")]
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(BonusError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_check_table_rejects_missing_position() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mut table = loader.config().table_for_year(2023).unwrap().clone();
        table.positions.remove("DIRECTOR");

        let result = ConfigLoader::check_table(&table, Path::new("tables/test.yaml"));
        match result {
            Err(BonusError::ConfigParse { message, .. }) => {
                assert!(message.contains("DIRECTOR"));
            }
            other => panic!("Expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn test_check_table_rejects_short_quarter_weights() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mut table = loader.config().table_for_year(2023).unwrap().clone();
        table.quarter_weights.pop();

        let result = ConfigLoader::check_table(&table, Path::new("tables/test.yaml"));
        match result {
            Err(BonusError::ConfigParse { message, .. }) => {
                assert!(message.contains("quarter weights"));
            }
            other => panic!("Expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn test_check_table_rejects_zero_qualifying_days() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mut table = loader.config().table_for_year(2023).unwrap().clone();
        table.quarterly_qualifying_days = 0;

        let result = ConfigLoader::check_table(&table, Path::new("tables/test.yaml"));
        assert!(result.is_err());
    }
}
