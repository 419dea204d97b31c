//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the bonus-rate
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{BonusRateConfig, BonusRates};

/// Structure of the `rates.yaml` configuration file.
#[derive(Debug, Clone, Deserialize)]
struct RatesFile {
    bonus_rates: BonusRates,
}

/// Loads the bonus-rate configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/incentive/
/// └── rates.yaml   # bonus_rates: {permanent, probation, daily_worker}
/// ```
///
/// # Example
///
/// ```no_run
/// use incentive_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/incentive").unwrap();
/// let rates = config.snapshot();
/// println!("Permanent rate: {}", rates.permanent);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rates.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML or missing fields (`ConfigParseError`)
    /// - any rate is negative (`InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<BonusRateConfig> {
        let rates_path = path.as_ref().join("rates.yaml");
        let rates_file: RatesFile = Self::load_yaml(&rates_path)?;
        BonusRateConfig::new(rates_file.bonus_rates)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentCategory;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/incentive"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap();
        let rates = config.snapshot();
        assert_eq!(rates.permanent, Decimal::from(5000));
        assert_eq!(rates.probation, Decimal::from(3000));
        assert_eq!(rates.daily_worker, Decimal::from(2000));
    }

    #[test]
    fn test_loaded_config_supports_updates() {
        let config = ConfigLoader::load(config_path()).unwrap();
        config
            .update(EmploymentCategory::Probation, Decimal::from(3500))
            .unwrap();
        assert_eq!(config.snapshot().probation, Decimal::from(3500));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = std::env::temp_dir().join("incentive_engine_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("rates.yaml"), "bonus_rates: [not, a, map]").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
