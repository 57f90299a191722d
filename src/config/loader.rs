//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading residency
//! policies from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to a residency policy.
///
/// # Directory Structure
///
/// ```text
/// config/uk_settlement/
/// └── policy.yaml   # Caps, lookback lengths, fixed epochs, counting rules
/// ```
///
/// # Example
///
/// ```no_run
/// use residency_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uk_settlement")?;
/// println!("Rolling cap: {}", loader.policy().caps.days_outside);
/// # Ok::<(), residency_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads `policy.yaml` from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file is missing or unreadable
    /// - [`EngineError::ConfigParseError`] if the file is not a valid policy
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;

        debug!(
            policy = %policy.name,
            lookback_days = policy.lookback_days,
            fixed_epochs = policy.fixed_epochs.len(),
            "Loaded residency policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an already-built policy.
    pub fn from_policy(policy: PolicyConfig) -> Self {
        Self { policy }
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

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EpochStart, NegativeContributionRule, RemoteDayRule};
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/uk_settlement"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let policy = loader.policy();
        assert_eq!(policy.name, "UK settlement");
        assert_eq!(policy.lookback_days, 365);
        assert_eq!(policy.caps.days_outside, 180);
        assert_eq!(policy.caps.remote_working_days, 90);
        assert_eq!(policy.all_time_cap, 450);
        assert_eq!(policy.projection_days, 180);
        assert_eq!(policy.max_series_days, 3660);
    }

    #[test]
    fn test_counting_rules_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = loader.policy().counting;

        assert_eq!(rules.remote_days, RemoteDayRule::BoundaryDaysIncluded);
        assert_eq!(rules.negative_contributions, NegativeContributionRule::Allow);
    }

    #[test]
    fn test_fixed_epochs_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let epochs = &loader.policy().fixed_epochs;

        assert_eq!(epochs.len(), 2);
        assert_eq!(epochs[0].label, "five_year");
        assert_eq!(epochs[0].start, EpochStart::Lookback { lookback_days: 1825 });
        assert_eq!(epochs[0].cap, 450);
        assert_eq!(epochs[1].label, "since_visa_grant");
        assert_eq!(
            epochs[1].start,
            EpochStart::Date {
                date: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap()
            }
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_policy_wraps_default() {
        let loader = ConfigLoader::from_policy(PolicyConfig::default());
        assert_eq!(loader.policy(), &PolicyConfig::default());
    }
}
