//! Configuration loading and management for the Residency Day-Counting Engine.
//!
//! This module provides functionality to load residency policies from YAML
//! files, including rolling caps, lookback lengths, fixed epochs, and the
//! day-counting rules.
//!
//! # Example
//!
//! ```no_run
//! use residency_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uk_settlement").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CountingRules, EpochStart, FixedEpochConfig, NegativeContributionRule, PolicyConfig,
    RemoteDayRule, RollingCaps,
};
