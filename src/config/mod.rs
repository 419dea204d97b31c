//! Bonus-rate configuration for the Incentive & Performance Scoring Engine.
//!
//! This module provides the per-category bonus rate table, its documented
//! defaults, the mutable runtime configuration surface, and loading from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use incentive_engine::config::ConfigLoader;
//!
//! let rates = ConfigLoader::load("./config/incentive").unwrap();
//! println!("Permanent rate: {}", rates.snapshot().permanent);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusRateConfig, BonusRates};
