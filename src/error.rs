//! Error types for the Incentive & Performance Scoring Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during incentive processing.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Incentive & Performance Scoring Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use incentive_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bonus rate update was rejected.
    #[error("Invalid bonus rate {rate} for category '{category}': rates must be non-negative")]
    InvalidRate {
        /// The employment category the update targeted.
        category: String,
        /// The rejected rate value.
        rate: Decimal,
    },

    /// A period had an out-of-range month.
    #[error("Invalid period: month {month} is not in 1..=12")]
    InvalidPeriod {
        /// The rejected month value.
        month: u32,
    },

    /// A point transaction failed boundary validation.
    #[error("Invalid transaction field '{field}': {message}")]
    InvalidTransaction {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The ledger storage collaborator failed.
    #[error("Ledger storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
