//! Employee profile model and related types.
//!
//! This module defines the EmployeeProfile struct and EmploymentCategory
//! enum mirroring the records the external employee registry exposes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The employment arrangement driving the bonus rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Permanent staff.
    Permanent,
    /// Staff within their probation period.
    Probation,
    /// Daily workers paid per engagement.
    DailyWorker,
}

impl FromStr for EmploymentCategory {
    type Err = std::convert::Infallible;

    /// Parses a registry category string.
    ///
    /// Unrecognized strings map to `Permanent`, which carries the default
    /// bonus rate. Registry data is outside this engine's control, so an
    /// unknown category must not be a hard failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "probation" => EmploymentCategory::Probation,
            "daily_worker" => EmploymentCategory::DailyWorker,
            _ => EmploymentCategory::Permanent,
        })
    }
}

/// An employee record as resolved from the external registry.
///
/// The engine only reads these; the registry owns creation and mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL for leaderboard display.
    pub avatar_url: String,
    /// The employment category driving the bonus rate.
    pub category: EmploymentCategory,
}
