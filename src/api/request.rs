//! Request types for the Incentive & Performance Scoring Engine API.
//!
//! This module defines the JSON request structures and query parameters for
//! the engine endpoints.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmploymentCategory, TransactionKind};

/// Request body for `POST /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendRequest {
    /// The employee to award points to.
    pub employee_id: String,
    /// The kind of awarding event.
    pub kind: TransactionKind,
    /// The signed point amount. Optional for kinds with a fixed value
    /// (early_bird, task_master, perfect_audit); required for
    /// manual_adjustment and eotm_bonus.
    #[serde(default)]
    pub points: Option<i64>,
    /// Free-text reason recorded with the award.
    pub reason: String,
    /// Optional backfill timestamp. When absent the ledger stamps the
    /// current instant.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Request body for `POST /check-ins`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The employee checking in.
    pub employee_id: String,
    /// The check-in instant.
    pub checked_in_at: DateTime<Utc>,
    /// The scheduled shift start, when a schedule exists for the day.
    #[serde(default)]
    pub shift_start: Option<NaiveTime>,
}

/// Request body for `PUT /config/bonus-rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateUpdateRequest {
    /// The employment category to update.
    pub category: EmploymentCategory,
    /// The new currency-per-point rate.
    pub rate: Decimal,
}

/// Query parameters selecting an aggregation period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// The calendar month (1-based).
    pub month: u32,
    /// The calendar year.
    pub year: i32,
}
