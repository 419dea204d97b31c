//! Derived leaderboard and Employee-of-the-Month result types.
//!
//! These are computed on demand from the ledger and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display name used when an employee id is missing from the registry.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// Avatar used when an employee id is missing from the registry.
pub const PLACEHOLDER_AVATAR: &str = "/assets/avatar-placeholder.png";

/// One ranked row of a period leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// Display name resolved from the registry, or "Unknown".
    pub name: String,
    /// Avatar URL resolved from the registry, or a placeholder.
    pub avatar_url: String,
    /// Sum of the employee's points within the period.
    pub total_points: i64,
    /// 1-based rank assigned after sorting, with no gaps.
    pub rank: u32,
}

/// The composite Employee-of-the-Month winner for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EotmResult {
    /// The winning employee.
    pub employee_id: String,
    /// Display name resolved from the registry, or "Unknown".
    pub name: String,
    /// Avatar URL resolved from the registry, or a placeholder.
    pub avatar_url: String,
    /// Ledger point total for the period.
    pub total_points: i64,
    /// Mean overall score of the period's finalized reviews (0 if none).
    pub avg_review_score: Decimal,
    /// The blended final score that decided the winner.
    pub final_score: Decimal,
}
