//! Point transaction model and related types.
//!
//! This module defines the PointTransaction record and the TransactionKind
//! enum for the append-only incentive ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of event that awarded (or deducted) points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Check-in at least 30 minutes before shift start.
    EarlyBird,
    /// Completion of all assigned jobdesk tasks.
    TaskMaster,
    /// A stock audit finalized with no discrepancies.
    PerfectAudit,
    /// A manual HR adjustment; the amount is chosen by the caller.
    ManualAdjustment,
    /// Bonus points granted to an Employee-of-the-Month winner.
    EotmBonus,
}

impl TransactionKind {
    /// Returns the fixed point value for kinds whose value is set by policy.
    ///
    /// `ManualAdjustment` and `EotmBonus` carry caller-chosen amounts and
    /// return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use incentive_engine::models::TransactionKind;
    ///
    /// assert_eq!(TransactionKind::EarlyBird.fixed_points(), Some(2));
    /// assert_eq!(TransactionKind::TaskMaster.fixed_points(), Some(3));
    /// assert_eq!(TransactionKind::PerfectAudit.fixed_points(), Some(5));
    /// assert_eq!(TransactionKind::ManualAdjustment.fixed_points(), None);
    /// ```
    pub fn fixed_points(&self) -> Option<i64> {
        match self {
            TransactionKind::EarlyBird => Some(2),
            TransactionKind::TaskMaster => Some(3),
            TransactionKind::PerfectAudit => Some(5),
            TransactionKind::ManualAdjustment | TransactionKind::EotmBonus => None,
        }
    }
}

/// One immutable, signed point-awarding event in the ledger.
///
/// Transactions are created exactly once by an awarding operation and are
/// never edited or deleted afterwards. The `date` field is derived from the
/// timestamp in the local timezone at append time and is the value period
/// aggregation filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointTransaction {
    /// Unique identifier for the transaction.
    pub id: Uuid,
    /// The employee the points were awarded to.
    pub employee_id: String,
    /// The signed point amount.
    pub points: i64,
    /// The kind of event that produced the transaction.
    pub kind: TransactionKind,
    /// Free-text reason recorded with the award.
    pub reason: String,
    /// The instant the transaction was appended.
    pub timestamp: DateTime<Utc>,
    /// The local calendar date derived from `timestamp` at append time.
    pub date: NaiveDate,
}
