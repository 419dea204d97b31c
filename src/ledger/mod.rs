//! The append-only point ledger.
//!
//! The ledger is the source of truth for all incentive data. Entries are
//! created exactly once by an awarding operation and are never edited or
//! deleted; aggregates, leaderboards, and EOTM results are recomputed from
//! snapshots of it on demand.

mod store;

pub use store::{InMemoryStore, LedgerStore};

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PointTransaction, TransactionKind};

/// The append-only sequence of point transactions.
///
/// A single writer lock serializes appends so that every snapshot observes a
/// consistent prefix of the ledger: all appends that completed before the
/// snapshot started, and none that started after.
///
/// # Examples
///
/// ```
/// use incentive_engine::ledger::PointLedger;
/// use incentive_engine::models::TransactionKind;
///
/// let ledger = PointLedger::new();
/// let tx = ledger
///     .award("emp_001", TransactionKind::TaskMaster, "All jobdesk tasks done")
///     .unwrap();
/// assert_eq!(tx.points, 3);
/// assert_eq!(ledger.snapshot().len(), 1);
/// ```
pub struct PointLedger {
    entries: RwLock<Vec<PointTransaction>>,
    store: Option<Arc<dyn LedgerStore>>,
}

impl PointLedger {
    /// Creates an empty in-memory ledger with no storage collaborator.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            store: None,
        }
    }

    /// Creates a ledger backed by a storage collaborator.
    ///
    /// Existing transactions are loaded from the store, and every subsequent
    /// append is persisted through it before becoming visible to readers.
    pub fn with_store(store: Arc<dyn LedgerStore>) -> EngineResult<Self> {
        let entries = store.load()?;
        Ok(Self {
            entries: RwLock::new(entries),
            store: Some(store),
        })
    }

    /// Appends a transaction stamped with the current instant.
    ///
    /// The timestamp is monotonic per ledger: it never precedes the timestamp
    /// of the previously appended transaction, even if the system clock steps
    /// backwards. The calendar `date` is derived from the timestamp in the
    /// local timezone, once, at append time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransaction` if `employee_id` is blank, or if `kind`
    /// carries a fixed point value and `points` does not match it. Returns
    /// `StorageError` if the storage collaborator rejects the append; the
    /// entry is not added in that case.
    pub fn append(
        &self,
        employee_id: &str,
        points: i64,
        kind: TransactionKind,
        reason: &str,
    ) -> EngineResult<PointTransaction> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let now = Utc::now();
        let timestamp = match entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        self.push_validated(&mut entries, employee_id, points, kind, reason, timestamp)
    }

    /// Appends a transaction with a caller-supplied timestamp.
    ///
    /// This is the backfill path used when importing historical awards or
    /// rehydrating from an external system. The timestamp is taken as-is and
    /// is exempt from the monotonicity guarantee of [`append`](Self::append).
    pub fn append_at(
        &self,
        employee_id: &str,
        points: i64,
        kind: TransactionKind,
        reason: &str,
        timestamp: DateTime<Utc>,
    ) -> EngineResult<PointTransaction> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        self.push_validated(&mut entries, employee_id, points, kind, reason, timestamp)
    }

    /// Appends a transaction using the kind's fixed point value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransaction` for kinds without a fixed value
    /// (`ManualAdjustment`, `EotmBonus`) — those must go through
    /// [`append`](Self::append) with an explicit amount.
    pub fn award(
        &self,
        employee_id: &str,
        kind: TransactionKind,
        reason: &str,
    ) -> EngineResult<PointTransaction> {
        let points = kind.fixed_points().ok_or_else(|| {
            EngineError::InvalidTransaction {
                field: "points".to_string(),
                message: format!("{:?} has no fixed point value; supply an amount", kind),
            }
        })?;
        self.append(employee_id, points, kind, reason)
    }

    /// Returns a consistent copy of all transactions appended so far.
    pub fn snapshot(&self) -> Vec<PointTransaction> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no transaction has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_validated(
        &self,
        entries: &mut Vec<PointTransaction>,
        employee_id: &str,
        points: i64,
        kind: TransactionKind,
        reason: &str,
        timestamp: DateTime<Utc>,
    ) -> EngineResult<PointTransaction> {
        if employee_id.trim().is_empty() {
            return Err(EngineError::InvalidTransaction {
                field: "employee_id".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        if let Some(fixed) = kind.fixed_points() {
            if points != fixed {
                return Err(EngineError::InvalidTransaction {
                    field: "points".to_string(),
                    message: format!("{:?} awards exactly {} points, got {}", kind, fixed, points),
                });
            }
        }

        let transaction = PointTransaction {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            points,
            kind,
            reason: reason.to_string(),
            timestamp,
            date: timestamp.with_timezone(&Local).date_naive(),
        };

        // Persist before exposing the entry to readers; a failed persist
        // leaves the in-memory ledger untouched.
        if let Some(store) = &self.store {
            store.persist(&transaction)?;
        }

        entries.push(transaction.clone());
        Ok(transaction)
    }
}

impl Default for PointLedger {
    fn default() -> Self {
        Self::new()
    }
}
