//! The ledger storage collaborator interface.
//!
//! The engine does not design a storage medium; callers provide one through
//! this narrow repository interface. Every append is persisted through the
//! store before it becomes visible to readers.

use std::sync::{PoisonError, RwLock};

use crate::error::EngineResult;
use crate::models::PointTransaction;

/// Durable storage for ledger transactions.
pub trait LedgerStore: Send + Sync {
    /// Loads all previously persisted transactions, oldest first.
    fn load(&self) -> EngineResult<Vec<PointTransaction>>;

    /// Persists one appended transaction.
    fn persist(&self, transaction: &PointTransaction) -> EngineResult<()>;
}

/// A process-local store, useful for tests and self-contained deployments.
pub struct InMemoryStore {
    transactions: RwLock<Vec<PointTransaction>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            transactions: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryStore {
    fn load(&self) -> EngineResult<Vec<PointTransaction>> {
        Ok(self
            .transactions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn persist(&self, transaction: &PointTransaction) -> EngineResult<()> {
        self.transactions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(transaction.clone());
        Ok(())
    }
}
