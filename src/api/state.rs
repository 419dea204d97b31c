//! Application state for the Incentive & Performance Scoring Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::BonusRateConfig;
use crate::ledger::PointLedger;
use crate::sources::{EmployeeDirectory, ReviewSource};

/// Shared application state.
///
/// Holds the ledger plus the injected external collaborators. The ledger is
/// the only mutable shared resource the engine owns; the directory and review
/// store are read-only snapshots from its perspective.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<PointLedger>,
    directory: Arc<dyn EmployeeDirectory>,
    reviews: Arc<dyn ReviewSource>,
    rates: Arc<BonusRateConfig>,
}

impl AppState {
    /// Creates a new application state from its collaborators.
    pub fn new(
        ledger: Arc<PointLedger>,
        directory: Arc<dyn EmployeeDirectory>,
        reviews: Arc<dyn ReviewSource>,
        rates: Arc<BonusRateConfig>,
    ) -> Self {
        Self {
            ledger,
            directory,
            reviews,
            rates,
        }
    }

    /// Returns the point ledger.
    pub fn ledger(&self) -> &PointLedger {
        &self.ledger
    }

    /// Returns the employee registry.
    pub fn directory(&self) -> &dyn EmployeeDirectory {
        self.directory.as_ref()
    }

    /// Returns the performance review source.
    pub fn reviews(&self) -> &dyn ReviewSource {
        self.reviews.as_ref()
    }

    /// Returns the bonus-rate configuration.
    pub fn rates(&self) -> &BonusRateConfig {
        &self.rates
    }
}
