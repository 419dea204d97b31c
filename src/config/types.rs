//! Bonus-rate configuration types.

use std::sync::{PoisonError, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentCategory;

/// Currency-per-point rates keyed by employment category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusRates {
    /// Rate for permanent staff.
    pub permanent: Decimal,
    /// Rate for staff on probation.
    pub probation: Decimal,
    /// Rate for daily workers.
    pub daily_worker: Decimal,
}

impl BonusRates {
    /// Returns the rate for a category.
    pub fn rate_for(&self, category: EmploymentCategory) -> Decimal {
        match category {
            EmploymentCategory::Permanent => self.permanent,
            EmploymentCategory::Probation => self.probation,
            EmploymentCategory::DailyWorker => self.daily_worker,
        }
    }

    /// Returns an error if any rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (category, rate) in [
            ("permanent", self.permanent),
            ("probation", self.probation),
            ("daily_worker", self.daily_worker),
        ] {
            if rate < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    category: category.to_string(),
                    rate,
                });
            }
        }
        Ok(())
    }
}

impl Default for BonusRates {
    /// The documented default rates: PERMANENT=5000, PROBATION=3000,
    /// DAILY_WORKER=2000.
    fn default() -> Self {
        Self {
            permanent: Decimal::from(5000),
            probation: Decimal::from(3000),
            daily_worker: Decimal::from(2000),
        }
    }
}

/// The mutable runtime bonus-rate configuration.
///
/// Updates are single-key, last-writer-wins replacements behind one lock;
/// `reset_to_defaults` swaps the whole table in one atomic operation.
/// Readers take value snapshots, never references into the lock.
#[derive(Debug)]
pub struct BonusRateConfig {
    rates: RwLock<BonusRates>,
}

impl BonusRateConfig {
    /// Creates a configuration holding the given rates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` if any rate is negative.
    pub fn new(rates: BonusRates) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self {
            rates: RwLock::new(rates),
        })
    }

    /// Returns a copy of the current rate table.
    pub fn snapshot(&self) -> BonusRates {
        *self.rates.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current rate for one category.
    pub fn rate_for(&self, category: EmploymentCategory) -> Decimal {
        self.snapshot().rate_for(category)
    }

    /// Replaces the rate for one category.
    ///
    /// Negative rates are rejected; zero is accepted (it suspends future
    /// bonuses for the category without touching the ledger).
    pub fn update(&self, category: EmploymentCategory, rate: Decimal) -> EngineResult<()> {
        if rate < Decimal::ZERO {
            let category = match category {
                EmploymentCategory::Permanent => "permanent",
                EmploymentCategory::Probation => "probation",
                EmploymentCategory::DailyWorker => "daily_worker",
            };
            return Err(EngineError::InvalidRate {
                category: category.to_string(),
                rate,
            });
        }

        let mut rates = self.rates.write().unwrap_or_else(PoisonError::into_inner);
        match category {
            EmploymentCategory::Permanent => rates.permanent = rate,
            EmploymentCategory::Probation => rates.probation = rate,
            EmploymentCategory::DailyWorker => rates.daily_worker = rate,
        }
        Ok(())
    }

    /// Restores the documented default rates in one atomic replacement.
    pub fn reset_to_defaults(&self) {
        *self.rates.write().unwrap_or_else(PoisonError::into_inner) = BonusRates::default();
    }
}

impl Default for BonusRateConfig {
    fn default() -> Self {
        Self {
            rates: RwLock::new(BonusRates::default()),
        }
    }
}
