//! External-collaborator interfaces consumed by the engine.
//!
//! The employee registry and the performance review store are owned and
//! mutated elsewhere; the engine reads them through these traits. In-memory
//! implementations are provided for tests and self-contained deployments.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::{EmployeeProfile, Period, PerformanceReview};

/// Read-only lookups into the external employee registry.
pub trait EmployeeDirectory: Send + Sync {
    /// Resolves an employee profile by id, if the registry knows it.
    fn find(&self, employee_id: &str) -> Option<EmployeeProfile>;
}

/// Read-only access to the external performance review store.
///
/// The EOTM scorer receives this as an injected dependency rather than
/// reaching into a concrete review store, so ledger and review data stay
/// independently sourced.
pub trait ReviewSource: Send + Sync {
    /// Returns the finalized reviews for an employee within a period.
    ///
    /// Non-finalized reviews are never returned. An empty result is normal
    /// and means a zero review contribution, not an error.
    fn finalized_reviews(&self, employee_id: &str, period: Period) -> Vec<PerformanceReview>;
}

/// A process-local employee registry.
pub struct InMemoryDirectory {
    employees: RwLock<HashMap<String, EmployeeProfile>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(HashMap::new()),
        }
    }

    /// Adds or replaces a profile.
    pub fn insert(&self, profile: EmployeeProfile) {
        self.employees
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.id.clone(), profile);
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn find(&self, employee_id: &str) -> Option<EmployeeProfile> {
        self.employees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(employee_id)
            .cloned()
    }
}

/// A process-local review store.
pub struct InMemoryReviewStore {
    reviews: RwLock<Vec<PerformanceReview>>,
}

impl InMemoryReviewStore {
    /// Creates an empty review store.
    pub fn new() -> Self {
        Self {
            reviews: RwLock::new(Vec::new()),
        }
    }

    /// Records a review (finalized or not).
    pub fn submit(&self, review: PerformanceReview) {
        self.reviews
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(review);
    }
}

impl Default for InMemoryReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSource for InMemoryReviewStore {
    fn finalized_reviews(&self, employee_id: &str, period: Period) -> Vec<PerformanceReview> {
        self.reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.is_finalized && r.employee_id == employee_id && r.is_for_period(period))
            .cloned()
            .collect()
    }
}
