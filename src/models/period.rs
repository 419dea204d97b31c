//! Aggregation period model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// A calendar month/year pair used as the aggregation window.
///
/// All derived computations (aggregates, leaderboards, EOTM) are scoped to a
/// `Period`. The month is validated on construction.
///
/// # Examples
///
/// ```
/// use incentive_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(3, 2026).unwrap();
/// assert!(period.contains(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    /// Creates a period, rejecting months outside 1..=12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod { month });
        }
        Ok(Self { month, year })
    }

    /// The calendar month (1-based).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if the date falls inside this calendar month/year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
