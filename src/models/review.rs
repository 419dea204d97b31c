//! Performance review model.
//!
//! Reviews are collected and finalized by the external review workflow; the
//! engine only consumes finalized records when scoring Employee of the Month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// A manager-submitted performance review for one employee and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// The reviewed employee.
    pub employee_id: String,
    /// The review period's month (1-based).
    pub period_month: u32,
    /// The review period's year.
    pub period_year: i32,
    /// Overall score on a 1-5 scale.
    pub overall_score: Decimal,
    /// Whether the review has been finalized. Only finalized reviews count
    /// toward EOTM averaging.
    pub is_finalized: bool,
}

impl PerformanceReview {
    /// Returns true if the review belongs to the given period.
    pub fn is_for_period(&self, period: Period) -> bool {
        self.period_month == period.month() && self.period_year == period.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_review() {
        let json = r#"{
            "employee_id": "emp_001",
            "period_month": 3,
            "period_year": 2026,
            "overall_score": "4.5",
            "is_finalized": true
        }"#;

        let review: PerformanceReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.employee_id, "emp_001");
        assert_eq!(review.overall_score, dec("4.5"));
        assert!(review.is_finalized);
    }

    #[test]
    fn test_is_for_period() {
        let review = PerformanceReview {
            employee_id: "emp_001".to_string(),
            period_month: 3,
            period_year: 2026,
            overall_score: dec("4.0"),
            is_finalized: true,
        };

        assert!(review.is_for_period(Period::new(3, 2026).unwrap()));
        assert!(!review.is_for_period(Period::new(4, 2026).unwrap()));
        assert!(!review.is_for_period(Period::new(3, 2025).unwrap()));
    }
}
