//! Bonus calculation from aggregated points and the configurable rate table.

use rust_decimal::Decimal;

use crate::config::BonusRates;
use crate::models::{EmploymentCategory, Period, PointTransaction};
use crate::sources::EmployeeDirectory;

use super::aggregate_points;

/// The outcome of one bonus computation, with the inputs that produced it.
///
/// Keeping the total, category, and rate alongside the amount lets payroll
/// screens show how a figure was reached without recomputing anything.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BonusStatement {
    /// The employee the bonus was computed for.
    pub employee_id: String,
    /// The aggregation period.
    pub period: Period,
    /// The aggregated point total for the period.
    pub total_points: i64,
    /// The employment category the rate was taken from, when the employee
    /// was found in the registry.
    pub category: Option<EmploymentCategory>,
    /// The currency-per-point rate applied.
    pub rate: Decimal,
    /// The resulting bonus amount.
    pub amount: Decimal,
}

/// Computes an employee's period bonus.
///
/// The amount is `total_points * rate(category)`. A total of zero or less
/// never produces a bonus: negative manual adjustments can drag a total below
/// zero, and that floor is deliberate. An employee missing from the registry
/// also yields a zero bonus, with no rate applied.
///
/// # Examples
///
/// ```
/// use incentive_engine::config::BonusRates;
/// use incentive_engine::models::Period;
/// use incentive_engine::scoring::compute_bonus;
/// use incentive_engine::sources::InMemoryDirectory;
/// use rust_decimal::Decimal;
///
/// let directory = InMemoryDirectory::new();
/// let rates = BonusRates::default();
/// let period = Period::new(3, 2026).unwrap();
///
/// // Unknown employee: zero bonus.
/// let statement = compute_bonus(&[], &directory, &rates, "emp_404", period);
/// assert_eq!(statement.amount, Decimal::ZERO);
/// ```
pub fn compute_bonus(
    transactions: &[PointTransaction],
    directory: &dyn EmployeeDirectory,
    rates: &BonusRates,
    employee_id: &str,
    period: Period,
) -> BonusStatement {
    let total_points = aggregate_points(transactions, employee_id, period);

    if total_points <= 0 {
        return BonusStatement {
            employee_id: employee_id.to_string(),
            period,
            total_points,
            category: directory.find(employee_id).map(|p| p.category),
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        };
    }

    match directory.find(employee_id) {
        Some(profile) => {
            let rate = rates.rate_for(profile.category);
            BonusStatement {
                employee_id: employee_id.to_string(),
                period,
                total_points,
                category: Some(profile.category),
                rate,
                amount: Decimal::from(total_points) * rate,
            }
        }
        None => BonusStatement {
            employee_id: employee_id.to_string(),
            period,
            total_points,
            category: None,
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeProfile, TransactionKind};
    use crate::sources::InMemoryDirectory;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn tx(employee_id: &str, points: i64, mo: u32, d: u32) -> PointTransaction {
        let timestamp = Utc.with_ymd_and_hms(2026, mo, d, 12, 0, 0).unwrap();
        PointTransaction {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            points,
            kind: TransactionKind::ManualAdjustment,
            reason: "test".to_string(),
            timestamp,
            date: NaiveDate::from_ymd_opt(2026, mo, d).unwrap(),
        }
    }

    fn directory_with(id: &str, category: EmploymentCategory) -> InMemoryDirectory {
        let directory = InMemoryDirectory::new();
        directory.insert(EmployeeProfile {
            id: id.to_string(),
            name: "Test Employee".to_string(),
            avatar_url: "https://cdn.example.com/a.png".to_string(),
            category,
        });
        directory
    }

    #[test]
    fn test_permanent_rate_applied_to_positive_total() {
        let directory = directory_with("emp_001", EmploymentCategory::Permanent);
        let transactions = vec![tx("emp_001", 2, 3, 5), tx("emp_001", 3, 3, 10), tx("emp_001", -1, 3, 15)];
        let period = Period::new(3, 2026).unwrap();

        let statement = compute_bonus(&transactions, &directory, &BonusRates::default(), "emp_001", period);

        assert_eq!(statement.total_points, 4);
        assert_eq!(statement.rate, Decimal::from(5000));
        assert_eq!(statement.amount, Decimal::from(20000));
        assert_eq!(statement.category, Some(EmploymentCategory::Permanent));
    }

    #[test]
    fn test_probation_and_daily_worker_rates() {
        let period = Period::new(3, 2026).unwrap();
        let transactions = vec![tx("emp_001", 10, 3, 5)];

        let directory = directory_with("emp_001", EmploymentCategory::Probation);
        let statement = compute_bonus(&transactions, &directory, &BonusRates::default(), "emp_001", period);
        assert_eq!(statement.amount, Decimal::from(30000));

        let directory = directory_with("emp_001", EmploymentCategory::DailyWorker);
        let statement = compute_bonus(&transactions, &directory, &BonusRates::default(), "emp_001", period);
        assert_eq!(statement.amount, Decimal::from(20000));
    }

    #[test]
    fn test_zero_total_yields_zero_bonus() {
        let directory = directory_with("emp_001", EmploymentCategory::Permanent);
        let period = Period::new(3, 2026).unwrap();

        let statement = compute_bonus(&[], &directory, &BonusRates::default(), "emp_001", period);

        assert_eq!(statement.total_points, 0);
        assert_eq!(statement.amount, Decimal::ZERO);
    }

    #[test]
    fn test_negative_total_yields_zero_bonus() {
        let directory = directory_with("emp_001", EmploymentCategory::Permanent);
        let transactions = vec![tx("emp_001", -5, 3, 5)];
        let period = Period::new(3, 2026).unwrap();

        let statement = compute_bonus(&transactions, &directory, &BonusRates::default(), "emp_001", period);

        assert_eq!(statement.total_points, -5);
        assert_eq!(statement.amount, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_employee_yields_zero_bonus() {
        let directory = InMemoryDirectory::new();
        let transactions = vec![tx("emp_001", 10, 3, 5)];
        let period = Period::new(3, 2026).unwrap();

        let statement = compute_bonus(&transactions, &directory, &BonusRates::default(), "emp_001", period);

        assert_eq!(statement.total_points, 10);
        assert_eq!(statement.category, None);
        assert_eq!(statement.amount, Decimal::ZERO);
    }

    #[test]
    fn test_updated_rate_flows_into_amount() {
        let directory = directory_with("emp_001", EmploymentCategory::Permanent);
        let transactions = vec![tx("emp_001", 4, 3, 5)];
        let period = Period::new(3, 2026).unwrap();

        let mut rates = BonusRates::default();
        rates.permanent = Decimal::from(7500);

        let statement = compute_bonus(&transactions, &directory, &rates, "emp_001", period);
        assert_eq!(statement.amount, Decimal::from(30000));
    }
}
