//! Period point aggregation.

use crate::models::{Period, PointTransaction};

/// Sums an employee's points over one calendar period.
///
/// This is a pure function over a ledger snapshot: it filters on each
/// transaction's stored local-calendar `date` and sums the signed amounts.
/// An employee with no transactions in the period sums to 0. Re-running it
/// against the same snapshot always yields the same total; nothing is
/// memoized.
///
/// # Examples
///
/// ```
/// use incentive_engine::ledger::PointLedger;
/// use incentive_engine::models::{Period, TransactionKind};
/// use incentive_engine::scoring::aggregate_points;
/// use chrono::{Datelike, Local};
///
/// let ledger = PointLedger::new();
/// ledger.award("emp_001", TransactionKind::EarlyBird, "early").unwrap();
/// ledger.award("emp_001", TransactionKind::TaskMaster, "tasks").unwrap();
///
/// let today = Local::now().date_naive();
/// let period = Period::new(today.month(), today.year()).unwrap();
/// assert_eq!(aggregate_points(&ledger.snapshot(), "emp_001", period), 5);
/// ```
pub fn aggregate_points(
    transactions: &[PointTransaction],
    employee_id: &str,
    period: Period,
) -> i64 {
    transactions
        .iter()
        .filter(|t| t.employee_id == employee_id && period.contains(t.date))
        .map(|t| t.points)
        .sum()
}
