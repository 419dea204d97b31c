//! Period leaderboard construction.

use std::collections::HashMap;

use crate::models::{
    LeaderboardEntry, PLACEHOLDER_AVATAR, Period, PointTransaction, UNKNOWN_EMPLOYEE_NAME,
};
use crate::sources::EmployeeDirectory;

/// Builds the ranked leaderboard for one period.
///
/// Every employee with at least one transaction in the period appears, even
/// with a zero or negative total. Entries are sorted by `total_points`
/// descending; ties are broken by ascending employee id so the ordering is
/// stable across runs regardless of ledger iteration order. Ranks are
/// assigned 1..N in sorted order with no gaps. Identities missing from the
/// registry render as "Unknown" with a placeholder avatar.
pub fn build_leaderboard(
    transactions: &[PointTransaction],
    directory: &dyn EmployeeDirectory,
    period: Period,
) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for tx in transactions.iter().filter(|t| period.contains(t.date)) {
        *totals.entry(tx.employee_id.as_str()).or_insert(0) += tx.points;
    }

    let mut ranked: Vec<(&str, i64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (employee_id, total_points))| {
            let (name, avatar_url) = match directory.find(employee_id) {
                Some(profile) => (profile.name, profile.avatar_url),
                None => (
                    UNKNOWN_EMPLOYEE_NAME.to_string(),
                    PLACEHOLDER_AVATAR.to_string(),
                ),
            };

            LeaderboardEntry {
                employee_id: employee_id.to_string(),
                name,
                avatar_url,
                total_points,
                rank: index as u32 + 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeProfile, EmploymentCategory, TransactionKind};
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

    fn directory() -> InMemoryDirectory {
        let directory = InMemoryDirectory::new();
        for (id, name) in [
            ("emp_001", "Ayu Lestari"),
            ("emp_002", "Budi Santoso"),
            ("emp_003", "Citra Dewi"),
        ] {
            directory.insert(EmployeeProfile {
                id: id.to_string(),
                name: name.to_string(),
                avatar_url: format!("https://cdn.example.com/avatars/{}.png", id),
                category: EmploymentCategory::Permanent,
            });
        }
        directory
    }

    #[test]
    fn test_groups_and_sorts_descending() {
        let transactions = vec![
            tx("emp_001", 2, 3, 5),
            tx("emp_001", 3, 3, 10),
            tx("emp_002", 9, 3, 6),
            tx("emp_003", 1, 3, 7),
        ];
        let period = Period::new(3, 2026).unwrap();

        let board = build_leaderboard(&transactions, &directory(), period);

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].employee_id, "emp_002");
        assert_eq!(board[0].total_points, 9);
        assert_eq!(board[1].employee_id, "emp_001");
        assert_eq!(board[1].total_points, 5);
        assert_eq!(board[2].employee_id, "emp_003");
    }

    #[test]
    fn test_ranks_are_one_based_and_dense() {
        let transactions = vec![
            tx("emp_001", 5, 3, 5),
            tx("emp_002", 5, 3, 6),
            tx("emp_003", 1, 3, 7),
        ];
        let period = Period::new(3, 2026).unwrap();

        let board = build_leaderboard(&transactions, &directory(), period);

        let ranks: Vec<u32> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_break_by_ascending_employee_id() {
        let transactions = vec![
            tx("emp_002", 5, 3, 6),
            tx("emp_001", 5, 3, 5),
        ];
        let period = Period::new(3, 2026).unwrap();

        let board = build_leaderboard(&transactions, &directory(), period);

        assert_eq!(board[0].employee_id, "emp_001");
        assert_eq!(board[1].employee_id, "emp_002");
    }

    #[test]
    fn test_out_of_period_transactions_are_excluded() {
        let transactions = vec![
            tx("emp_001", 5, 3, 5),
            tx("emp_002", 50, 4, 1),
        ];
        let period = Period::new(3, 2026).unwrap();

        let board = build_leaderboard(&transactions, &directory(), period);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].employee_id, "emp_001");
    }

    #[test]
    fn test_unknown_employee_gets_placeholder_identity() {
        let transactions = vec![tx("emp_404", 3, 3, 5)];
        let period = Period::new(3, 2026).unwrap();

        let board = build_leaderboard(&transactions, &directory(), period);

        assert_eq!(board[0].name, UNKNOWN_EMPLOYEE_NAME);
        assert_eq!(board[0].avatar_url, PLACEHOLDER_AVATAR);
    }

    #[test]
    fn test_negative_totals_still_appear_last() {
        let transactions = vec![
            tx("emp_001", 5, 3, 5),
            tx("emp_002", -3, 3, 6),
        ];
        let period = Period::new(3, 2026).unwrap();

        let board = build_leaderboard(&transactions, &directory(), period);

        assert_eq!(board.len(), 2);
        assert_eq!(board[1].employee_id, "emp_002");
        assert_eq!(board[1].total_points, -3);
    }

    #[test]
    fn test_empty_period_yields_empty_board() {
        let period = Period::new(3, 2026).unwrap();
        assert!(build_leaderboard(&[], &directory(), period).is_empty());
    }

    #[test]
    fn test_rebuild_without_new_appends_is_identical() {
        let transactions = vec![
            tx("emp_001", 2, 3, 5),
            tx("emp_002", 2, 3, 6),
            tx("emp_003", 7, 3, 7),
        ];
        let period = Period::new(3, 2026).unwrap();

        let first = build_leaderboard(&transactions, &directory(), period);
        let second = build_leaderboard(&transactions, &directory(), period);
        assert_eq!(first, second);
    }
}
