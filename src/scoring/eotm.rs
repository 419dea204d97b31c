//! Employee-of-the-Month composite scoring.

use rust_decimal::Decimal;

use crate::models::{EotmResult, LeaderboardEntry, Period};
use crate::sources::ReviewSource;

/// Weight shared by the ledger and review components of the final score.
fn component_weight() -> Decimal {
    Decimal::new(5, 1)
}

/// Scale factor lifting a 1-5 review average onto the point scale.
fn review_scale() -> Decimal {
    Decimal::from(10)
}

/// Picks the Employee of the Month for a period.
///
/// Each leaderboard candidate's finalized reviews for the period are fetched
/// through the injected `ReviewSource` and averaged (an employee with no
/// finalized reviews contributes 0, which is not an error). The final score
/// blends both signals on a comparable scale:
///
/// ```text
/// final_score = total_points * 0.5 + avg_review_score * 10 * 0.5
/// ```
///
/// The equal weighting is deliberate: a candidate with few points but
/// excellent reviews can beat a high scorer with none. Ties on the final
/// score are broken by ascending employee id. An empty leaderboard yields
/// `None`.
///
/// Ledger and review data are independently fetched snapshots; they may be
/// slightly stale relative to each other, which is accepted.
pub fn compute_eotm(
    leaderboard: &[LeaderboardEntry],
    reviews: &dyn ReviewSource,
    period: Period,
) -> Option<EotmResult> {
    let mut winner: Option<EotmResult> = None;

    for entry in leaderboard {
        let scores = reviews.finalized_reviews(&entry.employee_id, period);
        let avg_review_score = if scores.is_empty() {
            Decimal::ZERO
        } else {
            let sum: Decimal = scores.iter().map(|r| r.overall_score).sum();
            sum / Decimal::from(scores.len() as i64)
        };

        let final_score = Decimal::from(entry.total_points) * component_weight()
            + avg_review_score * review_scale() * component_weight();

        let candidate = EotmResult {
            employee_id: entry.employee_id.clone(),
            name: entry.name.clone(),
            avatar_url: entry.avatar_url.clone(),
            total_points: entry.total_points,
            avg_review_score,
            final_score,
        };

        let replace = match &winner {
            None => true,
            Some(best) => {
                candidate.final_score > best.final_score
                    || (candidate.final_score == best.final_score
                        && candidate.employee_id < best.employee_id)
            }
        };
        if replace {
            winner = Some(candidate);
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerformanceReview;
    use crate::sources::InMemoryReviewStore;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(employee_id: &str, name: &str, total_points: i64, rank: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            avatar_url: format!("https://cdn.example.com/avatars/{}.png", employee_id),
            total_points,
            rank,
        }
    }

    fn finalized_review(employee_id: &str, score: &str) -> PerformanceReview {
        PerformanceReview {
            employee_id: employee_id.to_string(),
            period_month: 3,
            period_year: 2026,
            overall_score: dec(score),
            is_finalized: true,
        }
    }

    /// The review weight can dominate: 4 points + a 4.5 review (24.5) beats
    /// 10 points with no reviews (5.0).
    #[test]
    fn test_reviews_can_outweigh_points() {
        let reviews = InMemoryReviewStore::new();
        reviews.submit(finalized_review("emp_a", "4.5"));

        let leaderboard = vec![
            entry("emp_b", "Budi Santoso", 10, 1),
            entry("emp_a", "Ayu Lestari", 4, 2),
        ];
        let period = Period::new(3, 2026).unwrap();

        let result = compute_eotm(&leaderboard, &reviews, period).unwrap();

        assert_eq!(result.employee_id, "emp_a");
        assert_eq!(result.total_points, 4);
        assert_eq!(result.avg_review_score, dec("4.5"));
        assert_eq!(result.final_score, dec("24.5"));
    }

    #[test]
    fn test_no_reviews_contribute_zero() {
        let reviews = InMemoryReviewStore::new();
        let leaderboard = vec![entry("emp_b", "Budi Santoso", 10, 1)];
        let period = Period::new(3, 2026).unwrap();

        let result = compute_eotm(&leaderboard, &reviews, period).unwrap();

        assert_eq!(result.avg_review_score, Decimal::ZERO);
        assert_eq!(result.final_score, dec("5.0"));
    }

    #[test]
    fn test_multiple_reviews_are_averaged() {
        let reviews = InMemoryReviewStore::new();
        reviews.submit(finalized_review("emp_a", "4.0"));
        reviews.submit(finalized_review("emp_a", "5.0"));

        let leaderboard = vec![entry("emp_a", "Ayu Lestari", 6, 1)];
        let period = Period::new(3, 2026).unwrap();

        let result = compute_eotm(&leaderboard, &reviews, period).unwrap();

        assert_eq!(result.avg_review_score, dec("4.5"));
        // 6 * 0.5 + 4.5 * 10 * 0.5 = 25.5
        assert_eq!(result.final_score, dec("25.5"));
    }

    #[test]
    fn test_non_finalized_reviews_are_ignored() {
        let reviews = InMemoryReviewStore::new();
        reviews.submit(PerformanceReview {
            employee_id: "emp_a".to_string(),
            period_month: 3,
            period_year: 2026,
            overall_score: dec("5.0"),
            is_finalized: false,
        });

        let leaderboard = vec![entry("emp_a", "Ayu Lestari", 4, 1)];
        let period = Period::new(3, 2026).unwrap();

        let result = compute_eotm(&leaderboard, &reviews, period).unwrap();
        assert_eq!(result.avg_review_score, Decimal::ZERO);
    }

    #[test]
    fn test_empty_leaderboard_yields_none() {
        let reviews = InMemoryReviewStore::new();
        let period = Period::new(3, 2026).unwrap();
        assert!(compute_eotm(&[], &reviews, period).is_none());
    }

    #[test]
    fn test_ties_break_by_ascending_employee_id() {
        let reviews = InMemoryReviewStore::new();
        let leaderboard = vec![
            entry("emp_b", "Budi Santoso", 8, 1),
            entry("emp_a", "Ayu Lestari", 8, 2),
        ];
        let period = Period::new(3, 2026).unwrap();

        let result = compute_eotm(&leaderboard, &reviews, period).unwrap();
        assert_eq!(result.employee_id, "emp_a");
    }
}
