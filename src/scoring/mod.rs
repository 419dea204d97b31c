//! Scoring logic for the Incentive & Performance Scoring Engine.
//!
//! This module contains the calculation functions of the engine: attendance
//! classification with the early-bird award, period point aggregation, bonus
//! calculation from the configurable rate table, leaderboard ranking, and the
//! composite Employee-of-the-Month scorer.

mod aggregate;
mod attendance;
mod bonus;
mod eotm;
mod leaderboard;

pub use aggregate::aggregate_points;
pub use attendance::{
    AttendanceStatus, CheckInAssessment, CheckInRecord, DEFAULT_SHIFT_START_HOUR,
    EARLY_BIRD_LEAD_MINUTES, LATE_GRACE_MINUTES, classify_check_in, record_check_in,
};
pub use bonus::{BonusStatement, compute_bonus};
pub use eotm::compute_eotm;
pub use leaderboard::build_leaderboard;
