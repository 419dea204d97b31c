//! Core data models for the Incentive & Performance Scoring Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leaderboard;
mod period;
mod review;
mod transaction;

pub use employee::{EmployeeProfile, EmploymentCategory};
pub use leaderboard::{EotmResult, LeaderboardEntry, PLACEHOLDER_AVATAR, UNKNOWN_EMPLOYEE_NAME};
pub use period::Period;
pub use review::PerformanceReview;
pub use transaction::{PointTransaction, TransactionKind};
