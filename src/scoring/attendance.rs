//! Attendance classification and the early-bird award.
//!
//! Turns a check-in instant plus an optional shift schedule into an
//! attendance status and, conditionally, an early-bird point award. This is
//! the only path that appends to the ledger automatically; task and audit
//! awards arrive through the ledger's append operation from their own
//! workflows.

use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::ledger::PointLedger;
use crate::models::{PointTransaction, TransactionKind};

/// Minutes after shift start during which a check-in still counts as present.
pub const LATE_GRACE_MINUTES: i64 = 10;

/// Minutes before shift start a check-in must beat to earn the early-bird award.
pub const EARLY_BIRD_LEAD_MINUTES: i64 = 30;

/// Hour used by the no-schedule fallback rule: later than this is late.
pub const DEFAULT_SHIFT_START_HOUR: u32 = 9;

/// Attendance status assigned to a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on time.
    Present,
    /// Checked in after the grace window.
    Late,
}

/// The classification of one check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInAssessment {
    /// Whether the check-in was on time.
    pub status: AttendanceStatus,
    /// True when the check-in beat the early-bird lead time.
    pub early_bird: bool,
}

/// A recorded check-in: the classification plus any early-bird award made.
#[derive(Debug, Clone)]
pub struct CheckInRecord {
    /// The attendance classification.
    pub assessment: CheckInAssessment,
    /// The early-bird transaction, when one was appended.
    pub early_bird_award: Option<PointTransaction>,
}

/// Classifies a check-in against the shift schedule.
///
/// With a schedule: late iff the check-in is more than
/// [`LATE_GRACE_MINUTES`] past the shift start; early-bird iff it is at
/// least [`EARLY_BIRD_LEAD_MINUTES`] before it. Without a schedule the
/// fallback rule applies: late iff the check-in hour is past
/// [`DEFAULT_SHIFT_START_HOUR`], and early-bird is never signalled.
///
/// # Examples
///
/// ```
/// use incentive_engine::scoring::{classify_check_in, AttendanceStatus};
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0);
/// let check_in = NaiveDateTime::parse_from_str("2026-03-02 08:25:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let assessment = classify_check_in(check_in, nine);
/// assert_eq!(assessment.status, AttendanceStatus::Present);
/// assert!(assessment.early_bird);
/// ```
pub fn classify_check_in(
    check_in: NaiveDateTime,
    shift_start: Option<NaiveTime>,
) -> CheckInAssessment {
    match shift_start {
        Some(start) => {
            let start = check_in.date().and_time(start);
            let late_threshold = start + Duration::minutes(LATE_GRACE_MINUTES);
            let early_threshold = start - Duration::minutes(EARLY_BIRD_LEAD_MINUTES);

            CheckInAssessment {
                status: if check_in > late_threshold {
                    AttendanceStatus::Late
                } else {
                    AttendanceStatus::Present
                },
                early_bird: check_in <= early_threshold,
            }
        }
        None => CheckInAssessment {
            status: if check_in.hour() > DEFAULT_SHIFT_START_HOUR {
                AttendanceStatus::Late
            } else {
                AttendanceStatus::Present
            },
            early_bird: false,
        },
    }
}

/// Classifies a check-in and appends the early-bird award when earned.
///
/// Classification runs against the local wall clock of the check-in instant.
/// On early-bird, an `EarlyBird` transaction is appended stamped with the
/// check-in instant, so its aggregation period matches the day worked.
pub fn record_check_in(
    ledger: &PointLedger,
    employee_id: &str,
    check_in: DateTime<Utc>,
    shift_start: Option<NaiveTime>,
) -> EngineResult<CheckInRecord> {
    let assessment = classify_check_in(check_in.with_timezone(&Local).naive_local(), shift_start);

    let early_bird_award = if assessment.early_bird {
        let points = TransactionKind::EarlyBird.fixed_points().unwrap_or(2);
        Some(ledger.append_at(
            employee_id,
            points,
            TransactionKind::EarlyBird,
            "Early bird check-in",
            check_in,
        )?)
    } else {
        None
    };

    Ok(CheckInRecord {
        assessment,
        early_bird_award,
    })
}
