//! HTTP API module for the Incentive & Performance Scoring Engine.
//!
//! This module exposes the engine's operations over a thin REST surface:
//! appending point transactions, recording check-ins, and reading
//! aggregates, bonuses, leaderboards, EOTM results, and the bonus-rate
//! configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AppendRequest, CheckInRequest, PeriodQuery, RateUpdateRequest};
pub use response::{ApiError, CheckInResponse, PointsResponse};
pub use state::AppState;
