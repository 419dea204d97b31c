//! HTTP request handlers for the Incentive & Performance Scoring Engine API.
//!
//! This module contains the handler functions for all engine endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Period, PointTransaction};
use crate::scoring::{build_leaderboard, compute_bonus, compute_eotm, record_check_in};

use super::request::{AppendRequest, CheckInRequest, PeriodQuery, RateUpdateRequest};
use super::response::{ApiError, ApiErrorResponse, CheckInResponse, PointsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/transactions", post(append_handler))
        .route("/check-ins", post(check_in_handler))
        .route("/employees/:id/points", get(points_handler))
        .route("/employees/:id/bonus", get(bonus_handler))
        .route("/leaderboard", get(leaderboard_handler))
        .route("/eotm", get(eotm_handler))
        .route(
            "/config/bonus-rates",
            get(get_rates_handler).put(update_rate_handler),
        )
        .route("/config/bonus-rates/reset", post(reset_rates_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, mapping rejections to the error envelope.
fn parse_json<T>(payload: Result<Json<T>, JsonRejection>, correlation_id: Uuid) -> Result<T, Response>
where
    T: serde::de::DeserializeOwned,
{
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Handler for `POST /transactions`.
///
/// Appends one point transaction. Kinds with a fixed point value may omit
/// `points`; manual adjustments and EOTM bonuses must supply one.
async fn append_handler(
    State(state): State<AppState>,
    payload: Result<Json<AppendRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        kind = ?request.kind,
        "Appending point transaction"
    );

    let points = match request.points.or_else(|| request.kind.fixed_points()) {
        Some(points) => points,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::validation_error(format!(
                    "{:?} requires an explicit points amount",
                    request.kind
                ))),
            )
                .into_response();
        }
    };

    let appended: EngineResult<PointTransaction> = match request.timestamp {
        Some(timestamp) => state.ledger().append_at(
            &request.employee_id,
            points,
            request.kind,
            &request.reason,
            timestamp,
        ),
        None => state
            .ledger()
            .append(&request.employee_id, points, request.kind, &request.reason),
    };

    match appended {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Append rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /check-ins`.
///
/// Classifies the check-in and appends the early-bird award when earned.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing check-in"
    );

    match record_check_in(
        state.ledger(),
        &request.employee_id,
        request.checked_in_at,
        request.shift_start,
    ) {
        Ok(record) => (StatusCode::OK, Json(CheckInResponse::from(record))).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Check-in rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /employees/{id}/points`.
async fn points_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let total_points =
        crate::scoring::aggregate_points(&state.ledger().snapshot(), &employee_id, period);

    (
        StatusCode::OK,
        Json(PointsResponse {
            employee_id,
            period,
            total_points,
        }),
    )
        .into_response()
}

/// Handler for `GET /employees/{id}/bonus`.
async fn bonus_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let statement = compute_bonus(
        &state.ledger().snapshot(),
        state.directory(),
        &state.rates().snapshot(),
        &employee_id,
        period,
    );

    (StatusCode::OK, Json(statement)).into_response()
}

/// Handler for `GET /leaderboard`.
async fn leaderboard_handler(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let board = build_leaderboard(&state.ledger().snapshot(), state.directory(), period);
    (StatusCode::OK, Json(board)).into_response()
}

/// Handler for `GET /eotm`.
async fn eotm_handler(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let board = build_leaderboard(&state.ledger().snapshot(), state.directory(), period);
    match compute_eotm(&board, state.reviews(), period) {
        Some(result) => (StatusCode::OK, Json(result)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::eotm_not_found(period)),
        )
            .into_response(),
    }
}

/// Handler for `GET /config/bonus-rates`.
async fn get_rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.rates().snapshot())).into_response()
}

/// Handler for `PUT /config/bonus-rates`.
async fn update_rate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateUpdateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match state.rates().update(request.category, request.rate) {
        Ok(()) => (StatusCode::OK, Json(state.rates().snapshot())).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rate update rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /config/bonus-rates/reset`.
async fn reset_rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.rates().reset_to_defaults();
    (StatusCode::OK, Json(state.rates().snapshot())).into_response()
}
