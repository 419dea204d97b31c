//! Response types for the Incentive & Performance Scoring Engine API.
//!
//! This module defines the success envelopes for computed results plus the
//! error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Period, PointTransaction};
use crate::scoring::CheckInRecord;

/// Response body for `POST /check-ins`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResponse {
    /// The attendance status: "present" or "late".
    pub status: crate::scoring::AttendanceStatus,
    /// Whether the check-in earned the early-bird award.
    pub early_bird: bool,
    /// The early-bird transaction, when one was appended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_bird_award: Option<PointTransaction>,
}

impl From<CheckInRecord> for CheckInResponse {
    fn from(record: CheckInRecord) -> Self {
        Self {
            status: record.assessment.status,
            early_bird: record.assessment.early_bird,
            early_bird_award: record.early_bird_award,
        }
    }
}

/// Response body for `GET /employees/{id}/points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    /// The employee the total belongs to.
    pub employee_id: String,
    /// The aggregation period.
    pub period: Period,
    /// The signed point total for the period.
    pub total_points: i64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the not-found response for a period with no EOTM candidate.
    pub fn eotm_not_found(period: Period) -> Self {
        Self::with_details(
            "EOTM_NOT_FOUND",
            format!("No Employee of the Month for {}", period),
            "The period has no point transactions, so there are no candidates",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRate { category, rate } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATE",
                    format!("Invalid bonus rate {} for category '{}'", rate, category),
                    "Bonus rates must be non-negative",
                ),
            },
            EngineError::InvalidPeriod { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid period: month {}", month),
                    "Months must be in the range 1..=12",
                ),
            },
            EngineError::InvalidTransaction { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TRANSACTION",
                    format!("Invalid transaction field '{}': {}", field, message),
                    "The transaction was rejected and nothing was appended",
                ),
            },
            EngineError::StorageError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Ledger storage failed", message),
            },
        }
    }
}
