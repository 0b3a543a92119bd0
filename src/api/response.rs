//! Response types for the HTTP API.
//!
//! This module defines the metrics response body plus the error response
//! structures and error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::aggregation::{MetricRow, PivotRow};
use crate::error::EngineError;

/// Response body for `POST /metrics`.
///
/// `rows` is the flat per-(date, region) series; `chart` is the pivoted
/// per-date composite view. Both are reshapes of the same computation.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    /// Flat metric rows, ascending by date.
    pub rows: Vec<MetricRow>,
    /// Pivoted per-date rows for charting.
    pub chart: Vec<PivotRow>,
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

    /// Creates an entry-not-found error response.
    pub fn entry_not_found(region: &str, date: impl std::fmt::Display) -> Self {
        Self::new(
            "ENTRY_NOT_FOUND",
            format!("No entry recorded for {} on {}", region, date),
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
            EngineError::InvalidConfig { region, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid configuration for region '{}'", region),
                    message,
                ),
            },
            EngineError::RegionNotFound { region } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "REGION_NOT_FOUND",
                    format!("Region not found: {}", region),
                    format!("No configuration exists for region code '{}'", region),
                ),
            },
            EngineError::WorkerNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("WORKER_NOT_FOUND", format!("Worker not found: {}", id)),
            },
            EngineError::WorkerReferenced { id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "WORKER_REFERENCED",
                    format!("Worker {} is referenced by recorded shifts", id),
                    "Deactivate the worker instead of deleting it",
                ),
            },
            EngineError::InvalidWorker { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WORKER",
                    format!("Invalid worker field '{}': {}", field, message),
                    "The worker data contains invalid information",
                ),
            },
            EngineError::InvalidShift { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift: {}", message),
                    "The shift data contains invalid information",
                ),
            },
            EngineError::SaveFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SAVE_FAILED",
                    "Save failed, please retry",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_region_not_found_maps_to_404() {
        let engine_error = EngineError::RegionNotFound {
            region: "ZZ".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "REGION_NOT_FOUND");
    }

    #[test]
    fn test_worker_referenced_maps_to_409() {
        let api_error: ApiErrorResponse = EngineError::WorkerReferenced { id: 7 }.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "WORKER_REFERENCED");
    }

    #[test]
    fn test_invalid_shift_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidShift {
            message: "hours 25 outside the 0-24 range".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SHIFT");
    }

    #[test]
    fn test_save_failed_keeps_generic_message() {
        let api_error: ApiErrorResponse = EngineError::SaveFailed {
            message: "store lock poisoned".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.message, "Save failed, please retry");
    }
}
