//! HTTP request handlers for the cost and throughput engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{aggregate, pivot};
use crate::calculation::calculate_costs;
use crate::models::canonical_date;
use crate::store::{EntryStore, ShiftDraft, WorkerUpdate};

use super::request::{CalculateRequest, CreateWorkerRequest, MetricsRequest, SaveEntryRequest};
use super::response::{ApiError, ApiErrorResponse, MetricsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries", put(save_entry))
        .route("/entries/:region/:date", get(get_entry))
        .route("/calculate", post(calculate))
        .route("/metrics", post(metrics))
        .route("/regions/:region/workers", get(list_workers))
        .route("/workers", post(create_worker))
        .route("/workers/:id", patch(update_worker).delete(delete_worker))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
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
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for `PUT /entries`.
///
/// Upserts the daily entry for (region, canonical date), replacing its
/// entire shift collection.
async fn save_entry(
    State(state): State<AppState>,
    payload: Result<Json<SaveEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        region = %request.region,
        "Processing entry save"
    );

    if let Err(err) = state.config().region(&request.region) {
        warn!(
            correlation_id = %correlation_id,
            region = %request.region,
            "Unknown region"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let date = canonical_date(request.date);
    let drafts: Vec<ShiftDraft> = request.shifts.into_iter().map(Into::into).collect();

    match state
        .store()
        .upsert_entry(&request.region, date, request.packages, &drafts)
    {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                region = %entry.region,
                date = %entry.date,
                shifts_count = entry.shifts.len(),
                "Entry saved"
            );
            (StatusCode::OK, Json(entry)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Entry save failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /entries/:region/:date`.
async fn get_entry(
    State(state): State<AppState>,
    Path((region, date)): Path<(String, NaiveDate)>,
) -> Response {
    match state.store().entry(&region, date) {
        Ok(Some(entry)) => (StatusCode::OK, Json(entry)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::entry_not_found(&region, date)),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `POST /calculate`.
///
/// Runs the cost engine on the supplied inputs without persisting
/// anything, so a data-entry form can show live metrics before saving.
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = match state.config().region(&request.region) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                region = %request.region,
                "Unknown region"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let drafts: Vec<ShiftDraft> = request.shifts.into_iter().map(Into::into).collect();
    let shifts = match state.store().resolve_shifts(&drafts) {
        Ok(shifts) => shifts,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Preview rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = calculate_costs(request.packages, &shifts, config);
    info!(
        correlation_id = %correlation_id,
        region = %request.region,
        shifts_count = shifts.len(),
        loaded_cost = %result.loaded_cost,
        "Preview calculated"
    );
    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for `POST /metrics`.
///
/// Aggregates stored entries over the requested date range and regions and
/// returns both the flat series and its pivoted chart form.
async fn metrics(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start = canonical_date(request.start);
    let end = canonical_date(request.end);

    match aggregate(state.store(), state.config(), start, end, &request.regions) {
        Ok(rows) => {
            let chart = pivot(&rows);
            info!(
                correlation_id = %correlation_id,
                rows_count = rows.len(),
                "Metrics aggregated"
            );
            (StatusCode::OK, Json(MetricsResponse { rows, chart })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Aggregation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /regions/:region/workers`.
async fn list_workers(State(state): State<AppState>, Path(region): Path<String>) -> Response {
    if let Err(err) = state.config().region(&region) {
        return ApiErrorResponse::from(err).into_response();
    }

    match state.store().workers(&region) {
        Ok(workers) => (StatusCode::OK, Json(workers)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `POST /workers`.
async fn create_worker(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = state.config().region(&request.region) {
        return ApiErrorResponse::from(err).into_response();
    }

    match state.store().create_worker(request.into()) {
        Ok(worker) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = worker.id,
                region = %worker.region,
                "Worker created"
            );
            (StatusCode::CREATED, Json(worker)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `PATCH /workers/:id`.
async fn update_worker(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(update): Json<WorkerUpdate>,
) -> Response {
    match state.store().update_worker(id, update) {
        Ok(worker) => (StatusCode::OK, Json(worker)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `DELETE /workers/:id`.
async fn delete_worker(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.store().delete_worker(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
