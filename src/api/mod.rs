//! HTTP API module for the cost and throughput engine.
//!
//! This module provides the REST endpoints for saving daily entries,
//! previewing calculations, querying aggregated metrics, and managing the
//! worker roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, CreateWorkerRequest, MetricsRequest, SaveEntryRequest, ShiftInput};
pub use response::{ApiError, MetricsResponse};
pub use state::AppState;
