//! Aggregation of daily entries into comparable time series.
//!
//! This module runs the cost calculation over a date range of stored
//! entries and reshapes the results: a flat per-(date, region) series for
//! tabular reporting, and a pivoted per-date composite view for charting.

mod aggregator;
mod pivot;

pub use aggregator::{MetricRow, aggregate};
pub use pivot::{PivotCell, PivotRow, pivot};
