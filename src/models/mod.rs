//! Core data models for the cost and throughput engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod daily_entry;
mod worker;

pub use calculation_result::CalculationResult;
pub use daily_entry::{DailyEntry, Shift, canonical_date};
pub use worker::Worker;
