//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that captures all
//! outputs of a daily cost calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a daily cost calculation.
///
/// Purely a function of its inputs: it has no identity or lifecycle of its
/// own and is never persisted. The two ratio metrics are `None` when their
/// denominator is absent; that is an explicit "no data" signal, distinct
/// from a computed zero.
///
/// # Example
///
/// ```
/// use throughput_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     total_cost: Decimal::ZERO,
///     loaded_cost: Decimal::ZERO,
///     cost_per_box: None,
///     efficiency: None,
///     total_hours: Decimal::ZERO,
/// };
/// assert!(result.cost_per_box.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Raw labor cost: sum over shifts of OT-adjusted hours times the wage
    /// snapshot.
    pub total_cost: Decimal,
    /// `total_cost` after the region's billing markup.
    pub loaded_cost: Decimal,
    /// `loaded_cost / packages`; `None` when no packages were processed.
    pub cost_per_box: Option<Decimal>,
    /// `packages / total_hours`; `None` when no hours were worked.
    pub efficiency: Option<Decimal>,
    /// Sum of raw shift hours, not OT-adjusted.
    pub total_hours: Decimal,
}
