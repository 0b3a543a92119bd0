//! Markup factor selection.
//!
//! This module selects the billing markup factor for a region according to
//! its [`MarkupPolicy`]. The policy variants replace what would otherwise be
//! near-duplicate per-region calculation functions.

use rust_decimal::Decimal;

use crate::config::{MarkupPolicy, RegionConfig};

/// Markup applied by category-fallback regions that have no `own_markup`
/// configured.
///
/// This is a deliberate default-if-unset rule, not an error path: such a
/// region bills at 25% until its own rate is administered.
pub const DEFAULT_FALLBACK_MARKUP: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Selects the markup factor that turns raw labor cost into loaded cost.
///
/// * [`MarkupPolicy::Uniform`] regions bill everything at `config.markup`.
/// * [`MarkupPolicy::CategoryFallback`] regions bill at `config.own_markup`,
///   falling back to [`DEFAULT_FALLBACK_MARKUP`] when it is unset.
///
/// # Example
///
/// ```
/// use throughput_engine::calculation::{markup_factor, DEFAULT_FALLBACK_MARKUP};
/// use throughput_engine::config::{MarkupPolicy, RegionConfig};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let config = RegionConfig {
///     region: "NJ".to_string(),
///     normal_hours: Decimal::from_str("8").unwrap(),
///     ot_multiplier: Decimal::from_str("1.5").unwrap(),
///     markup: Decimal::from_str("1.3").unwrap(),
///     markup_policy: MarkupPolicy::CategoryFallback,
///     own_markup: None,
///     yw_markup: None,
///     default_wages: BTreeMap::new(),
/// };
/// assert_eq!(markup_factor(&config), DEFAULT_FALLBACK_MARKUP);
/// ```
pub fn markup_factor(config: &RegionConfig) -> Decimal {
    match config.markup_policy {
        MarkupPolicy::Uniform => config.markup,
        MarkupPolicy::CategoryFallback => config.own_markup.unwrap_or(DEFAULT_FALLBACK_MARKUP),
    }
}
