//! Daily cost calculation.
//!
//! This module provides the single parameterized cost calculation shared by
//! all regions. Region differences are confined to the policy constants on
//! [`RegionConfig`]; there are no per-region calculation variants.

use rust_decimal::Decimal;

use crate::config::RegionConfig;
use crate::models::{CalculationResult, Shift};

use super::markup::markup_factor;
use super::overtime::apply_overtime;

/// Computes cost and efficiency metrics for one day of labor in a region.
///
/// For each shift the effective hours are the OT-adjusted hours per the
/// region's threshold and multiplier; raw cost accumulates as
/// `effective_hours × wage snapshot`. Total hours accumulate **raw**, not
/// OT-adjusted: overtime inflates cost but not counted throughput hours,
/// since efficiency measures actual worker-hours rather than paid-hours.
///
/// The loaded cost applies the region's markup factor, and the two ratio
/// metrics are `None` whenever their denominator is zero: "no packages" is
/// distinguishable from "zero cost per package".
///
/// The shift `category` tag is accepted in the input but does not alter the
/// arithmetic; it is a seam for future per-category billing.
///
/// Pure and stateless: identical inputs always yield identical outputs, and
/// the function is safe to call concurrently from any number of tasks.
///
/// # Examples
///
/// ```
/// use throughput_engine::calculation::calculate_costs;
/// use throughput_engine::config::{MarkupPolicy, RegionConfig};
/// use throughput_engine::models::Shift;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let config = RegionConfig {
///     region: "TX".to_string(),
///     normal_hours: Decimal::from_str("8").unwrap(),
///     ot_multiplier: Decimal::from_str("1.5").unwrap(),
///     markup: Decimal::from_str("1.3").unwrap(),
///     markup_policy: MarkupPolicy::Uniform,
///     own_markup: None,
///     yw_markup: None,
///     default_wages: BTreeMap::new(),
/// };
/// let shifts = vec![Shift {
///     worker_id: 1,
///     hours: Decimal::from_str("10").unwrap(),
///     hourly_wage: Decimal::from_str("20").unwrap(),
///     category: None,
/// }];
///
/// let result = calculate_costs(100, &shifts, &config);
/// // 8 + 2 × 1.5 = 11 effective hours → 220 raw, 286 loaded
/// assert_eq!(result.total_cost, Decimal::from_str("220").unwrap());
/// assert_eq!(result.loaded_cost, Decimal::from_str("286").unwrap());
/// assert_eq!(result.cost_per_box, Some(Decimal::from_str("2.86").unwrap()));
/// assert_eq!(result.efficiency, Some(Decimal::from_str("10").unwrap()));
/// ```
pub fn calculate_costs(packages: u32, shifts: &[Shift], config: &RegionConfig) -> CalculationResult {
    let mut total_cost = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;

    for shift in shifts {
        let effective_hours =
            apply_overtime(shift.hours, config.normal_hours, config.ot_multiplier);
        total_cost += effective_hours * shift.hourly_wage;
        total_hours += shift.hours;
    }

    let loaded_cost = total_cost * markup_factor(config);
    let packages_dec = Decimal::from(packages);

    let cost_per_box = if packages > 0 {
        Some(loaded_cost / packages_dec)
    } else {
        None
    };
    let efficiency = if total_hours > Decimal::ZERO {
        Some(packages_dec / total_hours)
    } else {
        None
    };

    CalculationResult {
        total_cost,
        loaded_cost,
        cost_per_box,
        efficiency,
        total_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkupPolicy;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn uniform_config(markup: &str) -> RegionConfig {
        RegionConfig {
            region: "TX".to_string(),
            normal_hours: dec("8"),
            ot_multiplier: dec("1.5"),
            markup: dec(markup),
            markup_policy: MarkupPolicy::Uniform,
            own_markup: None,
            yw_markup: None,
            default_wages: BTreeMap::new(),
        }
    }

    fn fallback_config(own_markup: Option<Decimal>) -> RegionConfig {
        RegionConfig {
            region: "NJ".to_string(),
            normal_hours: dec("8"),
            ot_multiplier: dec("1.5"),
            markup: dec("1.3"),
            markup_policy: MarkupPolicy::CategoryFallback,
            own_markup,
            yw_markup: None,
            default_wages: BTreeMap::new(),
        }
    }

    fn shift(hours: &str, wage: &str) -> Shift {
        Shift {
            worker_id: 1,
            hours: dec(hours),
            hourly_wage: dec(wage),
            category: None,
        }
    }

    /// CC-001: single shift with overtime, uniform markup
    #[test]
    fn test_single_shift_with_overtime() {
        let result = calculate_costs(100, &[shift("10", "20")], &uniform_config("1.3"));

        assert_eq!(result.total_cost, dec("220"));
        assert_eq!(result.loaded_cost, dec("286"));
        assert_eq!(result.cost_per_box, Some(dec("2.86")));
        assert_eq!(result.efficiency, Some(dec("10")));
        assert_eq!(result.total_hours, dec("10"));
    }

    /// CC-002: multiple shifts accumulate cost and raw hours
    #[test]
    fn test_multiple_shifts_accumulate() {
        let shifts = [shift("8", "15"), shift("10", "20"), shift("4.5", "16")];
        let result = calculate_costs(200, &shifts, &uniform_config("1.3"));

        // 8×15 + (8 + 2×1.5)×20 + 4.5×16 = 120 + 220 + 72 = 412
        assert_eq!(result.total_cost, dec("412"));
        assert_eq!(result.loaded_cost, dec("535.6"));
        // Raw hours, not OT-adjusted: 8 + 10 + 4.5
        assert_eq!(result.total_hours, dec("22.5"));
    }

    /// CC-003: total hours stay raw while cost is OT-inflated
    #[test]
    fn test_overtime_inflates_cost_not_hours() {
        let result = calculate_costs(100, &[shift("12", "10")], &uniform_config("1"));

        // Cost uses 8 + 4×1.5 = 14 effective hours.
        assert_eq!(result.total_cost, dec("140"));
        // Efficiency uses the raw 12.
        assert_eq!(result.total_hours, dec("12"));
    }

    /// CC-004: zero packages yields null cost-per-box, not zero
    #[test]
    fn test_zero_packages_null_cost_per_box() {
        let result = calculate_costs(0, &[shift("8", "15")], &uniform_config("1.3"));

        assert_eq!(result.cost_per_box, None);
        assert_eq!(result.efficiency, Some(dec("0")));
        assert_eq!(result.total_cost, dec("120"));
    }

    /// CC-005: empty shifts with packages yields zero cost and null efficiency
    #[test]
    fn test_empty_shifts_with_packages() {
        let result = calculate_costs(50, &[], &uniform_config("1.3"));

        assert_eq!(result.total_cost, dec("0"));
        assert_eq!(result.loaded_cost, dec("0"));
        assert_eq!(result.efficiency, None);
        // packages > 0, so a genuine zero, distinct from the null case.
        assert_eq!(result.cost_per_box, Some(dec("0")));
    }

    /// CC-006: all-zero input is valid
    #[test]
    fn test_all_zero_input() {
        let result = calculate_costs(0, &[], &uniform_config("1.3"));

        assert_eq!(result.total_cost, dec("0"));
        assert_eq!(result.cost_per_box, None);
        assert_eq!(result.efficiency, None);
    }

    /// CC-007: fallback markup applies when own_markup is unset
    #[test]
    fn test_fallback_markup_matches_explicit() {
        let shifts = [shift("10", "20")];
        let implicit = calculate_costs(100, &shifts, &fallback_config(None));
        let explicit = calculate_costs(100, &shifts, &fallback_config(Some(dec("1.25"))));

        assert_eq!(implicit, explicit);
        assert_eq!(implicit.loaded_cost, dec("275"));
    }

    /// CC-008: category tag does not alter the arithmetic
    #[test]
    fn test_category_is_inert() {
        let tagged = Shift {
            category: Some("Leader".to_string()),
            ..shift("10", "20")
        };
        let untagged = shift("10", "20");

        let with_tag = calculate_costs(100, &[tagged], &uniform_config("1.3"));
        let without_tag = calculate_costs(100, &[untagged], &uniform_config("1.3"));
        assert_eq!(with_tag, without_tag);
    }

    /// CC-009: identical inputs yield identical results
    #[test]
    fn test_deterministic() {
        let shifts = [shift("9.25", "18.5"), shift("3", "16")];
        let config = uniform_config("1.3");

        let first = calculate_costs(137, &shifts, &config);
        let second = calculate_costs(137, &shifts, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_half_hour_increments() {
        let result = calculate_costs(60, &[shift("8.5", "16")], &uniform_config("1.3"));

        // 8 + 0.5 × 1.5 = 8.75 effective → 140 raw
        assert_eq!(result.total_cost, dec("140"));
        assert_eq!(result.total_hours, dec("8.5"));
    }

    #[test]
    fn test_zero_wage_shift_contributes_hours_only() {
        let shifts = [shift("8", "0"), shift("8", "20")];
        let result = calculate_costs(100, &shifts, &uniform_config("1.3"));

        assert_eq!(result.total_cost, dec("160"));
        assert_eq!(result.total_hours, dec("16"));
    }
}
