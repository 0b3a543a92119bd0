//! Overtime adjustment.
//!
//! This module provides the function that splits worked hours at a region's
//! normal-hours threshold and inflates the overtime portion by the region's
//! overtime multiplier.

use rust_decimal::Decimal;

/// Converts raw worked hours into effective (paid) hours.
///
/// Splits `hours` into a regular portion `min(hours, normal_hours)` and an
/// overtime portion `max(0, hours - normal_hours)`, and returns
/// `regular + overtime × ot_multiplier`.
///
/// This is a total function: every numeric input is legal. A zero or
/// negative `normal_hours` degenerates to the multiplier applying to all
/// hours, and `ot_multiplier == 1` degenerates to a plain pass-through.
///
/// # Examples
///
/// ## Under the threshold
///
/// ```
/// use throughput_engine::calculation::apply_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("6.0").unwrap();
/// let normal = Decimal::from_str("8.0").unwrap();
/// let mult = Decimal::from_str("1.5").unwrap();
/// assert_eq!(apply_overtime(hours, normal, mult), hours);
/// ```
///
/// ## Over the threshold
///
/// ```
/// use throughput_engine::calculation::apply_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("10.0").unwrap();
/// let normal = Decimal::from_str("8.0").unwrap();
/// let mult = Decimal::from_str("1.5").unwrap();
/// // 8 regular + 2 × 1.5 = 11
/// assert_eq!(apply_overtime(hours, normal, mult), Decimal::from_str("11.0").unwrap());
/// ```
pub fn apply_overtime(hours: Decimal, normal_hours: Decimal, ot_multiplier: Decimal) -> Decimal {
    let regular = hours.min(normal_hours);
    let overtime = (hours - normal_hours).max(Decimal::ZERO);
    regular + overtime * ot_multiplier
}
