//! Daily entry and shift models.
//!
//! This module defines the [`DailyEntry`] and [`Shift`] structs representing
//! one day of throughput and labor for a region, plus the date
//! canonicalization rule used for entry keys.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded labor shift within a daily entry.
///
/// The `hourly_wage` is a **snapshot** of the worker's wage at the time the
/// shift was recorded, never a live reference to the roster. Editing a
/// worker's wage later does not change historical cost calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The worker this shift references.
    pub worker_id: u32,
    /// Hours worked, `0 ≤ hours ≤ 24`, fractional allowed.
    pub hours: Decimal,
    /// Wage snapshot captured when the shift was recorded.
    pub hourly_wage: Decimal,
    /// The worker's category tag copied onto the shift at save time.
    /// Carried through the calculation signature but inert in the
    /// arithmetic today.
    #[serde(default)]
    pub category: Option<String>,
}

/// One day of package throughput and labor for a region.
///
/// There is exactly one entry per (region, canonical date) pair. Re-saving
/// an entry replaces its entire shift collection.
///
/// # Example
///
/// ```
/// use throughput_engine::models::{DailyEntry, Shift};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let entry = DailyEntry {
///     region: "TX".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     packages: 100,
///     shifts: vec![Shift {
///         worker_id: 1,
///         hours: Decimal::new(100, 1), // 10.0
///         hourly_wage: Decimal::new(200, 1), // 20.0
///         category: None,
///     }],
///     updated_at: Utc::now(),
/// };
/// assert_eq!(entry.shifts.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The region this entry belongs to.
    pub region: String,
    /// The canonical calendar date of the entry.
    pub date: NaiveDate,
    /// Packages processed on this day.
    pub packages: u32,
    /// The labor shifts recorded for this day. Order is not significant.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// When the entry was last saved.
    pub updated_at: DateTime<Utc>,
}

/// Truncates a timestamp to its UTC calendar date.
///
/// All timestamps arriving at the engine boundary are reduced to this
/// canonical form before being used as an entry key, so entries for the same
/// calendar day are never duplicated or missed due to local-timezone drift.
///
/// # Example
///
/// ```
/// use throughput_engine::models::canonical_date;
/// use chrono::{DateTime, NaiveDate, Utc};
///
/// let ts: DateTime<Utc> = "2026-03-02T23:45:00Z".parse().unwrap();
/// assert_eq!(canonical_date(ts), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// ```
pub fn canonical_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}
