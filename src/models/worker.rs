//! Worker roster model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A worker on a region's sorting roster.
///
/// The `hourly_wage` here is the *current* wage and is only used to snapshot
/// newly recorded shifts. Recorded shifts keep their own wage copy, so
/// historical cost calculations do not move when the roster wage changes.
///
/// # Example
///
/// ```
/// use throughput_engine::models::Worker;
/// use rust_decimal::Decimal;
///
/// let worker = Worker {
///     id: 1,
///     region: "TX".to_string(),
///     name: "John Doe".to_string(),
///     hourly_wage: Decimal::new(1500, 2), // 15.00
///     active: true,
///     category: None,
/// };
/// assert!(worker.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Store-assigned identifier.
    pub id: u32,
    /// The region this worker belongs to.
    pub region: String,
    /// Display name.
    pub name: String,
    /// The worker's current hourly wage.
    pub hourly_wage: Decimal,
    /// Whether the worker is currently on the active roster. Workers that
    /// are referenced by recorded shifts are deactivated instead of deleted.
    pub active: bool,
    /// Open-set category tag. One region uses roles ("Sorter", "Leader"),
    /// another uses employment types ("FullTime", "PartTime"); new tags need
    /// no code changes.
    #[serde(default)]
    pub category: Option<String>,
}
