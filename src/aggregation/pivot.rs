//! Per-date pivoting of metric rows.
//!
//! The pivot aligns regions that share a date into one composite row so a
//! chart can plot them side by side. It is a pure reshape of already
//! computed [`MetricRow`]s; no re-calculation happens here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::aggregator::MetricRow;

/// The per-region metrics carried in a pivoted date row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotCell {
    /// The region's loaded cost for the day.
    pub cost: Decimal,
    /// Cost per box; `None` when no packages were processed.
    pub cost_per_box: Option<Decimal>,
    /// Packages per raw labor hour; `None` when no hours were worked.
    pub efficiency: Option<Decimal>,
}

/// One composite row per date, with a cell per region present on that date.
///
/// Serializes with flattened keys for charting: `date` plus
/// `{REGION}_cost`, `{REGION}_cpb`, and `{REGION}_eff` per region. Regions
/// absent on a date contribute no keys at all; absence is distinct from a
/// null metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    /// The calendar date this row covers.
    pub date: NaiveDate,
    /// Per-region cells, keyed by region code.
    pub regions: BTreeMap<String, PivotCell>,
}

impl Serialize for PivotRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1 + self.regions.len() * 3))?;
        map.serialize_entry("date", &self.date)?;
        for (region, cell) in &self.regions {
            map.serialize_entry(&format!("{region}_cost"), &cell.cost)?;
            map.serialize_entry(&format!("{region}_cpb"), &cell.cost_per_box)?;
            map.serialize_entry(&format!("{region}_eff"), &cell.efficiency)?;
        }
        map.end()
    }
}

/// Reshapes flat metric rows into per-date composite rows, ascending by
/// date.
pub fn pivot(rows: &[MetricRow]) -> Vec<PivotRow> {
    let mut by_date: BTreeMap<NaiveDate, BTreeMap<String, PivotCell>> = BTreeMap::new();

    for row in rows {
        by_date.entry(row.date).or_default().insert(
            row.region.clone(),
            PivotCell {
                cost: row.metrics.loaded_cost,
                cost_per_box: row.metrics.cost_per_box,
                efficiency: row.metrics.efficiency,
            },
        );
    }

    by_date
        .into_iter()
        .map(|(date, regions)| PivotRow { date, regions })
        .collect()
}
