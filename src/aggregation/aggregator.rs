//! Date-range aggregation over stored entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculation::calculate_costs;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::CalculationResult;
use crate::store::EntryStore;

/// Cost and efficiency metrics for one (date, region) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    /// The entry's canonical date.
    pub date: NaiveDate,
    /// The entry's region code.
    pub region: String,
    /// The computed metrics for the day.
    #[serde(flatten)]
    pub metrics: CalculationResult,
}

/// Runs the cost calculation over every stored entry in the inclusive
/// `[start, end]` range for the selected regions.
///
/// Results come back in ascending date order, one row per surviving
/// (date, region) pair. Two kinds of entry are skipped rather than failing
/// the batch or producing misleading zeros:
///
/// * entries whose region has no configuration (a data-integrity gap; a
///   partial result beats blocking every region on one misconfiguration);
/// * entries with an empty shift collection (missing labor data, not a real
///   zero-cost day).
pub fn aggregate(
    store: &dyn EntryStore,
    configs: &ConfigLoader,
    start: NaiveDate,
    end: NaiveDate,
    regions: &[String],
) -> EngineResult<Vec<MetricRow>> {
    let entries = store.entries_in_range(regions, start, end)?;
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(config) = configs.get(&entry.region) else {
            warn!(
                region = %entry.region,
                date = %entry.date,
                "no configuration for region, skipping entry"
            );
            continue;
        };

        if entry.shifts.is_empty() {
            debug!(
                region = %entry.region,
                date = %entry.date,
                "entry has no recorded shifts, skipping"
            );
            continue;
        }

        let metrics = calculate_costs(entry.packages, &entry.shifts, config);
        rows.push(MetricRow {
            date: entry.date,
            region: entry.region,
            metrics,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarkupPolicy, RegionConfig};
    use crate::store::{MemoryStore, ShiftDraft, WorkerDraft};
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn region_config(region: &str, policy: MarkupPolicy) -> RegionConfig {
        RegionConfig {
            region: region.to_string(),
            normal_hours: dec("8"),
            ot_multiplier: dec("1.5"),
            markup: dec("1.3"),
            markup_policy: policy,
            own_markup: None,
            yw_markup: None,
            default_wages: BTreeMap::new(),
        }
    }

    fn loader() -> ConfigLoader {
        ConfigLoader::from_configs(vec![
            region_config("TX", MarkupPolicy::Uniform),
            region_config("CA", MarkupPolicy::Uniform),
        ])
        .unwrap()
    }

    fn seed_entry(store: &MemoryStore, region: &str, day: &str, packages: u32, hours: &str) {
        let worker = store
            .create_worker(WorkerDraft {
                region: region.to_string(),
                name: format!("{region} worker"),
                hourly_wage: dec("20"),
                category: None,
            })
            .unwrap();
        store
            .upsert_entry(
                region,
                date(day),
                packages,
                &[ShiftDraft {
                    worker_id: worker.id,
                    hours: dec(hours),
                    hourly_wage: None,
                }],
            )
            .unwrap();
    }

    fn regions(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    /// AG-001: rows come back in ascending date order
    #[test]
    fn test_rows_ascending_by_date() {
        let store = MemoryStore::new();
        seed_entry(&store, "TX", "2026-03-04", 100, "8");
        seed_entry(&store, "TX", "2026-03-02", 50, "8");
        seed_entry(&store, "CA", "2026-03-03", 75, "8");

        let rows = aggregate(
            &store,
            &loader(),
            date("2026-03-01"),
            date("2026-03-07"),
            &regions(&["TX", "CA"]),
        )
        .unwrap();

        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date("2026-03-02"), date("2026-03-03"), date("2026-03-04")]
        );
    }

    /// AG-002: metrics match a direct engine run
    #[test]
    fn test_metrics_match_engine() {
        let store = MemoryStore::new();
        seed_entry(&store, "TX", "2026-03-02", 100, "10");

        let rows = aggregate(
            &store,
            &loader(),
            date("2026-03-02"),
            date("2026-03-02"),
            &regions(&["TX"]),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metrics.total_cost, dec("220"));
        assert_eq!(rows[0].metrics.loaded_cost, dec("286"));
        assert_eq!(rows[0].metrics.cost_per_box, Some(dec("2.86")));
        assert_eq!(rows[0].metrics.efficiency, Some(dec("10")));
    }

    /// AG-003: an entry without a region config is skipped, not fatal
    #[test]
    fn test_missing_config_skips_entry() {
        let store = MemoryStore::new();
        seed_entry(&store, "TX", "2026-03-02", 100, "8");
        seed_entry(&store, "ZZ", "2026-03-02", 100, "8");

        let rows = aggregate(
            &store,
            &loader(),
            date("2026-03-02"),
            date("2026-03-02"),
            &regions(&["TX", "ZZ"]),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region, "TX");
    }

    /// AG-004: empty-shift entries produce no metrics row
    #[test]
    fn test_empty_shift_entry_skipped() {
        let store = MemoryStore::new();
        store.upsert_entry("TX", date("2026-03-02"), 50, &[]).unwrap();
        seed_entry(&store, "TX", "2026-03-03", 60, "8");

        let rows = aggregate(
            &store,
            &loader(),
            date("2026-03-01"),
            date("2026-03-07"),
            &regions(&["TX"]),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, date("2026-03-03"));
    }

    /// AG-005: regions outside the selection are not computed
    #[test]
    fn test_unselected_region_excluded() {
        let store = MemoryStore::new();
        seed_entry(&store, "TX", "2026-03-02", 100, "8");
        seed_entry(&store, "CA", "2026-03-02", 100, "8");

        let rows = aggregate(
            &store,
            &loader(),
            date("2026-03-02"),
            date("2026-03-02"),
            &regions(&["CA"]),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region, "CA");
    }

    #[test]
    fn test_metric_row_serializes_flattened() {
        let store = MemoryStore::new();
        seed_entry(&store, "TX", "2026-03-02", 100, "10");

        let rows = aggregate(
            &store,
            &loader(),
            date("2026-03-02"),
            date("2026-03-02"),
            &regions(&["TX"]),
        )
        .unwrap();

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["region"], "TX");
        // Metrics flatten into the row rather than nesting.
        assert!(json.get("total_cost").is_some());
        assert!(json.get("metrics").is_none());
    }
}
