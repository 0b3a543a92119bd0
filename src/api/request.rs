//! Request types for the HTTP API.
//!
//! This module defines the JSON request structures for the entry, preview,
//! metrics, and roster endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{ShiftDraft, WorkerDraft};

/// One shift row in a save or preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftInput {
    /// The worker the shift references.
    pub worker_id: u32,
    /// Hours worked.
    pub hours: Decimal,
    /// Explicit wage snapshot; when absent the worker's current roster
    /// wage is captured.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
}

/// Request body for `PUT /entries`.
///
/// The shift list is the complete replacement set for the (region, date)
/// entry; omitted shifts are deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEntryRequest {
    /// Target region code.
    pub region: String,
    /// Timestamp canonicalized to its UTC calendar date before use.
    pub date: DateTime<Utc>,
    /// Packages processed on the day.
    pub packages: u32,
    /// The complete shift set for the day.
    #[serde(default)]
    pub shifts: Vec<ShiftInput>,
}

/// Request body for `POST /calculate`, a preview that persists nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Region whose policy constants apply.
    pub region: String,
    /// Packages processed.
    pub packages: u32,
    /// Shift rows to price.
    #[serde(default)]
    pub shifts: Vec<ShiftInput>,
}

/// Request body for `POST /metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// Range start, canonicalized to its UTC calendar date (inclusive).
    pub start: DateTime<Utc>,
    /// Range end, canonicalized to its UTC calendar date (inclusive).
    pub end: DateTime<Utc>,
    /// Regions to include.
    pub regions: Vec<String>,
}

/// Request body for `POST /workers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkerRequest {
    /// The region the worker belongs to.
    pub region: String,
    /// Display name.
    pub name: String,
    /// Hourly wage.
    pub hourly_wage: Decimal,
    /// Optional category tag.
    #[serde(default)]
    pub category: Option<String>,
}

impl From<ShiftInput> for ShiftDraft {
    fn from(input: ShiftInput) -> Self {
        ShiftDraft {
            worker_id: input.worker_id,
            hours: input.hours,
            hourly_wage: input.hourly_wage,
        }
    }
}

impl From<CreateWorkerRequest> for WorkerDraft {
    fn from(req: CreateWorkerRequest) -> Self {
        WorkerDraft {
            region: req.region,
            name: req.name,
            hourly_wage: req.hourly_wage,
            category: req.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_deserialize_save_entry_request() {
        let json = r#"{
            "region": "TX",
            "date": "2026-03-02T14:30:00Z",
            "packages": 100,
            "shifts": [
                { "worker_id": 1, "hours": 8 },
                { "worker_id": 2, "hours": 6.5, "hourly_wage": 17.25 }
            ]
        }"#;

        let request: SaveEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.region, "TX");
        assert_eq!(request.packages, 100);
        assert_eq!(request.shifts.len(), 2);
        assert_eq!(request.shifts[0].hourly_wage, None);
        assert_eq!(
            request.shifts[1].hourly_wage,
            Some(Decimal::new(1725, 2))
        );
    }

    #[test]
    fn test_deserialize_save_entry_without_shifts() {
        let json = r#"{
            "region": "TX",
            "date": "2026-03-02T00:00:00Z",
            "packages": 50
        }"#;

        let request: SaveEntryRequest = serde_json::from_str(json).unwrap();
        assert!(request.shifts.is_empty());
    }

    #[test]
    fn test_deserialize_metrics_request() {
        let json = r#"{
            "start": "2026-03-01T00:00:00Z",
            "end": "2026-03-07T23:59:59Z",
            "regions": ["TX", "NJ"]
        }"#;

        let request: MetricsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.regions, vec!["TX", "NJ"]);
    }

    #[test]
    fn test_shift_input_conversion() {
        let input = ShiftInput {
            worker_id: 4,
            hours: Decimal::new(75, 1),
            hourly_wage: None,
        };

        let draft: ShiftDraft = input.into();
        assert_eq!(draft.worker_id, 4);
        assert_eq!(draft.hourly_wage, None);
    }

    #[test]
    fn test_create_worker_conversion() {
        let req = CreateWorkerRequest {
            region: "CA".to_string(),
            name: "Jane Smith".to_string(),
            hourly_wage: Decimal::new(1800, 2),
            category: Some("Sorter".to_string()),
        };

        let draft: WorkerDraft = req.into();
        assert_eq!(draft.region, "CA");
        assert_eq!(draft.category.as_deref(), Some("Sorter"));
    }
}
