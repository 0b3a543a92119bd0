//! Storage boundary for daily entries and the worker roster.
//!
//! The engine treats storage as an external collaborator: the [`EntryStore`]
//! trait defines the data shapes the aggregator and API depend on, and
//! [`MemoryStore`] provides the in-crate implementation.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{DailyEntry, Shift, Worker};

/// Write input for one shift in an entry upsert.
///
/// When `hourly_wage` is absent, the store snapshots the worker's current
/// wage at save time; an unknown worker snapshots as zero rather than
/// failing the save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// The worker this shift references.
    pub worker_id: u32,
    /// Hours worked, `0 ≤ hours ≤ 24`, fractional allowed.
    pub hours: Decimal,
    /// Explicit wage snapshot override.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
}

/// Input for creating a roster worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerDraft {
    /// The region the worker belongs to.
    pub region: String,
    /// Display name.
    pub name: String,
    /// The worker's hourly wage.
    pub hourly_wage: Decimal,
    /// Optional category tag.
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update for a roster worker. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerUpdate {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New hourly wage. Does not affect already-recorded shifts.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// New category tag.
    #[serde(default)]
    pub category: Option<String>,
    /// New active flag.
    #[serde(default)]
    pub active: Option<bool>,
}

/// The read/write boundary between the engine and its data store.
///
/// Implementations must make [`upsert_entry`](EntryStore::upsert_entry)
/// atomic per (region, date): readers never observe a partially-replaced
/// shift set, and a failed write leaves the previous shift set intact.
pub trait EntryStore: Send + Sync {
    /// Fetches one entry by its (region, canonical date) key.
    fn entry(&self, region: &str, date: NaiveDate) -> EngineResult<Option<DailyEntry>>;

    /// Fetches all entries for the selected regions within the inclusive
    /// date range, in ascending date order.
    fn entries_in_range(
        &self,
        regions: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<DailyEntry>>;

    /// Creates or replaces the entry for (region, date).
    ///
    /// The draft shift list is the *complete* replacement set; omitted
    /// shifts are deleted, and `packages` is overwritten. All-or-nothing.
    fn upsert_entry(
        &self,
        region: &str,
        date: NaiveDate,
        packages: u32,
        shifts: &[ShiftDraft],
    ) -> EngineResult<DailyEntry>;

    /// Resolves draft shifts into shifts with populated wage snapshots
    /// without persisting anything. Used for calculation previews.
    fn resolve_shifts(&self, drafts: &[ShiftDraft]) -> EngineResult<Vec<Shift>>;

    /// Lists a region's workers, sorted by name.
    fn workers(&self, region: &str) -> EngineResult<Vec<Worker>>;

    /// Adds a worker to the roster.
    fn create_worker(&self, draft: WorkerDraft) -> EngineResult<Worker>;

    /// Applies a partial update to a worker.
    fn update_worker(&self, id: u32, update: WorkerUpdate) -> EngineResult<Worker>;

    /// Removes a worker that no recorded shift references.
    ///
    /// Fails with [`EngineError::WorkerReferenced`] otherwise; deactivate
    /// via [`update_worker`](EntryStore::update_worker) instead.
    ///
    /// [`EngineError::WorkerReferenced`]: crate::error::EngineError::WorkerReferenced
    fn delete_worker(&self, id: u32) -> EngineResult<()>;
}
