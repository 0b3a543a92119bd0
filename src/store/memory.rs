//! In-memory entry store.
//!
//! This module provides [`MemoryStore`], the in-process implementation of
//! the [`EntryStore`] boundary. All state lives behind a single `RwLock`;
//! writes validate their input before mutating anything, so a failed write
//! leaves the previous state fully intact.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyEntry, Shift, Worker};

use super::{EntryStore, ShiftDraft, WorkerDraft, WorkerUpdate};

/// Upper bound on recorded shift hours per day.
const MAX_SHIFT_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

#[derive(Default)]
struct Inner {
    /// Keyed (date, region) so range scans iterate in ascending date order.
    entries: BTreeMap<(NaiveDate, String), DailyEntry>,
    workers: BTreeMap<u32, Worker>,
    next_worker_id: u32,
}

/// In-memory implementation of [`EntryStore`].
///
/// (region, date) pairs are independent units of concurrency; the single
/// lock here is a simplification that still guarantees the required
/// atomicity. The calculation layer never touches the lock; it works on
/// owned snapshots handed out by this store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| EngineError::SaveFailed {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| EngineError::SaveFailed {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Validates drafts and resolves them to shifts with wage snapshots.
    ///
    /// Returns an error before any caller mutates state, which is what
    /// keeps `upsert_entry` all-or-nothing.
    fn resolve_with(inner: &Inner, drafts: &[ShiftDraft]) -> EngineResult<Vec<Shift>> {
        let mut shifts = Vec::with_capacity(drafts.len());

        for draft in drafts {
            if draft.hours < Decimal::ZERO || draft.hours > MAX_SHIFT_HOURS {
                return Err(EngineError::InvalidShift {
                    message: format!("hours {} outside the 0-24 range", draft.hours),
                });
            }
            if let Some(wage) = draft.hourly_wage {
                if wage < Decimal::ZERO {
                    return Err(EngineError::InvalidShift {
                        message: format!("hourly wage {} must be >= 0", wage),
                    });
                }
            }

            let worker = inner.workers.get(&draft.worker_id);
            // Snapshot the roster wage unless an explicit one was supplied.
            // A missing worker contributes a zero wage rather than failing
            // the save.
            let hourly_wage = draft
                .hourly_wage
                .or_else(|| worker.map(|w| w.hourly_wage))
                .unwrap_or(Decimal::ZERO);
            let category = worker.and_then(|w| w.category.clone());

            shifts.push(Shift {
                worker_id: draft.worker_id,
                hours: draft.hours,
                hourly_wage,
                category,
            });
        }

        Ok(shifts)
    }
}

impl EntryStore for MemoryStore {
    fn entry(&self, region: &str, date: NaiveDate) -> EngineResult<Option<DailyEntry>> {
        let inner = self.read()?;
        Ok(inner.entries.get(&(date, region.to_string())).cloned())
    }

    fn entries_in_range(
        &self,
        regions: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<DailyEntry>> {
        let inner = self.read()?;
        let mut out = Vec::new();

        for ((date, _), entry) in inner.entries.iter() {
            if *date < start {
                continue;
            }
            if *date > end {
                break;
            }
            if regions.iter().any(|r| r == &entry.region) {
                out.push(entry.clone());
            }
        }

        Ok(out)
    }

    fn upsert_entry(
        &self,
        region: &str,
        date: NaiveDate,
        packages: u32,
        shifts: &[ShiftDraft],
    ) -> EngineResult<DailyEntry> {
        let mut inner = self.write()?;

        // Resolve (and validate) before touching the map: the previous
        // entry survives any failure above this point.
        let shifts = Self::resolve_with(&inner, shifts)?;

        let entry = DailyEntry {
            region: region.to_string(),
            date,
            packages,
            shifts,
            updated_at: Utc::now(),
        };
        inner
            .entries
            .insert((date, region.to_string()), entry.clone());

        Ok(entry)
    }

    fn resolve_shifts(&self, drafts: &[ShiftDraft]) -> EngineResult<Vec<Shift>> {
        let inner = self.read()?;
        Self::resolve_with(&inner, drafts)
    }

    fn workers(&self, region: &str) -> EngineResult<Vec<Worker>> {
        let inner = self.read()?;
        let mut workers: Vec<Worker> = inner
            .workers
            .values()
            .filter(|w| w.region == region)
            .cloned()
            .collect();
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }

    fn create_worker(&self, draft: WorkerDraft) -> EngineResult<Worker> {
        if draft.hourly_wage < Decimal::ZERO {
            return Err(EngineError::InvalidWorker {
                field: "hourly_wage".to_string(),
                message: "must be >= 0".to_string(),
            });
        }

        let mut inner = self.write()?;
        inner.next_worker_id += 1;
        let worker = Worker {
            id: inner.next_worker_id,
            region: draft.region,
            name: draft.name,
            hourly_wage: draft.hourly_wage,
            active: true,
            category: draft.category,
        };
        inner.workers.insert(worker.id, worker.clone());
        Ok(worker)
    }

    fn update_worker(&self, id: u32, update: WorkerUpdate) -> EngineResult<Worker> {
        if let Some(wage) = update.hourly_wage {
            if wage < Decimal::ZERO {
                return Err(EngineError::InvalidWorker {
                    field: "hourly_wage".to_string(),
                    message: "must be >= 0".to_string(),
                });
            }
        }

        let mut inner = self.write()?;
        let worker = inner
            .workers
            .get_mut(&id)
            .ok_or(EngineError::WorkerNotFound { id })?;

        if let Some(name) = update.name {
            worker.name = name;
        }
        if let Some(wage) = update.hourly_wage {
            worker.hourly_wage = wage;
        }
        if let Some(category) = update.category {
            worker.category = Some(category);
        }
        if let Some(active) = update.active {
            worker.active = active;
        }

        Ok(worker.clone())
    }

    fn delete_worker(&self, id: u32) -> EngineResult<()> {
        let mut inner = self.write()?;

        if !inner.workers.contains_key(&id) {
            return Err(EngineError::WorkerNotFound { id });
        }

        let referenced = inner
            .entries
            .values()
            .flat_map(|e| e.shifts.iter())
            .any(|s| s.worker_id == id);
        if referenced {
            return Err(EngineError::WorkerReferenced { id });
        }

        inner.workers.remove(&id);
        Ok(())
    }
}
