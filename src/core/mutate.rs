//! Mutation API: create/update/delete with whole-list write-through.
//!
//! Each operation leaves the persisted list consistent with the in-memory
//! one before returning. Re-running the engines afterwards is the caller's
//! job.

use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use crate::store::RecordStore;

/// Append a record, assigning a fresh id when the caller left it empty.
pub fn create<S: RecordStore>(store: &mut S, mut record: ActivityRecord) -> AppResult<ActivityRecord> {
    if record.id.is_empty() {
        record.id = ActivityRecord::new_id();
    }

    let mut records = store.load()?;
    records.push(record.clone());
    store.save(&records)?;

    Ok(record)
}

/// Replace the record with `id` in place; position and id are preserved.
pub fn update<S: RecordStore>(
    store: &mut S,
    id: &str,
    mut record: ActivityRecord,
) -> AppResult<ActivityRecord> {
    let mut records = store.load()?;

    let pos = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    record.id = id.to_string();
    records[pos] = record.clone();
    store.save(&records)?;

    Ok(record)
}

pub fn delete<S: RecordStore>(store: &mut S, id: &str) -> AppResult<ActivityRecord> {
    let mut records = store.load()?;

    let pos = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    let removed = records.remove(pos);
    store.save(&records)?;

    Ok(removed)
}
