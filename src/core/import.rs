//! Bulk import of an activity list from a JSON file.
//!
//! The payload must be a top-level array; anything else is rejected with
//! `ImportFormat` and the store is left untouched. On success the imported
//! list replaces the stored one wholesale.

use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use crate::store::RecordStore;
use std::fs;
use std::path::Path;

pub fn import_file<S: RecordStore>(store: &mut S, path: &Path) -> AppResult<usize> {
    let raw = fs::read_to_string(path)?;
    let records = parse_payload(&raw)?;

    store.save(&records)?;
    Ok(records.len())
}

fn parse_payload(raw: &str) -> AppResult<Vec<ActivityRecord>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AppError::ImportFormat(format!("not valid JSON: {e}")))?;

    if !value.is_array() {
        return Err(AppError::ImportFormat(
            "top-level value is not an array of activities".into(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::ImportFormat(format!("malformed activity entry: {e}")))
}
