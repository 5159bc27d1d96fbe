//! Read-only JSON bundle source.
//!
//! Unlike the key-value store there is no seed fallback here: a missing or
//! unreadable file is fatal to display and surfaces as `LoadFailure`.

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use crate::models::bundle::DataBundle;
use std::fs;
use std::path::PathBuf;

pub struct BundleSource {
    path: PathBuf,
}

impl BundleSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn load_bundle(&self) -> AppResult<DataBundle> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::LoadFailure(format!("cannot read '{}': {e}", self.path.display()))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::LoadFailure(format!("cannot parse '{}': {e}", self.path.display()))
        })
    }
}

impl RecordStore for BundleSource {
    fn load(&mut self) -> AppResult<Vec<ActivityRecord>> {
        Ok(self.load_bundle()?.activities)
    }

    fn save(&mut self, _records: &[ActivityRecord]) -> AppResult<()> {
        Err(AppError::ReadOnlySource(
            self.path.display().to_string(),
        ))
    }
}
