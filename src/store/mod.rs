//! Record store: one interface, two backends.
//!
//! `LocalStore` is the read/write key-value backend (SQLite); `BundleSource`
//! is the read-only JSON data file. Engines are written once against
//! `RecordStore` and never care which one is behind it.

pub mod bundle;
pub mod local;
pub mod seed;

pub use bundle::BundleSource;
pub use local::LocalStore;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;

pub trait RecordStore {
    /// Read the full canonical list.
    fn load(&mut self) -> AppResult<Vec<ActivityRecord>>;

    /// Persist the full list (whole-list write-through, no partial writes).
    fn save(&mut self, records: &[ActivityRecord]) -> AppResult<()>;
}

/// Backend selected by configuration (or the `--data` override).
pub enum DataSource {
    Local(LocalStore),
    Bundle(BundleSource),
}

impl DataSource {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        match &cfg.data_source {
            Some(path) => Ok(DataSource::Bundle(BundleSource::new(path))),
            None => Ok(DataSource::Local(LocalStore::open(&cfg.database)?)),
        }
    }

    pub fn records(&mut self) -> AppResult<Vec<ActivityRecord>> {
        match self {
            DataSource::Local(s) => s.load(),
            DataSource::Bundle(s) => s.load(),
        }
    }
}

/// Open the read/write backend, refusing to proceed when the configuration
/// points at a read-only bundle.
pub fn open_local(cfg: &Config) -> AppResult<LocalStore> {
    if let Some(path) = &cfg.data_source {
        return Err(AppError::ReadOnlySource(format!(
            "'{path}' is a JSON data file; mutations need the local store (drop --data)"
        )));
    }
    LocalStore::open(&cfg.database)
}
