//! Key-value backed read/write store (SQLite).
//!
//! The whole activity list lives JSON-serialized under a single key, the
//! admin presentation flag under a second one. Mutations rewrite the full
//! list. A small `log` table keeps an audit trail of store operations.

use super::RecordStore;
use super::seed;
use crate::errors::AppResult;
use crate::models::ActivityRecord;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub const ACTIVITIES_KEY: &str = "portfolio_activities";
pub const ADMIN_KEY: &str = "portfolio_admin_mode";

pub struct LocalStore {
    pub conn: Connection,
}

impl LocalStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS log (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                date      TEXT NOT NULL,
                operation TEXT NOT NULL,
                target    TEXT NOT NULL,
                message   TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn admin_mode(&self) -> AppResult<bool> {
        Ok(self.get(ADMIN_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_admin_mode(&self, enabled: bool) -> AppResult<()> {
        self.put(ADMIN_KEY, if enabled { "true" } else { "false" })
    }

    /// Write an internal log line into the `log` table.
    pub fn ttlog(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(params![now, operation, target, message])?;

        Ok(())
    }

    /// Seed the store and persist the defaults, returning them.
    fn reseed(&mut self) -> AppResult<Vec<ActivityRecord>> {
        let records = seed::default_records();
        self.save(&records)?;
        Ok(records)
    }
}

impl RecordStore for LocalStore {
    fn load(&mut self) -> AppResult<Vec<ActivityRecord>> {
        match self.get(ACTIVITIES_KEY)? {
            None => self.reseed(),
            Some(raw) => match serde_json::from_str::<Vec<ActivityRecord>>(&raw) {
                Ok(records) => Ok(records),
                Err(e) => {
                    // Corrupt payload: recover with the default seed.
                    warning(format!("Stored activities unreadable ({e}), reseeding"));
                    self.reseed()
                }
            },
        }
    }

    fn save(&mut self, records: &[ActivityRecord]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        self.put(ACTIVITIES_KEY, &raw)
    }
}
