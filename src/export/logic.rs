// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::ActivityRecord;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: "json" | "csv"
    /// - `file`: absolute path of the output file
    pub fn export(
        records: &[ActivityRecord],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("⚠️  No activities to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Json => export_json(records, path)?,
            ExportFormat::Csv => export_csv(records, path)?,
        }

        Ok(())
    }
}
