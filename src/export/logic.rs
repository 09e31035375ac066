use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::load_events;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of every stored event.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns how many events were written (0 when the store is empty and
    /// nothing was created).
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let rows: Vec<EventExport> = load_events(&pool.conn)?
            .iter()
            .map(EventExport::from)
            .collect();

        if rows.is_empty() {
            warning("No events to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} events exported as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
