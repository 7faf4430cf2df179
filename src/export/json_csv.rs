use crate::errors::{AppError, AppResult};
use crate::export::{StatusRowExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export rows as CSV with a serde-generated header.
pub(crate) fn export_csv(rows: &[StatusRowExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export rows as JSONL, one JSON object per line.
pub(crate) fn export_jsonl(rows: &[StatusRowExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSONL: {}", path.display()));

    let mut file = File::create(path)?;
    for row in rows {
        let line = serde_json::to_string(row)
            .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;
        writeln!(file, "{line}")?;
    }

    notify_export_success("JSONL", path);
    Ok(())
}
