//! High-level export logic for computed status rows.

use crate::config::Config;
use crate::core::sort::{resolve_sort_field, sort_rows};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_jsonl};
use crate::export::model::StatusRowExport;
use crate::models::status_row::AnnotatorStatusRow;
use crate::models::task_kind::TaskRegistry;
use crate::report::collect_status_rows;
use crate::ui::messages::warning;
use regex::Regex;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// Inactive accounts named `{original}-{two hex digits}` are shadow copies
/// created when a task agenda is reset; their rows hold the scores of the
/// previous annotation round.
static SHADOW_ACCOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^-]+-[0-9a-f]{2}$").expect("static pattern"));

pub fn is_shadow_account(row: &AnnotatorStatusRow) -> bool {
    !row.is_active && SHADOW_ACCOUNT.is_match(&row.username)
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export status rows for one or more comma-separated campaigns.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        registry: &TaskRegistry,
        cfg: &Config,
        campaign_names: &str,
        format: ExportFormat,
        file: &str,
        sort_selector: Option<&str>,
        staff: bool,
        reset_accounts_only: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }
        ensure_writable(path, force)?;

        let mut rows = Vec::new();
        for name in campaign_names.split(',').map(str::trim) {
            let mut report = collect_status_rows(pool, name, registry, cfg)?;
            sort_rows(&mut report.rows, resolve_sort_field(sort_selector, staff));
            rows.extend(report.rows);
        }

        if reset_accounts_only {
            rows.retain(is_shadow_account);
            if rows.is_empty() {
                warning("No reset accounts (shadow users) found.");
                return Ok(());
            }
        }

        let export_rows: Vec<StatusRowExport> = rows
            .iter()
            .map(|row| StatusRowExport::from_row(row, staff))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&export_rows, path)?,
            ExportFormat::Jsonl => export_jsonl(&export_rows, path)?,
        }

        Ok(())
    }
}
