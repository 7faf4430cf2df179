use crate::models::status_row::AnnotatorStatusRow;
use serde::Serialize;

/// Flat status row for CSV / JSONL export.
#[derive(Serialize, Clone, Debug)]
pub struct StatusRowExport {
    pub username: String,
    pub active: bool,
    pub annotations: usize,
    pub first_modified: String,
    pub last_modified: String,
    pub coarse_time: String,
    pub busy_time: String,
    pub progress: String,
    pub status: String,
    /// Present only in the privileged export.
    pub reliability: Option<String>,
}

impl StatusRowExport {
    pub fn from_row(row: &AnnotatorStatusRow, include_reliability: bool) -> Self {
        Self {
            username: row.username.clone(),
            active: row.is_active,
            annotations: row.annotations,
            first_modified: row.first_full.clone(),
            last_modified: row.last_full.clone(),
            coarse_time: row.coarse_plain.clone(),
            busy_time: row.busy_plain.clone(),
            progress: row.progress.clone(),
            status: row.status.as_str().to_string(),
            reliability: include_reliability.then(|| row.reliability.render()),
        }
    }
}
