use crate::core::calculator::reliability::Reliability;
use crate::core::calculator::status::Status;

/// One computed status line per annotator and campaign.
///
/// Recomputed from scratch on every status request; nothing here is
/// persisted. Timestamps keep the raw epoch next to the two rendered forms
/// so sorting never has to parse strings back.
#[derive(Debug, Clone)]
pub struct AnnotatorStatusRow {
    pub username: String,
    pub is_active: bool,
    /// Distinct completed annotations (deduplicated by record identity).
    pub annotations: usize,

    pub first_epoch: Option<f64>,
    pub first_full: String,
    pub first_trim: String,
    pub last_epoch: Option<f64>,
    pub last_full: String,
    pub last_trim: String,

    /// Merged busy-time estimate in seconds.
    pub busy_seconds: f64,
    pub busy_plain: String,
    pub busy_spaced: String,

    /// Coarse wall-clock span between first and last interaction.
    pub coarse_seconds: Option<i64>,
    pub coarse_plain: String,
    pub coarse_spaced: String,

    pub reliability: Reliability,
    pub progress: String,
    pub status: Status,

    pub total_items: Option<u32>,
    pub has_data: bool,
}
