use super::item_type::ItemType;
use serde::Serialize;

/// One completed annotation action, normalized across task kinds.
///
/// `start_time`/`end_time` are Unix epoch seconds as recorded by the
/// annotation frontend; either may be missing for legacy rows. `score` holds
/// the raw quality score where the task kind produces one, `mqm` holds the
/// raw JSON payload of structured issue annotations for MQM campaigns. The
/// effective quality metric is derived from these by the campaign's
/// `MetricPolicy`, never read directly.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationRecord {
    pub annotator: String,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub score: Option<f64>,
    pub mqm: Option<String>,
    pub segment_key: String,
    pub target_key: String,
    pub item_type: ItemType,
    /// Unique per underlying annotated item instance; repeated saves of the
    /// same item share this value and count as one annotation.
    pub record_identity: String,
    pub document_key: Option<String>,
    pub is_complete_document: bool,
}

impl AnnotationRecord {
    /// Both timestamps present, as an interval for the work estimator.
    pub fn time_pair(&self) -> Option<(f64, f64)> {
        match (self.start_time, self.end_time) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }
}
