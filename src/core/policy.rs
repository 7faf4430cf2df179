//! Per-campaign analytics policies.
//!
//! All option-token branching happens here, once per campaign. The
//! calculators receive an explicit `CampaignPolicy` and never look at the
//! raw option strings themselves.

use crate::core::calculator::mann_whitney::Alternative;
use crate::models::campaign::CampaignOptions;
use crate::models::record::AnnotationRecord;
use crate::models::task_kind::{KeyPolicy, TaskKind, TaskRegistry};

/// Marker appended to control-item keys by ESA batch generators; the bad
/// and target variants of an item otherwise share the same key.
pub const BAD_KEY_MARKER: &str = "#bad";

/// How the quality metric is read off a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricPolicy {
    /// Use the numeric score as-is.
    Score,
    /// Negative count of structured MQM issue annotations, so that fewer
    /// issues means a higher value on the shared "higher is better" scale.
    MqmIssueCount,
}

impl MetricPolicy {
    pub fn extract(&self, record: &AnnotationRecord) -> Option<f64> {
        match self {
            MetricPolicy::Score => record.score,
            MetricPolicy::MqmIssueCount => {
                let raw = record.mqm.as_deref()?;
                let issues: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
                Some(-(issues.len() as f64))
            }
        }
    }
}

/// Analytics behavior of one campaign, resolved once from its task kind and
/// option tokens.
#[derive(Debug, Clone, Copy)]
pub struct CampaignPolicy {
    pub metric: MetricPolicy,
    pub key: KeyPolicy,
    /// ESA campaigns carry a `#bad` marker inside control-item keys which
    /// must be stripped before target/control matching.
    pub strip_bad_marker: bool,
    /// Alternative hypothesis for the reliability test. `Less` encodes the
    /// expected "control items score lower than targets"; campaigns on an
    /// inverted scale flip it.
    pub direction: Alternative,
    /// MQM campaigns save one row per segment; their busy-time intervals
    /// are first merged per document/target group.
    pub document_grouped_times: bool,
    /// Render busy time as `"{real}--{coarse}"` in the plain table.
    pub merged_time_display: bool,
}

impl CampaignPolicy {
    pub fn select(kind: TaskKind, opts: &CampaignOptions, registry: &TaskRegistry) -> Self {
        let spec = registry.spec(kind);
        let mqm = opts.contains("mqm") && spec.mqm_capable;
        let esa = opts.contains("esa");

        let direction = if opts.contains("invertedscale") {
            Alternative::Greater
        } else {
            Alternative::Less
        };

        Self {
            metric: if mqm {
                MetricPolicy::MqmIssueCount
            } else {
                MetricPolicy::Score
            },
            key: spec.key_policy,
            strip_bad_marker: esa,
            direction,
            document_grouped_times: mqm,
            merged_time_display: mqm || esa,
        }
    }

    /// Key under which a record's target and control variants are matched.
    pub fn matching_key(&self, record: &AnnotationRecord) -> String {
        let mut key = match self.key {
            KeyPolicy::SegmentOnly => record.segment_key.clone(),
            KeyPolicy::TargetAndSegment => {
                format!("{}-{}", record.target_key, record.segment_key)
            }
        };
        if self.strip_bad_marker && key.contains(BAD_KEY_MARKER) {
            key = key.replace(BAD_KEY_MARKER, "");
        }
        key
    }
}
