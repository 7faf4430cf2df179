//! Busy-time estimation over annotation time intervals.
//!
//! Two scalars per annotator: a coarse wall-clock upper bound and a merged
//! "real" estimate that drops idle gaps. Callers must pre-filter the
//! intervals to a single annotator; mixing annotators collapses unrelated
//! boundaries into one timeline and skews both estimates.

use crate::models::record::AnnotationRecord;
use std::collections::HashMap;

/// Two consecutive interactions closer than this are counted as continuous
/// work; anything longer is treated as a break. Empirical constant carried
/// over from historical reports; changing it invalidates comparisons.
pub const IDLE_GAP_THRESHOLD_SECS: f64 = 600.0;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkEstimate {
    /// `max(end) - min(start)` over all intervals, clamped to zero.
    /// None when there are no usable intervals.
    pub coarse_seconds: Option<i64>,
    /// Sum of inter-event gaps shorter than the idle threshold, taken over
    /// the sorted timeline of every start and end boundary.
    pub real_seconds: f64,
}

pub fn estimate_work(pairs: &[(f64, f64)], idle_threshold: f64) -> WorkEstimate {
    if pairs.is_empty() {
        return WorkEstimate::default();
    }

    let min_start = pairs.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max_end = pairs.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let coarse = ((max_end - min_start) as i64).max(0);

    // -----------------------------
    // Flatten boundaries into one sorted timeline
    // -----------------------------
    let mut times: Vec<f64> = Vec::with_capacity(pairs.len() * 2);
    for (start, end) in pairs {
        times.push(*start);
        times.push(*end);
    }
    times.sort_by(|a, b| a.total_cmp(b));

    let real = times
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|gap| *gap < idle_threshold)
        .sum();

    WorkEstimate {
        coarse_seconds: Some(coarse),
        real_seconds: real,
    }
}

/// Collapse per-segment records into one interval per document/target group.
///
/// MQM campaigns save one row per segment but annotators work through a
/// document in one sitting, so the per-document `min(start)`/`max(end)` span
/// is the meaningful interval.
pub fn document_time_pairs(records: &[AnnotationRecord]) -> Vec<(f64, f64)> {
    let mut groups: HashMap<String, (f64, f64)> = HashMap::new();

    for rec in records {
        let Some((start, end)) = rec.time_pair() else {
            continue;
        };
        let doc = rec.document_key.as_deref().unwrap_or("");
        let key = format!("{} ||| {}", doc, rec.target_key);
        groups
            .entry(key)
            .and_modify(|(s, e)| {
                *s = s.min(start);
                *e = e.max(end);
            })
            .or_insert((start, end));
    }

    groups.into_values().collect()
}
