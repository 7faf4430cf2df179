//! Annotator reliability testing.
//!
//! Detects annotators who fail to discriminate genuine target items from
//! deliberately degraded control items: z-scored target/control pairs are
//! matched by key and compared with a one-sided rank-sum test. A low
//! p-value is evidence the annotator tells the two apart.

use crate::core::calculator::mann_whitney::mann_whitney_u;
use crate::core::calculator::zscore::ScoreScale;
use crate::core::policy::CampaignPolicy;
use crate::models::record::AnnotationRecord;
use std::collections::HashMap;

/// Outcome of the reliability test for one annotator.
///
/// Every failure mode (no matched pairs, degenerate samples, a zero-ish
/// p-value) collapses to `NotAvailable`; the test never fabricates a value
/// and never fails the surrounding row computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reliability {
    PValue(f64),
    NotAvailable,
}

impl Reliability {
    fn from_p_value(p: f64) -> Self {
        if p > 0.0 && p.is_finite() {
            Reliability::PValue(p)
        } else {
            Reliability::NotAvailable
        }
    }

    /// Fixed six-decimal rendering, `n/a` when not available.
    pub fn render(&self) -> String {
        match self {
            Reliability::PValue(p) => format!("{:.6}", p),
            Reliability::NotAvailable => "n/a".to_string(),
        }
    }

    /// Numeric sort key; missing values sort last.
    pub fn sort_value(&self) -> f64 {
        match self {
            Reliability::PValue(p) => *p,
            Reliability::NotAvailable => f64::INFINITY,
        }
    }
}

/// Run the reliability test over one annotator's records.
///
/// The z-score scale is fit over every record carrying a metric, whatever
/// its item type; only TGT and BAD records then enter the matched maps.
pub fn assess_reliability(
    records: &[AnnotationRecord],
    distinct_annotations: usize,
    policy: &CampaignPolicy,
) -> Reliability {
    let scored: Vec<(&AnnotationRecord, f64)> = records
        .iter()
        .filter_map(|r| policy.metric.extract(r).map(|m| (r, m)))
        .collect();

    let metrics: Vec<f64> = scored.iter().map(|(_, m)| *m).collect();
    let scale = ScoreScale::fit(&metrics, distinct_annotations);

    let mut targets: HashMap<String, Vec<f64>> = HashMap::new();
    let mut controls: HashMap<String, Vec<f64>> = HashMap::new();

    for (record, metric) in &scored {
        let bucket = if record.item_type.is_target() {
            &mut targets
        } else if record.item_type.is_bad() {
            &mut controls
        } else {
            continue;
        };
        bucket
            .entry(policy.matching_key(record))
            .or_default()
            .push(scale.z_score(*metric));
    }

    // Index-aligned per-key means: x[i] and y[i] always come from the same
    // matched key.
    let mut bad_means = Vec::new();
    let mut target_means = Vec::new();
    for (key, target_scores) in &targets {
        let Some(control_scores) = controls.get(key) else {
            continue;
        };
        bad_means.push(mean(control_scores));
        target_means.push(mean(target_scores));
    }

    match mann_whitney_u(&bad_means, &target_means, policy.direction) {
        Ok(test) => Reliability::from_p_value(test.p_value),
        Err(_) => Reliability::NotAvailable,
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}
