//! Row aggregation: one status row per annotator.
//!
//! Pure transform over the record set supplied by the data layer; nothing
//! here touches the database or any shared state, and no per-annotator
//! failure can spill into a sibling's row.

use crate::core::calculator::busy_time::{document_time_pairs, estimate_work};
use crate::core::calculator::reliability::assess_reliability;
use crate::core::calculator::status::{classify, progress_text};
use crate::core::policy::CampaignPolicy;
use crate::models::annotator::Annotator;
use crate::models::record::AnnotationRecord;
use crate::models::status_row::AnnotatorStatusRow;
use crate::utils::time::{format_duration, format_epoch};
use std::collections::HashSet;

/// Everything the engine needs about one annotator, as supplied by the
/// data layer. `total_items` is `None` when the assigned task could not be
/// resolved.
#[derive(Debug)]
pub struct AnnotatorInput {
    pub annotator: Annotator,
    pub records: Vec<AnnotationRecord>,
    pub total_items: Option<u32>,
}

pub struct Core;

impl Core {
    pub fn build_status_rows(
        inputs: &[AnnotatorInput],
        policy: &CampaignPolicy,
        idle_threshold: f64,
    ) -> Vec<AnnotatorStatusRow> {
        inputs
            .iter()
            .map(|input| Self::build_annotator_row(input, policy, idle_threshold))
            .collect()
    }

    pub fn build_annotator_row(
        input: &AnnotatorInput,
        policy: &CampaignPolicy,
        idle_threshold: f64,
    ) -> AnnotatorStatusRow {
        let records = &input.records;
        let has_data = !records.is_empty();

        let annotations = records
            .iter()
            .map(|r| r.record_identity.as_str())
            .collect::<HashSet<_>>()
            .len();

        let first_epoch = records
            .iter()
            .filter_map(|r| r.start_time)
            .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.min(t))));
        let last_epoch = records
            .iter()
            .filter_map(|r| r.end_time)
            .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |a| a.max(t))));

        let (first_full, first_trim) = format_epoch(first_epoch);
        let (last_full, last_trim) = format_epoch(last_epoch);

        let time_pairs: Vec<(f64, f64)> = if policy.document_grouped_times {
            document_time_pairs(records)
        } else {
            records.iter().filter_map(|r| r.time_pair()).collect()
        };
        let estimate = estimate_work(&time_pairs, idle_threshold);

        // Records missing one timestamp still widen the coarse span.
        let coarse_seconds = estimate.coarse_seconds.or(match (first_epoch, last_epoch) {
            (Some(first), Some(last)) => Some(((last - first) as i64).max(0)),
            _ => None,
        });

        let busy_seconds = estimate.real_seconds;
        let mut busy_plain = "n/a".to_string();
        let mut busy_spaced = String::new();
        if busy_seconds > 0.0 {
            busy_plain = format_duration(busy_seconds as i64, false);
            busy_spaced = format_duration(busy_seconds as i64, true);
        }

        let mut coarse_plain = String::new();
        let mut coarse_spaced = String::new();
        if let Some(coarse) = coarse_seconds {
            coarse_plain = format_duration(coarse, false);
            coarse_spaced = format_duration(coarse, true);
        }

        // MQM/ESA campaigns show the merged estimate next to the coarse
        // upper bound in the plain cell.
        if policy.merged_time_display && busy_plain != "n/a" && !coarse_plain.is_empty() {
            busy_plain = format!("{}--{}", busy_plain, coarse_plain);
        }

        let reliability = assess_reliability(records, annotations, policy);

        let progress = progress_text(annotations, input.total_items);
        let status = classify(
            input.annotator.is_active,
            annotations,
            input.total_items,
            has_data,
        );

        AnnotatorStatusRow {
            username: input.annotator.username.clone(),
            is_active: input.annotator.is_active,
            annotations,
            first_epoch,
            first_full,
            first_trim,
            last_epoch,
            last_full,
            last_trim,
            busy_seconds,
            busy_plain,
            busy_spaced,
            coarse_seconds,
            coarse_plain,
            coarse_spaced,
            reliability,
            progress,
            status,
            total_items: input.total_items,
            has_data,
        }
    }
}
