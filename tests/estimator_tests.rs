use annostat::core::calculator::busy_time::{
    IDLE_GAP_THRESHOLD_SECS, document_time_pairs, estimate_work,
};

mod common;
use common::rec;

#[test]
fn empty_input_yields_no_estimates() {
    let estimate = estimate_work(&[], IDLE_GAP_THRESHOLD_SECS);
    assert_eq!(estimate.coarse_seconds, None);
    assert_eq!(estimate.real_seconds, 0.0);
}

#[test]
fn single_short_interval_counts_its_own_span() {
    let estimate = estimate_work(&[(100.0, 350.0)], IDLE_GAP_THRESHOLD_SECS);
    assert_eq!(estimate.coarse_seconds, Some(250));
    // The flattened timeline of one interval has a single start->end gap,
    // counted because 250s is below the idle threshold.
    assert_eq!(estimate.real_seconds, 250.0);
}

#[test]
fn single_long_interval_counts_nothing_as_real() {
    // 20 minutes between start and end exceeds the idle threshold, so the
    // flattened timeline has no countable gap.
    let estimate = estimate_work(&[(0.0, 1200.0)], IDLE_GAP_THRESHOLD_SECS);
    assert_eq!(estimate.coarse_seconds, Some(1200));
    assert_eq!(estimate.real_seconds, 0.0);
}

#[test]
fn gaps_at_or_above_threshold_are_breaks() {
    // Three short sessions separated by >= 10 minute pauses.
    let pairs = [(0.0, 100.0), (700.0, 800.0), (1500.0, 1600.0)];
    let estimate = estimate_work(&pairs, IDLE_GAP_THRESHOLD_SECS);
    assert_eq!(estimate.coarse_seconds, Some(1600));
    // Only the intra-session gaps (100s each) survive the filter.
    assert_eq!(estimate.real_seconds, 300.0);
}

#[test]
fn exactly_threshold_gap_is_excluded() {
    let pairs = [(0.0, 100.0), (700.0, 750.0)];
    let estimate = estimate_work(&pairs, IDLE_GAP_THRESHOLD_SECS);
    // 600s between 100 and 700 is not strictly below the threshold.
    assert_eq!(estimate.real_seconds, 100.0 + 50.0);
}

#[test]
fn overlapping_intervals_merge_into_one_timeline() {
    // Boundary timeline 0, 90, 100, 200: all gaps below the threshold.
    let pairs = [(0.0, 100.0), (90.0, 200.0)];
    let estimate = estimate_work(&pairs, IDLE_GAP_THRESHOLD_SECS);
    assert_eq!(estimate.coarse_seconds, Some(200));
    assert_eq!(estimate.real_seconds, 200.0);
}

#[test]
fn coarse_spans_first_start_to_last_end() {
    let pairs = [(50.0, 80.0), (10.0, 40.0), (90.0, 95.0)];
    let estimate = estimate_work(&pairs, IDLE_GAP_THRESHOLD_SECS);
    assert_eq!(estimate.coarse_seconds, Some(85));
}

#[test]
fn document_pairs_merge_per_document_and_target() {
    let mut a1 = rec("1", Some(0.0), Some(30.0), Some(1.0), "TGT", "s1", "sysA");
    a1.document_key = Some("doc1".to_string());
    let mut a2 = rec("2", Some(40.0), Some(90.0), Some(1.0), "TGT", "s2", "sysA");
    a2.document_key = Some("doc1".to_string());
    let mut b = rec("3", Some(500.0), Some(600.0), Some(1.0), "TGT", "s1", "sysB");
    b.document_key = Some("doc2".to_string());

    let mut pairs = document_time_pairs(&[a1, a2, b]);
    pairs.sort_by(|x, y| x.0.total_cmp(&y.0));
    assert_eq!(pairs, vec![(0.0, 90.0), (500.0, 600.0)]);
}

#[test]
fn records_without_both_timestamps_are_skipped_in_document_grouping() {
    let mut incomplete = rec("1", Some(0.0), None, Some(1.0), "TGT", "s1", "sysA");
    incomplete.document_key = Some("doc1".to_string());
    assert!(document_time_pairs(&[incomplete]).is_empty());
}
