use annostat::core::calculator::reliability::{Reliability, assess_reliability};
use annostat::models::task_kind::TaskKind;

mod common;
use common::{plain_policy, policy_for, rec};

#[test]
fn no_control_items_is_not_available() {
    let records = vec![
        rec("1", None, None, Some(80.0), "TGT", "s1", "sysA"),
        rec("2", None, None, Some(75.0), "TGT", "s2", "sysA"),
    ];
    let result = assess_reliability(&records, 2, &plain_policy());
    assert_eq!(result, Reliability::NotAvailable);
    assert_eq!(result.render(), "n/a");
}

#[test]
fn no_matched_keys_is_not_available() {
    // Target and control exist but never share a key.
    let records = vec![
        rec("1", None, None, Some(80.0), "TGT", "s1", "sysA"),
        rec("2", None, None, Some(30.0), "BAD", "s2", "sysA"),
    ];
    assert_eq!(
        assess_reliability(&records, 2, &plain_policy()),
        Reliability::NotAvailable
    );
}

#[test]
fn discriminating_annotator_gets_small_p_value() {
    // Five matched pairs, controls always scored far below targets.
    let tgt_scores = [80.0, 82.0, 78.0, 81.0, 79.0];
    let bad_scores = [40.0, 42.0, 38.0, 41.0, 39.0];

    let mut records = Vec::new();
    for (i, (t, b)) in tgt_scores.iter().zip(bad_scores).enumerate() {
        let seg = format!("s{i}");
        records.push(rec(&format!("t{i}"), None, None, Some(*t), "TGT", &seg, "sysA"));
        records.push(rec(&format!("b{i}"), None, None, Some(b), "BAD", &seg, "sysA"));
    }

    let result = assess_reliability(&records, 10, &plain_policy());
    // One arrangement out of C(10,5) = 252 fully separates the samples.
    assert_eq!(result.render(), "0.003968");
}

#[test]
fn record_order_does_not_change_p_value() {
    let mut records = Vec::new();
    for i in 0..5 {
        let seg = format!("s{i}");
        let t = 70.0 + i as f64 * 3.0;
        let b = 30.0 + i as f64 * 5.0;
        records.push(rec(&format!("t{i}"), None, None, Some(t), "TGT", &seg, "sysA"));
        records.push(rec(&format!("b{i}"), None, None, Some(b), "BAD", &seg, "sysA"));
    }

    let forward = assess_reliability(&records, 10, &plain_policy());
    records.reverse();
    let backward = assess_reliability(&records, 10, &plain_policy());
    assert_eq!(forward, backward);
}

#[test]
fn constant_scores_are_not_available() {
    // Everything tied: z-scores are all zero and the test statistic has no
    // variance.
    let mut records = Vec::new();
    for i in 0..4 {
        let seg = format!("s{i}");
        records.push(rec(&format!("t{i}"), None, None, Some(50.0), "TGT", &seg, "sysA"));
        records.push(rec(&format!("b{i}"), None, None, Some(50.0), "BAD", &seg, "sysA"));
    }
    assert_eq!(
        assess_reliability(&records, 8, &plain_policy()),
        Reliability::NotAvailable
    );
}

#[test]
fn single_matched_pair_is_well_defined() {
    let records = vec![
        rec("1", None, None, Some(80.0), "TGT", "s1", "sysA"),
        rec("2", None, None, Some(30.0), "BAD", "s1", "sysA"),
    ];
    let result = assess_reliability(&records, 2, &plain_policy());
    assert_eq!(result.render(), "0.500000");
}

#[test]
fn bad_subtype_tags_count_as_controls() {
    let records = vec![
        rec("1", None, None, Some(80.0), "TGT", "s1", "sysA"),
        rec("2", None, None, Some(30.0), "BAD.lexical", "s1", "sysA"),
    ];
    assert_eq!(
        assess_reliability(&records, 2, &plain_policy()).render(),
        "0.500000"
    );
}

#[test]
fn check_and_reference_items_stay_out_of_the_test() {
    let mut records = vec![
        rec("1", None, None, Some(80.0), "TGT", "s1", "sysA"),
        rec("2", None, None, Some(30.0), "BAD", "s1", "sysA"),
    ];
    // CHK/REF shift the annotator's scale but never join the samples.
    records.push(rec("3", None, None, Some(55.0), "CHK", "s9", "sysA"));
    records.push(rec("4", None, None, Some(60.0), "REF", "s8", "sysA"));

    let result = assess_reliability(&records, 4, &plain_policy());
    assert_eq!(result.render(), "0.500000");
}

#[test]
fn esa_campaigns_strip_the_bad_marker_from_keys() {
    let records = vec![
        rec("1", None, None, Some(80.0), "TGT", "12", "sysA"),
        rec("2", None, None, Some(30.0), "BAD", "12#bad", "sysA"),
    ];

    let esa = policy_for(TaskKind::DirectAssessmentDocument, "esa");
    assert_eq!(assess_reliability(&records, 2, &esa).render(), "0.500000");

    // Without the option the keys never match.
    let plain = policy_for(TaskKind::DirectAssessmentDocument, "");
    assert_eq!(
        assess_reliability(&records, 2, &plain),
        Reliability::NotAvailable
    );
}

#[test]
fn segment_only_matching_for_data_assessment() {
    // Target ids differ between the TGT and BAD variants; only the
    // segment-keyed policy can match them.
    let records = vec![
        rec("1", None, None, Some(80.0), "TGT", "s1", "sysA"),
        rec("2", None, None, Some(30.0), "BAD", "s1", "sysB"),
    ];

    let data = policy_for(TaskKind::DataAssessment, "");
    assert_eq!(assess_reliability(&records, 2, &data).render(), "0.500000");

    let direct = policy_for(TaskKind::DirectAssessment, "");
    assert_eq!(
        assess_reliability(&records, 2, &direct),
        Reliability::NotAvailable
    );
}

#[test]
fn mqm_metric_uses_negated_issue_counts() {
    let mut records = Vec::new();
    for i in 0..5 {
        let seg = format!("s{i}");
        let mut tgt = rec(&format!("t{i}"), None, None, None, "TGT", &seg, "sysA");
        tgt.mqm = Some(issue_list(i));
        let mut bad = rec(&format!("b{i}"), None, None, None, "BAD", &seg, "sysA");
        bad.mqm = Some(issue_list(i + 5));
        records.push(tgt);
        records.push(bad);
    }

    let mqm = policy_for(TaskKind::DirectAssessmentDocument, "mqm");
    assert_eq!(assess_reliability(&records, 10, &mqm).render(), "0.003968");

    // Without the MQM option there is no metric to test on.
    let plain = policy_for(TaskKind::DirectAssessmentDocument, "");
    assert_eq!(
        assess_reliability(&records, 10, &plain),
        Reliability::NotAvailable
    );
}

#[test]
fn inverted_scale_flips_the_alternative() {
    let mut records = Vec::new();
    for i in 0..5 {
        let seg = format!("s{i}");
        let t = 80.0 + i as f64;
        let b = 40.0 + i as f64;
        records.push(rec(&format!("t{i}"), None, None, Some(t), "TGT", &seg, "sysA"));
        records.push(rec(&format!("b{i}"), None, None, Some(b), "BAD", &seg, "sysA"));
    }

    // Controls sit below targets, so the flipped alternative is certain.
    let inverted = policy_for(TaskKind::DirectAssessment, "invertedscale");
    assert_eq!(assess_reliability(&records, 10, &inverted).render(), "1.000000");
}

fn issue_list(count: usize) -> String {
    let issues: Vec<String> = (0..count)
        .map(|i| format!("{{\"severity\":\"minor\",\"span\":[{i},{}]}}", i + 1))
        .collect();
    format!("[{}]", issues.join(","))
}
