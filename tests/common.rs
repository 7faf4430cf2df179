#![allow(dead_code)]
use annostat::core::calculator::reliability::Reliability;
use annostat::core::calculator::status::Status;
use annostat::core::policy::CampaignPolicy;
use annostat::models::campaign::CampaignOptions;
use annostat::models::item_type::ItemType;
use annostat::models::record::AnnotationRecord;
use annostat::models::status_row::AnnotatorStatusRow;
use annostat::models::task_kind::{TaskKind, TaskRegistry};
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ans() -> Command {
    cargo_bin_cmd!("annostat")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_annostat.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_annostat.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Record builder for engine-level tests.
pub fn rec(
    identity: &str,
    start: Option<f64>,
    end: Option<f64>,
    score: Option<f64>,
    item_type: &str,
    segment: &str,
    target: &str,
) -> AnnotationRecord {
    AnnotationRecord {
        annotator: "tester".to_string(),
        start_time: start,
        end_time: end,
        score,
        mqm: None,
        segment_key: segment.to_string(),
        target_key: target.to_string(),
        item_type: ItemType::from_db_str(item_type),
        record_identity: identity.to_string(),
        document_key: None,
        is_complete_document: false,
    }
}

/// Bare status row for sorter tests; fields not under test stay neutral.
pub fn row(username: &str, annotations: usize) -> AnnotatorStatusRow {
    AnnotatorStatusRow {
        username: username.to_string(),
        is_active: true,
        annotations,
        first_epoch: None,
        first_full: "Never".to_string(),
        first_trim: String::new(),
        last_epoch: None,
        last_full: "Never".to_string(),
        last_trim: String::new(),
        busy_seconds: 0.0,
        busy_plain: "n/a".to_string(),
        busy_spaced: String::new(),
        coarse_seconds: None,
        coarse_plain: String::new(),
        coarse_spaced: String::new(),
        reliability: Reliability::NotAvailable,
        progress: "No task assigned".to_string(),
        status: Status::Idle,
        total_items: None,
        has_data: false,
    }
}

pub fn policy_for(kind: TaskKind, options: &str) -> CampaignPolicy {
    let registry = TaskRegistry::new();
    CampaignPolicy::select(kind, &CampaignOptions::parse(options), &registry)
}

pub fn plain_policy() -> CampaignPolicy {
    policy_for(TaskKind::DirectAssessment, "")
}
