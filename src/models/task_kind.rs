use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;

/// Result classes supported by annotation campaigns.
///
/// Mirrors the task/result pairing of the evaluation frontend: "document"
/// kinds collect per-segment rows plus one whole-document summary row,
/// "pairwise" kinds score two targets side by side, and `DataAssessment`
/// is the single-score kind whose batches do not keep matching segment ids
/// between target and control items.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ValueEnum)]
pub enum TaskKind {
    DirectAssessment,
    DirectAssessmentDocument,
    PairwiseAssessment,
    PairwiseAssessmentDocument,
    DataAssessment,
}

impl TaskKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskKind::DirectAssessment => "direct-assessment",
            TaskKind::DirectAssessmentDocument => "direct-assessment-document",
            TaskKind::PairwiseAssessment => "pairwise-assessment",
            TaskKind::PairwiseAssessmentDocument => "pairwise-assessment-document",
            TaskKind::DataAssessment => "data-assessment",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "direct-assessment" => Some(TaskKind::DirectAssessment),
            "direct-assessment-document" => Some(TaskKind::DirectAssessmentDocument),
            "pairwise-assessment" => Some(TaskKind::PairwiseAssessment),
            "pairwise-assessment-document" => Some(TaskKind::PairwiseAssessmentDocument),
            "data-assessment" => Some(TaskKind::DataAssessment),
            _ => None,
        }
    }
}

/// How target and control records are matched into pairs for the
/// reliability test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Match on the segment key alone. Used by the data-assessment kind,
    /// whose batch generator does not keep matching per-item ids between
    /// corresponding TGT and BAD items.
    SegmentOnly,
    /// Match on `"{target}-{segment}"`.
    TargetAndSegment,
}

/// Static per-kind behavior, looked up once per campaign.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    pub key_policy: KeyPolicy,
    /// Document kinds store one whole-document summary row per document;
    /// those rows are excluded from the analytics record set.
    pub excludes_complete_documents: bool,
    /// Whether the kind can carry MQM issue annotations.
    pub mqm_capable: bool,
}

/// Registry mapping each task kind to its behavior.
///
/// Built once at startup and passed down explicitly; replaces ad-hoc
/// class-name lookups at the call sites.
#[derive(Debug)]
pub struct TaskRegistry {
    specs: HashMap<TaskKind, TaskSpec>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        let mut specs = HashMap::new();
        specs.insert(
            TaskKind::DirectAssessment,
            TaskSpec {
                key_policy: KeyPolicy::TargetAndSegment,
                excludes_complete_documents: false,
                mqm_capable: true,
            },
        );
        specs.insert(
            TaskKind::DirectAssessmentDocument,
            TaskSpec {
                key_policy: KeyPolicy::TargetAndSegment,
                excludes_complete_documents: true,
                mqm_capable: true,
            },
        );
        specs.insert(
            TaskKind::PairwiseAssessment,
            TaskSpec {
                key_policy: KeyPolicy::TargetAndSegment,
                excludes_complete_documents: false,
                mqm_capable: false,
            },
        );
        specs.insert(
            TaskKind::PairwiseAssessmentDocument,
            TaskSpec {
                key_policy: KeyPolicy::TargetAndSegment,
                excludes_complete_documents: true,
                mqm_capable: false,
            },
        );
        specs.insert(
            TaskKind::DataAssessment,
            TaskSpec {
                key_policy: KeyPolicy::SegmentOnly,
                excludes_complete_documents: false,
                mqm_capable: false,
            },
        );
        Self { specs }
    }

    pub fn spec(&self, kind: TaskKind) -> TaskSpec {
        self.specs[&kind]
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}
