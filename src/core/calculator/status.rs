//! Discrete per-annotator status and progress text.

use serde::Serialize;

/// Mutually exclusive annotator states, in precedence order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Status {
    /// Account is inactive; wins over everything else.
    Blocked,
    /// Annotations exist but the assigned total could not be resolved.
    Error,
    Complete,
    InProgress,
    Idle,
}

impl Status {
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Blocked => "🚫",
            Status::Error => "❌",
            Status::Complete => "✅",
            Status::InProgress => "🛠️",
            Status::Idle => "💤",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Blocked => "blocked",
            Status::Error => "error",
            Status::Complete => "complete",
            Status::InProgress => "in-progress",
            Status::Idle => "idle",
        }
    }
}

/// Classify one annotator from activity flags and progress counts.
///
/// `total_items` is `None` when the assigned task could not be resolved,
/// which is only an error state when annotations actually exist.
pub fn classify(
    is_active: bool,
    annotations: usize,
    total_items: Option<u32>,
    has_data: bool,
) -> Status {
    if !is_active {
        return Status::Blocked;
    }

    if annotations > 0 && total_items.is_none() {
        return Status::Error;
    }

    if let Some(total) = total_items
        && total > 0
    {
        if annotations >= total as usize {
            return Status::Complete;
        }
        if annotations > 0 {
            return Status::InProgress;
        }
        return Status::Idle;
    }

    if annotations > 0 || has_data {
        return Status::InProgress;
    }

    Status::Idle
}

/// Progress cell text for the status table.
pub fn progress_text(annotations: usize, total_items: Option<u32>) -> String {
    match total_items {
        None if annotations > 0 => "Task not found".to_string(),
        None => "No task assigned".to_string(),
        Some(0) => "0/0".to_string(),
        Some(total) => {
            let ratio = (annotations as f64 / total as f64).min(1.0);
            format!("{}/{} ({:.0}%)", annotations, total, ratio * 100.0)
        }
    }
}
