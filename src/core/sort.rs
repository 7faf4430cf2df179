//! Sorting of annotator status rows.
//!
//! The sort column is selected by a numeric index (the presentation layer
//! passes it straight from the request); anything out of range or
//! unparsable silently falls back to the annotation-count default.

use crate::models::status_row::AnnotatorStatusRow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Username,
    ActiveFlag,
    Annotations,
    FirstActivity,
    LastActivity,
    BusyTime,
    /// Only addressable in the privileged view.
    Reliability,
}

const DEFAULT_SORT: SortField = SortField::Annotations;

/// Map a raw selector to a sort field. `include_reliability` extends the
/// addressable list for privileged viewers.
pub fn resolve_sort_field(selector: Option<&str>, include_reliability: bool) -> SortField {
    let mut fields = vec![
        SortField::Username,
        SortField::ActiveFlag,
        SortField::Annotations,
        SortField::FirstActivity,
        SortField::LastActivity,
        SortField::BusyTime,
    ];
    if include_reliability {
        fields.push(SortField::Reliability);
    }

    let Some(raw) = selector else {
        return DEFAULT_SORT;
    };
    match raw.trim().parse::<usize>() {
        Ok(index) if index < fields.len() => fields[index],
        _ => DEFAULT_SORT,
    }
}

/// Stable sort; missing timestamps and unavailable p-values sort last.
pub fn sort_rows(rows: &mut [AnnotatorStatusRow], field: SortField) {
    rows.sort_by(|a, b| compare(a, b, field));
}

fn compare(a: &AnnotatorStatusRow, b: &AnnotatorStatusRow, field: SortField) -> Ordering {
    match field {
        SortField::Username => a.username.to_lowercase().cmp(&b.username.to_lowercase()),
        SortField::ActiveFlag => a.is_active.cmp(&b.is_active),
        SortField::Annotations => a.annotations.cmp(&b.annotations),
        SortField::FirstActivity => epoch_key(a.first_epoch).total_cmp(&epoch_key(b.first_epoch)),
        SortField::LastActivity => epoch_key(a.last_epoch).total_cmp(&epoch_key(b.last_epoch)),
        SortField::BusyTime => a.busy_seconds.total_cmp(&b.busy_seconds),
        SortField::Reliability => a
            .reliability
            .sort_value()
            .total_cmp(&b.reliability.sort_value()),
    }
}

fn epoch_key(epoch: Option<f64>) -> f64 {
    epoch.unwrap_or(f64::INFINITY)
}
