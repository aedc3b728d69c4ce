//! Visual grouping of rows committed together
//!
//! The search backend returns one row per changed file, so a commit touching
//! several files shows up as a run of adjacent rows sharing the same commit
//! metadata. Those runs are rendered with a single merged description cell.
//!
//! ## Algorithm
//!
//! A single left-to-right pass keeps the index where the current run started
//! and compares every row against that first row (not against its immediate
//! predecessor). Only runs of two or more rows produce a span.
//!
//! Grouping is adjacency-based: rows with identical keys that are separated
//! by an unrelated row end up in different groups. Callers must pass rows in
//! the order the backend returned them.

use crate::artifacts::core::text::truncate_chars;
use crate::artifacts::rows::GROUP_DATE_LENGTH;
use crate::artifacts::rows::row::Row;
use derive_new::new;
use serde::Serialize;
use std::fmt;

/// Contiguous run of rows rendered as one merged block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, new)]
pub struct GroupSpan {
    start: usize,
    row_count: usize,
}

impl GroupSpan {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Index of the last row covered by the span (inclusive)
    pub fn last(&self) -> usize {
        self.start + self.row_count - 1
    }
}

impl fmt::Display for GroupSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={} ({} rows)", self.start, self.last(), self.row_count)
    }
}

/// Whether two rows belong to the same logical commit
///
/// Compares repository, calendar day, author, branch and description. Only the
/// date part of the timestamp is compared so that files of one commit stored
/// with slightly different times still merge.
pub fn are_rows_mergable(a: &Row, b: &Row) -> bool {
    a.repository() == b.repository()
        && truncate_chars(a.timestamp(), GROUP_DATE_LENGTH)
            == truncate_chars(b.timestamp(), GROUP_DATE_LENGTH)
        && a.author() == b.author()
        && a.branch() == b.branch()
        && a.description() == b.description()
}

/// Compute the spans of adjacent rows that should be merged visually
pub fn compute_group_spans(rows: &[Row]) -> Vec<GroupSpan> {
    let mut spans = Vec::new();
    if rows.is_empty() {
        return spans;
    }

    let mut group_start = 0;
    for index in 1..rows.len() {
        if !are_rows_mergable(&rows[index], &rows[group_start]) {
            if index - group_start > 1 {
                spans.push(GroupSpan::new(group_start, index - group_start));
            }
            group_start = index;
        }
    }

    let last = rows.len() - 1;
    if are_rows_mergable(&rows[last], &rows[group_start]) && group_start != last {
        spans.push(GroupSpan::new(group_start, last - group_start + 1));
    }

    tracing::debug!(
        rows = rows.len(),
        spans = spans.len(),
        "computed group spans"
    );

    spans
}
