//! Line-level edit adapter.
//!
//! Flattens the hunks reported by a [`LineDiffer`](crate::primitives::LineDiffer)
//! into per-line records numbered independently within each document.

use crate::diff::model::LineRecord;
use crate::primitives::{Hunk, HunkTag};

/// Next line number of each document.
///
/// Threaded through [`flatten_hunks`] as fold state: unchanged lines advance
/// both counters, added lines only `new`, removed lines only `old`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCounters {
    pub old: usize,
    pub new: usize,
}

impl Default for LineCounters {
    fn default() -> Self {
        Self { old: 1, new: 1 }
    }
}

impl LineCounters {
    /// Emit the record for one line of a hunk and return the advanced counters.
    fn step(self, tag: HunkTag, line: &str) -> (LineRecord, Self) {
        match tag {
            HunkTag::Common => (
                LineRecord::unchanged(self.old, line),
                Self {
                    old: self.old + 1,
                    new: self.new + 1,
                },
            ),
            HunkTag::AddedOnly => (
                LineRecord::added(self.new, line),
                Self {
                    new: self.new + 1,
                    ..self
                },
            ),
            HunkTag::RemovedOnly => (
                LineRecord::removed(self.old, line),
                Self {
                    old: self.old + 1,
                    ..self
                },
            ),
        }
    }
}

/// Split a hunk's text block into lines.
///
/// Only the empty fragment left behind by a final `'\n'` is dropped; leading,
/// interior and whitespace-only lines are real lines and are kept.
pub fn split_block(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Flatten hunks into unchanged/added/removed records.
///
/// Unchanged hunks are trusted to carry the same text on both sides.
pub fn flatten_hunks(hunks: &[Hunk]) -> Vec<LineRecord> {
    let mut records = Vec::new();
    let mut counters = LineCounters::default();

    for hunk in hunks {
        for line in split_block(&hunk.text) {
            let (record, next) = counters.step(hunk.tag, line);
            records.push(record);
            counters = next;
        }
    }

    records
}
