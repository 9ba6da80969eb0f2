//! Side-by-side aligner.

use crate::diff::model::{AlignedRow, LineKind, LineRecord};

/// Length of the run of `kind` records starting at `start`.
fn run_len(records: &[LineRecord], start: usize, kind: LineKind) -> usize {
    records[start..]
        .iter()
        .take_while(|r| r.kind == kind)
        .count()
}

/// Arrange classified records into two-column rows.
///
/// Unchanged and modified records fill both sides of one row. A removed run
/// and the added run right after it are laid out next to each other by
/// index, leaving the shorter side empty past its end; placeholder text is
/// never invented. An added record with no removed run before it gets a
/// new-side-only row.
///
/// Every input record appears in exactly one row.
pub fn align_for_side_by_side(records: &[LineRecord]) -> Vec<AlignedRow<'_>> {
    let mut rows = Vec::with_capacity(records.len());
    let mut i = 0;

    while i < records.len() {
        let current = &records[i];
        match current.kind {
            LineKind::Unchanged | LineKind::Modified => {
                rows.push(AlignedRow::both(current));
                i += 1;
            }
            LineKind::Removed => {
                let removed_len = run_len(records, i, LineKind::Removed);
                let added_len = run_len(records, i + removed_len, LineKind::Added);
                let removed = &records[i..i + removed_len];
                let added = &records[i + removed_len..i + removed_len + added_len];

                for k in 0..removed_len.max(added_len) {
                    rows.push(AlignedRow {
                        old_side: removed.get(k),
                        new_side: added.get(k),
                    });
                }
                i += removed_len + added_len;
            }
            LineKind::Added => {
                rows.push(AlignedRow::new_only(current));
                i += 1;
            }
        }
    }

    rows
}
