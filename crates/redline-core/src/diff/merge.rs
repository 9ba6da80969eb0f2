//! Run classifier and modified-line merger.
//!
//! A run of removed records immediately followed by a run of added records is
//! an edit of that region. Pairs taken from the two runs become `modified`
//! records carrying a word-level sub-diff; leftovers keep their original kind.

use std::iter::Peekable;

use similar::TextDiff;

use crate::config::{DiffOptions, PairingStrategy};
use crate::diff::model::{LineKind, LineRecord};
use crate::diff::words::word_segments;
use crate::primitives::WordDiffer;

/// Largest removed × added run product planned by similarity; bigger
/// regions pair positionally.
pub const MAX_SIMILARITY_CELLS: usize = 64 * 64;

/// How the two runs of an edited region are matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pairing {
    /// k-th removed with k-th added, regardless of content
    Positional,
    /// Order-preserving assignment maximising summed character similarity,
    /// considering only pairs whose ratio reaches `threshold`
    Similarity { threshold: f32 },
}

impl From<&DiffOptions> for Pairing {
    fn from(options: &DiffOptions) -> Self {
        match options.pairing {
            PairingStrategy::Positional => Pairing::Positional,
            PairingStrategy::Similarity => Pairing::Similarity {
                threshold: options.similarity_threshold,
            },
        }
    }
}

fn take_run<I>(iter: &mut Peekable<I>, kind: LineKind) -> Vec<LineRecord>
where
    I: Iterator<Item = LineRecord>,
{
    let mut run = Vec::new();
    while let Some(record) = iter.next_if(|r| r.kind == kind) {
        run.push(record);
    }
    run
}

/// Combine a removed and an added record into one record numbered in the
/// old document.
///
/// Identical texts yield an unchanged record, so a modified record always
/// carries at least one real difference.
fn combine<W: WordDiffer + ?Sized>(
    removed: LineRecord,
    added: LineRecord,
    differ: &W,
) -> LineRecord {
    let old_text = removed.old_text.unwrap_or_default();
    let new_text = added.new_text.unwrap_or_default();
    if old_text == new_text {
        return LineRecord::unchanged(removed.line_number, old_text);
    }
    let segments = word_segments(differ, &old_text, &new_text);
    LineRecord::modified(removed.line_number, old_text, new_text, segments)
}

fn pair_positional<W: WordDiffer + ?Sized>(
    removed: Vec<LineRecord>,
    added: Vec<LineRecord>,
    differ: &W,
    out: &mut Vec<LineRecord>,
) {
    let mut removed = removed.into_iter();
    let mut added = added.into_iter();
    loop {
        match (removed.next(), added.next()) {
            (Some(r), Some(a)) => out.push(combine(r, a, differ)),
            (Some(r), None) => out.push(r),
            (None, Some(a)) => out.push(a),
            (None, None) => break,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairOp {
    Match,
    SkipRemoved,
    SkipAdded,
}

/// Plan an order-preserving assignment between the two runs.
///
/// Suffix DP over `(i, j)`: `best[i][j]` is the largest summed similarity
/// achievable with `removed[i..]` and `added[j..]`. Matches win ties so that
/// equally good plans pair as much as possible.
fn plan_similarity(removed: &[LineRecord], added: &[LineRecord], threshold: f32) -> Vec<PairOp> {
    let n = removed.len();
    let m = added.len();

    let score = |i: usize, j: usize| -> Option<f32> {
        let ratio = TextDiff::from_chars(removed[i].text(), added[j].text()).ratio();
        (ratio >= threshold).then_some(ratio)
    };
    let scores: Vec<Vec<Option<f32>>> = (0..n)
        .map(|i| (0..m).map(|j| score(i, j)).collect())
        .collect();

    let mut best = vec![vec![0f32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            let skip = best[i + 1][j].max(best[i][j + 1]);
            best[i][j] = match scores[i][j] {
                Some(s) => skip.max(s + best[i + 1][j + 1]),
                None => skip,
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        match scores[i][j] {
            Some(s) if best[i][j] == s + best[i + 1][j + 1] => {
                ops.push(PairOp::Match);
                i += 1;
                j += 1;
            }
            _ if best[i][j] == best[i + 1][j] => {
                ops.push(PairOp::SkipRemoved);
                i += 1;
            }
            _ => {
                ops.push(PairOp::SkipAdded);
                j += 1;
            }
        }
    }
    ops.extend(std::iter::repeat(PairOp::SkipRemoved).take(n - i));
    ops.extend(std::iter::repeat(PairOp::SkipAdded).take(m - j));
    ops
}

fn pair_by_similarity<W: WordDiffer + ?Sized>(
    removed: Vec<LineRecord>,
    added: Vec<LineRecord>,
    threshold: f32,
    differ: &W,
    out: &mut Vec<LineRecord>,
) {
    let plan = plan_similarity(&removed, &added, threshold);
    let mut removed = removed.into_iter();
    let mut added = added.into_iter();
    // Unmatched lines between two matches: removed first, then added.
    let mut pending_added = Vec::new();

    for op in plan {
        match op {
            PairOp::Match => {
                out.append(&mut pending_added);
                if let (Some(r), Some(a)) = (removed.next(), added.next()) {
                    out.push(combine(r, a, differ));
                }
            }
            PairOp::SkipRemoved => out.extend(removed.next()),
            PairOp::SkipAdded => pending_added.extend(added.next()),
        }
    }
    out.append(&mut pending_added);
}

/// Introduce `modified` records into a flat unchanged/added/removed sequence.
///
/// Records outside a removed-then-added region pass through untouched,
/// including removed runs with no added run after them and added runs with
/// no removed run before them.
pub fn merge_runs<W: WordDiffer + ?Sized>(
    records: Vec<LineRecord>,
    differ: &W,
    pairing: Pairing,
) -> Vec<LineRecord> {
    let mut out = Vec::with_capacity(records.len());
    let mut iter = records.into_iter().peekable();

    while let Some(record) = iter.next() {
        if record.kind != LineKind::Removed {
            out.push(record);
            continue;
        }

        let mut removed = vec![record];
        removed.extend(take_run(&mut iter, LineKind::Removed));
        let added = take_run(&mut iter, LineKind::Added);

        if added.is_empty() {
            out.extend(removed);
            continue;
        }

        match pairing {
            Pairing::Positional => pair_positional(removed, added, differ, &mut out),
            Pairing::Similarity { threshold }
                if removed.len() * added.len() <= MAX_SIMILARITY_CELLS =>
            {
                pair_by_similarity(removed, added, threshold, differ, &mut out)
            }
            Pairing::Similarity { .. } => {
                tracing::debug!(
                    removed = removed.len(),
                    added = added.len(),
                    "edited region too large for similarity pairing, pairing by position"
                );
                pair_positional(removed, added, differ, &mut out)
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::SimilarDiffer;

    fn kinds(records: &[LineRecord]) -> Vec<(LineKind, usize)> {
        records.iter().map(|r| (r.kind, r.line_number)).collect()
    }

    #[test]
    fn test_equal_runs_pair_into_modified() {
        let records = vec![
            LineRecord::removed(2, "b"),
            LineRecord::removed(3, "c"),
            LineRecord::added(2, "x"),
            LineRecord::added(3, "y"),
        ];
        let merged = merge_runs(records, &SimilarDiffer::default(), Pairing::Positional);

        assert_eq!(
            kinds(&merged),
            vec![(LineKind::Modified, 2), (LineKind::Modified, 3)]
        );
        assert_eq!(merged[1].old_text.as_deref(), Some("c"));
        assert_eq!(merged[1].new_text.as_deref(), Some("y"));
    }

    #[test]
    fn test_longer_removed_run_leaves_removed_tail() {
        let records = vec![
            LineRecord::removed(1, "a"),
            LineRecord::removed(2, "b"),
            LineRecord::removed(3, "c"),
            LineRecord::added(1, "x"),
        ];
        let merged = merge_runs(records, &SimilarDiffer::default(), Pairing::Positional);
        assert_eq!(
            kinds(&merged),
            vec![
                (LineKind::Modified, 1),
                (LineKind::Removed, 2),
                (LineKind::Removed, 3)
            ]
        );
    }

    #[test]
    fn test_longer_added_run_leaves_added_tail() {
        let records = vec![
            LineRecord::removed(1, "a"),
            LineRecord::added(1, "x"),
            LineRecord::added(2, "y"),
        ];
        let merged = merge_runs(records, &SimilarDiffer::default(), Pairing::Positional);
        assert_eq!(
            kinds(&merged),
            vec![(LineKind::Modified, 1), (LineKind::Added, 2)]
        );
    }

    #[test]
    fn test_removed_run_without_added_passes_through() {
        let records = vec![
            LineRecord::removed(1, "a"),
            LineRecord::unchanged(2, "b"),
            LineRecord::added(2, "c"),
        ];
        let merged = merge_runs(records.clone(), &SimilarDiffer::default(), Pairing::Positional);
        assert_eq!(merged, records);
    }

    #[test]
    fn test_identical_pair_becomes_unchanged() {
        let records = vec![LineRecord::removed(4, "same"), LineRecord::added(6, "same")];
        let merged = merge_runs(records, &SimilarDiffer::default(), Pairing::Positional);
        assert_eq!(merged, vec![LineRecord::unchanged(4, "same")]);
    }

    #[test]
    fn test_similarity_pairing_skips_unrelated_line() {
        let records = vec![
            LineRecord::removed(1, "fn main() {"),
            LineRecord::removed(2, "    println!(\"hello\");"),
            LineRecord::added(1, "// entry point"),
            LineRecord::added(2, "fn main() -> Result<()> {"),
            LineRecord::added(3, "    println!(\"hello, world\");"),
        ];
        let merged = merge_runs(
            records,
            &SimilarDiffer::default(),
            Pairing::Similarity { threshold: 0.5 },
        );

        assert_eq!(
            kinds(&merged),
            vec![
                (LineKind::Added, 1),
                (LineKind::Modified, 1),
                (LineKind::Modified, 2)
            ]
        );
        assert_eq!(merged[1].new_text.as_deref(), Some("fn main() -> Result<()> {"));
    }

    #[test]
    fn test_similarity_pairing_below_threshold_keeps_both_sides() {
        let records = vec![LineRecord::removed(1, "aaaa"), LineRecord::added(1, "zzzz")];
        let merged = merge_runs(
            records,
            &SimilarDiffer::default(),
            Pairing::Similarity { threshold: 0.5 },
        );
        assert_eq!(
            kinds(&merged),
            vec![(LineKind::Removed, 1), (LineKind::Added, 1)]
        );
    }

    #[test]
    fn test_oversized_region_falls_back_to_positional() {
        let removed = (1..=65).map(|n| LineRecord::removed(n, "aaaa"));
        let added = (1..=65).map(|n| LineRecord::added(n, "zzzz"));
        let records: Vec<LineRecord> = removed.chain(added).collect();

        let merged = merge_runs(
            records,
            &SimilarDiffer::default(),
            Pairing::Similarity { threshold: 0.5 },
        );

        assert_eq!(merged.len(), 65);
        assert!(merged.iter().all(|r| r.kind == LineKind::Modified));
    }

    #[test]
    fn test_pairing_from_options() {
        let mut options = DiffOptions::default();
        assert_eq!(Pairing::from(&options), Pairing::Positional);
        options.pairing = PairingStrategy::Similarity;
        options.similarity_threshold = 0.8;
        assert_eq!(
            Pairing::from(&options),
            Pairing::Similarity { threshold: 0.8 }
        );
    }
}
