//! Comparison entry points.
//!
//! [`compute_diff`] and friends compose the line adapter with the run merger.
//! [`compute_diff_bytes`] is the request-level entry point: it decodes raw
//! document bytes, logs the operation and wraps the result in a
//! [`Comparison`].

use std::time::Instant;

use crate::config::DiffOptions;
use crate::diff::adapter::flatten_hunks;
use crate::diff::merge::{merge_runs, Pairing};
use crate::diff::model::{Comparison, LineRecord};
use crate::errors::{ExError, RedlineError};
use crate::primitives::{LineDiffer, WordDiffer};
use crate::{log_op_end, log_op_error, log_op_start};

/// Classify the lines of two documents with default options.
pub fn compute_diff(old: &str, new: &str) -> Vec<LineRecord> {
    compute_diff_with(old, new, &DiffOptions::default())
}

/// Classify the lines of two documents.
pub fn compute_diff_with(old: &str, new: &str, options: &DiffOptions) -> Vec<LineRecord> {
    let differ = options.differ();
    compute_diff_using(old, new, &differ, &differ, Pairing::from(options))
}

/// Classify the lines of two documents with caller-supplied primitives.
pub fn compute_diff_using<L, W>(
    old: &str,
    new: &str,
    lines: &L,
    words: &W,
    pairing: Pairing,
) -> Vec<LineRecord>
where
    L: LineDiffer + ?Sized,
    W: WordDiffer + ?Sized,
{
    let hunks = lines.diff_lines(old, new);
    let records = flatten_hunks(&hunks);
    tracing::trace!(hunks = hunks.len(), records = records.len(), "flattened line hunks");
    merge_runs(records, words, pairing)
}

fn decode<'a>(side: &str, bytes: &'a [u8]) -> Result<&'a str, RedlineError> {
    std::str::from_utf8(bytes).map_err(|e| RedlineError::InvalidUtf8 {
        side: side.to_string(),
        valid_up_to: e.valid_up_to(),
    })
}

/// Compare two raw documents.
///
/// # Errors
///
/// - `InvalidEncoding` — either document is not valid UTF-8. Presentations
///   surface this as "could not compare files"; no partial result exists.
pub fn compute_diff_bytes(
    old: &[u8],
    new: &[u8],
    options: &DiffOptions,
) -> Result<Comparison, ExError> {
    let op = "compute_diff_bytes";
    let started = Instant::now();
    log_op_start!(op, old_bytes = old.len(), new_bytes = new.len());

    let texts = decode("old", old).and_then(|o| decode("new", new).map(|n| (o, n)));
    let (old_text, new_text) = match texts {
        Ok(texts) => texts,
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(ExError::from(err).with_op(op));
        }
    };

    let comparison = Comparison::new(compute_diff_with(old_text, new_text, options));

    log_op_end!(
        op,
        duration_ms = started.elapsed().as_millis() as u64,
        request_id = %comparison.request_id,
        record_count = comparison.records.len(),
        old_lines = comparison.stats.old_line_count(),
        new_lines = comparison.stats.new_line_count()
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::LineKind;
    use crate::errors::ExErrorKind;
    use crate::primitives::{Hunk, HunkTag};

    struct FixedLines(Vec<Hunk>);

    impl LineDiffer for FixedLines {
        fn diff_lines(&self, _old: &str, _new: &str) -> Vec<Hunk> {
            self.0.clone()
        }
    }

    #[test]
    fn test_custom_primitive_drives_pipeline() {
        let lines = FixedLines(vec![
            Hunk::new(HunkTag::RemovedOnly, "a\n"),
            Hunk::new(HunkTag::AddedOnly, "b\n"),
        ]);
        let records = compute_diff_using(
            "ignored",
            "ignored",
            &lines,
            &crate::primitives::SimilarDiffer::default(),
            Pairing::Positional,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, LineKind::Modified);
    }

    #[test]
    fn test_bytes_entry_rejects_invalid_utf8() {
        let err = compute_diff_bytes(b"ok", &[0x66, 0xff, 0x66], &DiffOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidEncoding);
        assert_eq!(err.side(), Some("new"));
        assert_eq!(err.op(), Some("compute_diff_bytes"));
        assert!(err.message().contains("offset 1"));
    }

    #[test]
    fn test_bytes_entry_wraps_records_with_stats() {
        let comparison =
            compute_diff_bytes(b"a\nb\n", b"a\nc\n", &DiffOptions::default()).unwrap();
        assert_eq!(comparison.records.len(), 2);
        assert_eq!(comparison.stats.modified, 1);
        assert_eq!(comparison.stats.unchanged, 1);
    }
}
