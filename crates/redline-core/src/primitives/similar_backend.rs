//! `similar`-backed implementation of the line and word primitives.

use std::borrow::Cow;
use std::time::Duration;

use similar::{Algorithm, ChangeTag, TextDiff, TextDiffConfig};

use super::{DiffAlgorithm, Hunk, HunkTag, LineDiffer, WordDiffer};

/// Line and word differ built on `similar::TextDiff`.
///
/// With a timeout set, `similar` stops refining once the deadline passes and
/// reports a coarser (still valid) edit script.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarDiffer {
    algorithm: DiffAlgorithm,
    timeout: Option<Duration>,
}

impl SimilarDiffer {
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self {
            algorithm,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    fn config(&self) -> TextDiffConfig {
        let mut config = TextDiff::configure();
        config.algorithm(match self.algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        });
        if let Some(timeout) = self.timeout {
            config.timeout(timeout);
        }
        config
    }
}

/// A final line without a newline must still compare equal to the same line
/// followed by one, otherwise `"x"` vs `"x\ny"` would report `x` as replaced.
fn ensure_trailing_newline(text: &str) -> Cow<'_, str> {
    if text.is_empty() || text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}\n", text))
    }
}

fn hunk_tag(tag: ChangeTag) -> HunkTag {
    match tag {
        ChangeTag::Equal => HunkTag::Common,
        ChangeTag::Insert => HunkTag::AddedOnly,
        ChangeTag::Delete => HunkTag::RemovedOnly,
    }
}

/// Coalesce per-token changes into maximal same-tag hunks.
fn push_coalesced(hunks: &mut Vec<Hunk>, tag: HunkTag, value: &str) {
    match hunks.last_mut() {
        Some(last) if last.tag == tag => last.text.push_str(value),
        _ => hunks.push(Hunk::new(tag, value)),
    }
}

/// Lines including their `'\n'`. Only `'\n'` ends a line; a lone `'\r'` is
/// ordinary text.
fn lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

impl LineDiffer for SimilarDiffer {
    fn diff_lines(&self, old: &str, new: &str) -> Vec<Hunk> {
        let old = ensure_trailing_newline(old);
        let new = ensure_trailing_newline(new);
        let old_lines = lines(&old);
        let new_lines = lines(&new);
        let diff = self.config().diff_slices(&old_lines, &new_lines);

        let mut hunks = Vec::new();
        for change in diff.iter_all_changes() {
            push_coalesced(&mut hunks, hunk_tag(change.tag()), change.value());
        }
        hunks
    }
}

impl WordDiffer for SimilarDiffer {
    fn diff_words(&self, old: &str, new: &str) -> Vec<Hunk> {
        let diff = self.config().diff_words(old, new);

        let mut hunks = Vec::new();
        for change in diff.iter_all_changes() {
            push_coalesced(&mut hunks, hunk_tag(change.tag()), change.value());
        }
        hunks
    }
}
