//! External diff primitives consumed by the comparison pipeline.
//!
//! The pipeline never computes a longest common subsequence itself. It asks a
//! [`LineDiffer`] for a line-granularity edit script and a [`WordDiffer`] for a
//! word-granularity one, and only classifies, merges and aligns what they
//! report. [`SimilarDiffer`] implements both on top of the `similar` crate.

pub mod similar_backend;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use similar_backend::SimilarDiffer;

/// Which side(s) of the comparison a hunk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HunkTag {
    /// Present in both texts
    Common,
    /// Present only in the new text
    AddedOnly,
    /// Present only in the old text
    RemovedOnly,
}

/// A maximal block reported by a primitive as wholly common, added or removed.
///
/// For line diffs `text` is the literal multi-line block, newline characters
/// included. For word diffs it is a run of words and whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub tag: HunkTag,
    pub text: String,
}

impl Hunk {
    pub fn new(tag: HunkTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }
}

/// Line-granularity diff primitive.
pub trait LineDiffer {
    /// Compute the ordered hunks turning `old` into `new`, one hunk per
    /// maximal run of lines sharing a tag.
    fn diff_lines(&self, old: &str, new: &str) -> Vec<Hunk>;
}

/// Word-granularity diff primitive.
pub trait WordDiffer {
    /// Compute the ordered word/whitespace hunks turning `old` into `new`.
    fn diff_words(&self, old: &str, new: &str) -> Vec<Hunk>;
}

/// Edit-script algorithm used by [`SimilarDiffer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) algorithm; minimal edit scripts
    #[default]
    Myers,
    /// Patience diff; anchors on unique lines, friendlier on code
    Patience,
    /// Classic dynamic-programming LCS
    Lcs,
}

impl DiffAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffAlgorithm::Myers => "myers",
            DiffAlgorithm::Patience => "patience",
            DiffAlgorithm::Lcs => "lcs",
        }
    }
}

impl FromStr for DiffAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "myers" => Ok(DiffAlgorithm::Myers),
            "patience" => Ok(DiffAlgorithm::Patience),
            "lcs" => Ok(DiffAlgorithm::Lcs),
            other => Err(format!(
                "unknown diff algorithm '{}' (expected myers, patience or lcs)",
                other
            )),
        }
    }
}

impl std::fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
