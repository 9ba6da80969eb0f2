//! Redline Core - two-document text comparison engine
//!
//! This crate turns two text documents into a classified, line-level
//! comparison suitable for inline and side-by-side presentation:
//! - Line-level edit adapter over an external line-diff primitive
//! - Run classifier merging delete/insert runs into modified lines
//! - Word-level sub-diff of modified lines
//! - Side-by-side aligner and collapsible run grouper
//! - Summary statistics and search over the classified records
//!
//! Every stage is a pure transform; nothing here renders markup.

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod primitives;

// Re-export commonly used types
pub use config::{DiffOptions, PairingStrategy};
pub use diff::{
    align_for_side_by_side, compute_diff, compute_diff_bytes, compute_diff_with, group_runs,
    AlignedRow, Collapsible, Comparison, DiffStats, LineKind, LineRecord, RunGroup, SegmentTag,
    WordSegment,
};
pub use errors::{ExError, ExErrorKind, RedlineError, Result};
pub use primitives::{DiffAlgorithm, Hunk, HunkTag, LineDiffer, SimilarDiffer, WordDiffer};

pub use redline_core_types as types;

#[doc(hidden)]
pub use tracing as __tracing;
