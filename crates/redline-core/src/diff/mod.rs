//! Two-document comparison pipeline.
//!
//! Data flows strictly forward:
//!
//! ```text
//! LineDiffer ─▶ adapter ─▶ merge (─▶ words) ─▶ align / group ─▶ presentation
//! ```
//!
//! ## Entry point
//!
//! ```
//! use redline_core::diff::{align_for_side_by_side, compute_diff, group_runs};
//!
//! let records = compute_diff("a\nb\nc", "a\nx\nc");
//! let rows = align_for_side_by_side(&records);
//! let inline = group_runs(&records, true);
//! let side_by_side = group_runs(rows, true);
//! assert_eq!(inline.len(), side_by_side.len());
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical records.
//! - **Independent numbering**: old and new line numbers are counted separately
//!   and never reset.
//! - **Conservation**: every old line is the old side of exactly one record and
//!   every new line the new side of exactly one record.
//! - **Totality**: the string entry points never fail.

pub mod adapter;
pub mod align;
pub mod engine;
pub mod group;
pub mod merge;
pub mod model;
pub mod search;
pub mod words;

pub use align::align_for_side_by_side;
pub use engine::{compute_diff, compute_diff_bytes, compute_diff_using, compute_diff_with};
pub use group::{group_runs, Collapsible, ExpandedGroups, COLLAPSE_THRESHOLD};
pub use merge::Pairing;
pub use model::{
    AlignedRow, Comparison, DiffStats, LineKind, LineRecord, RunGroup, SegmentTag, WordSegment,
};
pub use search::{find_matches, record_matches, SearchCursor};
