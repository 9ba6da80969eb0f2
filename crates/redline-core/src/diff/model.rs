//! Comparison output types.
//!
//! Everything here is plain value data: produced fresh for each comparison,
//! never mutated afterwards, and consumed read-only by presentations.

use redline_core_types::RequestId;
use serde::{Deserialize, Serialize};

/// Classification of one line record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Same text in both documents
    Unchanged,
    /// Present only in the new document
    Added,
    /// Present only in the old document
    Removed,
    /// Edited in place; carries word segments
    Modified,
}

/// Classification of one word segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentTag {
    Unchanged,
    Added,
    Removed,
}

/// A contiguous run of words and whitespace within a modified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSegment {
    pub text: String,
    pub tag: SegmentTag,
}

impl WordSegment {
    pub fn new(tag: SegmentTag, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// Rebuild the old line from its word segments.
pub fn old_side_text(segments: &[WordSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.tag != SegmentTag::Added)
        .map(|s| s.text.as_str())
        .collect()
}

/// Rebuild the new line from its word segments.
pub fn new_side_text(segments: &[WordSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.tag != SegmentTag::Removed)
        .map(|s| s.text.as_str())
        .collect()
}

/// One line of either document after classification.
///
/// `line_number` is 1-based and counts within the record's own document:
/// old numbering for unchanged, removed and modified records, new numbering
/// for added records. Construct through the kind-specific constructors so the
/// side-presence rules hold:
///
/// | kind      | old_text | new_text | word_segments |
/// |-----------|----------|----------|---------------|
/// | unchanged | yes      | yes      | no            |
/// | added     | no       | yes      | no            |
/// | removed   | yes      | no       | no            |
/// | modified  | yes      | yes      | yes           |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub line_number: usize,
    pub kind: LineKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_segments: Option<Vec<WordSegment>>,
}

impl LineRecord {
    pub fn unchanged(line_number: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            line_number,
            kind: LineKind::Unchanged,
            old_text: Some(text.clone()),
            new_text: Some(text),
            word_segments: None,
        }
    }

    pub fn added(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            kind: LineKind::Added,
            old_text: None,
            new_text: Some(text.into()),
            word_segments: None,
        }
    }

    pub fn removed(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            kind: LineKind::Removed,
            old_text: Some(text.into()),
            new_text: None,
            word_segments: None,
        }
    }

    pub fn modified(
        line_number: usize,
        old_text: impl Into<String>,
        new_text: impl Into<String>,
        word_segments: Vec<WordSegment>,
    ) -> Self {
        Self {
            line_number,
            kind: LineKind::Modified,
            old_text: Some(old_text.into()),
            new_text: Some(new_text.into()),
            word_segments: Some(word_segments),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.kind == LineKind::Unchanged
    }

    /// Text shown for the record in a single-column view: the old side when
    /// present, otherwise the new side.
    pub fn text(&self) -> &str {
        self.old_text
            .as_deref()
            .or(self.new_text.as_deref())
            .unwrap_or_default()
    }

    /// Segments of a modified record; empty for every other kind.
    pub fn segments(&self) -> &[WordSegment] {
        self.word_segments.as_deref().unwrap_or_default()
    }
}

/// One row of the two-column presentation.
///
/// Rows borrow the records they show. Unchanged and modified records appear
/// on both sides of a single row; removed and added records fill one side
/// each, and the other side stays empty past the shorter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignedRow<'a> {
    pub old_side: Option<&'a LineRecord>,
    pub new_side: Option<&'a LineRecord>,
}

impl<'a> AlignedRow<'a> {
    /// Row showing the same record on both sides.
    pub fn both(record: &'a LineRecord) -> Self {
        Self {
            old_side: Some(record),
            new_side: Some(record),
        }
    }

    pub fn old_only(record: &'a LineRecord) -> Self {
        Self {
            old_side: Some(record),
            new_side: None,
        }
    }

    pub fn new_only(record: &'a LineRecord) -> Self {
        Self {
            old_side: None,
            new_side: Some(record),
        }
    }

    /// Iterate over the present sides, old first.
    pub fn sides(&self) -> impl Iterator<Item = &'a LineRecord> {
        self.old_side.into_iter().chain(self.new_side)
    }
}

/// One entry of a grouped presentation.
///
/// `index` and `start_index` are absolute positions in the grouped input, so
/// presentation state keyed by entry position stays valid whether or not a
/// run was collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RunGroup<T> {
    /// A single entry shown as-is
    Change { index: usize, entry: T },
    /// A run of more than three unchanged entries, shown as one summary
    Collapsed {
        start_index: usize,
        entries: Vec<T>,
        first_line: usize,
        last_line: usize,
    },
}

impl<T> RunGroup<T> {
    /// Number of input entries this group covers.
    pub fn len(&self) -> usize {
        match self {
            RunGroup::Change { .. } => 1,
            RunGroup::Collapsed { entries, .. } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, RunGroup::Collapsed { .. })
    }

    /// Iterate over the entries with their absolute input index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        let (start, entries) = match self {
            RunGroup::Change { index, entry } => (*index, std::slice::from_ref(entry)),
            RunGroup::Collapsed {
                start_index,
                entries,
                ..
            } => (*start_index, entries.as_slice()),
        };
        entries
            .iter()
            .enumerate()
            .map(move |(offset, entry)| (start + offset, entry))
    }
}

/// Per-kind record counts of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_records(records: &[LineRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            match record.kind {
                LineKind::Added => stats.added += 1,
                LineKind::Removed => stats.removed += 1,
                LineKind::Modified => stats.modified += 1,
                LineKind::Unchanged => stats.unchanged += 1,
            }
            stats
        })
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.unchanged
    }

    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.modified > 0
    }

    /// Lines of the old document accounted for by these records.
    pub fn old_line_count(&self) -> usize {
        self.unchanged + self.modified + self.removed
    }

    /// Lines of the new document accounted for by these records.
    pub fn new_line_count(&self) -> usize {
        self.unchanged + self.modified + self.added
    }
}

/// Result envelope of one comparison request.
///
/// The request id lets a caller that fires several comparisons keep only the
/// newest result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub request_id: RequestId,
    pub stats: DiffStats,
    pub records: Vec<LineRecord>,
}

impl Comparison {
    pub fn new(records: Vec<LineRecord>) -> Self {
        Self {
            request_id: RequestId::new(),
            stats: DiffStats::from_records(&records),
            records,
        }
    }
}
