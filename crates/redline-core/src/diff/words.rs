//! Word-level sub-diff of a modified line.

use crate::diff::model::{SegmentTag, WordSegment};
use crate::primitives::{HunkTag, WordDiffer};

fn segment_tag(tag: HunkTag) -> SegmentTag {
    match tag {
        HunkTag::Common => SegmentTag::Unchanged,
        HunkTag::AddedOnly => SegmentTag::Added,
        HunkTag::RemovedOnly => SegmentTag::Removed,
    }
}

/// Word segments turning `old` into `new`, as reported by `differ`.
///
/// Adjacent hunks with the same tag are merged, so every segment is a maximal
/// run and no segment is empty.
pub fn word_segments<W: WordDiffer + ?Sized>(differ: &W, old: &str, new: &str) -> Vec<WordSegment> {
    let mut segments: Vec<WordSegment> = Vec::new();
    for hunk in differ.diff_words(old, new) {
        if hunk.text.is_empty() {
            continue;
        }
        let tag = segment_tag(hunk.tag);
        match segments.last_mut() {
            Some(last) if last.tag == tag => last.text.push_str(&hunk.text),
            _ => segments.push(WordSegment::new(tag, hunk.text)),
        }
    }
    segments
}
