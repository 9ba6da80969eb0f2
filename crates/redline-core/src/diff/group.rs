//! Collapsible run grouper.
//!
//! One routine serves both presentations: the inline view groups line
//! records, the side-by-side view groups aligned rows. Entries only need to
//! say whether they are unchanged and which line they start at.

use std::collections::BTreeSet;

use crate::diff::model::{AlignedRow, LineRecord, RunGroup};

/// Runs longer than this many unchanged entries collapse into one group.
pub const COLLAPSE_THRESHOLD: usize = 3;

/// Capability the grouper needs from an entry.
pub trait Collapsible {
    /// Whether the entry may be folded into a collapsed run.
    fn is_unchanged(&self) -> bool;

    /// Line number shown for the entry in a collapsed-run summary.
    fn line_number(&self) -> usize;
}

impl Collapsible for LineRecord {
    fn is_unchanged(&self) -> bool {
        LineRecord::is_unchanged(self)
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<T: Collapsible + ?Sized> Collapsible for &T {
    fn is_unchanged(&self) -> bool {
        (**self).is_unchanged()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}

impl Collapsible for AlignedRow<'_> {
    fn is_unchanged(&self) -> bool {
        let mut sides = self.sides().peekable();
        sides.peek().is_some() && sides.all(LineRecord::is_unchanged)
    }

    /// Old-side number when present, so collapsed summaries of the two views
    /// quote the same range.
    fn line_number(&self) -> usize {
        self.sides().next().map_or(0, |r| r.line_number)
    }
}

fn flush<T: Collapsible>(buffer: &mut Vec<(usize, T)>, groups: &mut Vec<RunGroup<T>>) {
    if buffer.len() > COLLAPSE_THRESHOLD {
        let start_index = buffer[0].0;
        let first_line = buffer[0].1.line_number();
        let last_line = buffer[buffer.len() - 1].1.line_number();
        groups.push(RunGroup::Collapsed {
            start_index,
            entries: buffer.drain(..).map(|(_, entry)| entry).collect(),
            first_line,
            last_line,
        });
    } else {
        groups.extend(
            buffer
                .drain(..)
                .map(|(index, entry)| RunGroup::Change { index, entry }),
        );
    }
}

/// Group entries for display, folding long unchanged runs when enabled.
///
/// With collapsing enabled, consecutive unchanged entries are buffered; a
/// buffer of more than [`COLLAPSE_THRESHOLD`] entries becomes one `Collapsed`
/// group, a shorter one becomes individual `Change` groups. With collapsing
/// disabled every entry is its own `Change` group. Order and absolute
/// indices are preserved either way.
pub fn group_runs<T, I>(entries: I, collapse_enabled: bool) -> Vec<RunGroup<T>>
where
    T: Collapsible,
    I: IntoIterator<Item = T>,
{
    let mut groups = Vec::new();
    let mut buffer: Vec<(usize, T)> = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        if collapse_enabled && entry.is_unchanged() {
            buffer.push((index, entry));
            continue;
        }
        flush(&mut buffer, &mut groups);
        groups.push(RunGroup::Change { index, entry });
    }
    flush(&mut buffer, &mut groups);

    groups
}

/// Which collapsed groups the user has expanded, keyed by group index.
///
/// Owned by the presentation; the grouper never reads it. Indices refer to
/// one grouping, so reset the set whenever a new comparison is grouped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedGroups(BTreeSet<usize>);

impl ExpandedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state of one group; returns whether it is now expanded.
    pub fn toggle(&mut self, group_index: usize) -> bool {
        if self.0.remove(&group_index) {
            false
        } else {
            self.0.insert(group_index);
            true
        }
    }

    pub fn is_expanded(&self, group_index: usize) -> bool {
        self.0.contains(&group_index)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<usize> for ExpandedGroups {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
