//! Case-insensitive search over classified records.

use crate::diff::model::LineRecord;

/// Whether a record's old or new text contains `term`, ignoring case.
/// A blank term matches nothing.
pub fn record_matches(record: &LineRecord, term: &str) -> bool {
    if term.trim().is_empty() {
        return false;
    }
    let haystack = format!(
        "{}{}",
        record.old_text.as_deref().unwrap_or_default(),
        record.new_text.as_deref().unwrap_or_default()
    );
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Indices of records matching `term`, in record order.
pub fn find_matches(records: &[LineRecord], term: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, term))
        .map(|(index, _)| index)
        .collect()
}

/// Position within a list of search matches, wrapping at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCursor {
    matches: Vec<usize>,
    current: usize,
}

impl SearchCursor {
    pub fn new(matches: Vec<usize>) -> Self {
        Self {
            matches,
            current: 0,
        }
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Record index of the current match.
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.current).copied()
    }

    pub fn is_current(&self, record_index: usize) -> bool {
        self.current() == Some(record_index)
    }

    pub fn is_match(&self, record_index: usize) -> bool {
        self.matches.binary_search(&record_index).is_ok()
    }

    /// Advance to the next match, wrapping to the first.
    pub fn next(&mut self) -> Option<usize> {
        if !self.matches.is_empty() {
            self.current = (self.current + 1) % self.matches.len();
        }
        self.current()
    }

    /// Step back to the previous match, wrapping to the last.
    pub fn previous(&mut self) -> Option<usize> {
        if !self.matches.is_empty() {
            let len = self.matches.len();
            self.current = (self.current + len - 1) % len;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<LineRecord> {
        vec![
            LineRecord::unchanged(1, "Hello world"),
            LineRecord::removed(2, "goodbye"),
            LineRecord::added(2, "HELLO again"),
            LineRecord::modified(3, "old value", "new value", Vec::new()),
        ]
    }

    #[test]
    fn test_matches_ignore_case_and_side() {
        assert_eq!(find_matches(&records(), "hello"), vec![0, 2]);
        assert_eq!(find_matches(&records(), "NEW"), vec![3]);
    }

    #[test]
    fn test_blank_term_matches_nothing() {
        assert!(find_matches(&records(), "").is_empty());
        assert!(find_matches(&records(), "   ").is_empty());
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut cursor = SearchCursor::new(vec![0, 2, 3]);
        assert_eq!(cursor.current(), Some(0));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.previous(), Some(3));
        assert!(cursor.is_current(3));
        assert!(cursor.is_match(2));
        assert!(!cursor.is_match(1));
    }

    #[test]
    fn test_empty_cursor_stays_empty() {
        let mut cursor = SearchCursor::default();
        assert!(cursor.is_empty());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), None);
    }
}
