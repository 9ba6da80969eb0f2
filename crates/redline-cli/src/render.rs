//! Plain-text presentation of a comparison.
//!
//! Markers: `+` added, `-` removed, `~` modified, blank for unchanged.
//! Word segments of modified lines are shown as `[-removed-]{+added+}`.
//! Lines matching the search term carry a leading `*`.

use std::collections::HashSet;

use redline_core::diff::{find_matches, record_matches, ExpandedGroups};
use redline_core::{
    align_for_side_by_side, group_runs, AlignedRow, LineKind, LineRecord, RunGroup, SegmentTag,
    WordSegment,
};

/// Columns used by everything in a side-by-side line except the two texts.
const SIDE_BY_SIDE_GUTTER: usize = 18;
const MIN_COLUMN: usize = 8;

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub collapse: bool,
    pub expanded: ExpandedGroups,
    pub search: Option<String>,
    pub width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            collapse: false,
            expanded: ExpandedGroups::new(),
            search: None,
            width: 120,
        }
    }
}

fn marker(kind: LineKind) -> char {
    match kind {
        LineKind::Unchanged => ' ',
        LineKind::Added => '+',
        LineKind::Removed => '-',
        LineKind::Modified => '~',
    }
}

fn flag(matched: bool) -> char {
    if matched {
        '*'
    } else {
        ' '
    }
}

fn markup<'a>(segments: impl IntoIterator<Item = &'a WordSegment>) -> String {
    segments
        .into_iter()
        .fold(String::new(), |mut out, segment| {
            match segment.tag {
                SegmentTag::Unchanged => out.push_str(&segment.text),
                SegmentTag::Removed => out.push_str(&format!("[-{}-]", segment.text)),
                SegmentTag::Added => out.push_str(&format!("{{+{}+}}", segment.text)),
            }
            out
        })
}

fn collapsed_line(group_index: usize, len: usize, first_line: usize, last_line: usize) -> String {
    format!(
        "       … {} unchanged lines (lines {}-{}) [group {}]\n",
        len, first_line, last_line, group_index
    )
}

/// Render records as one column.
pub fn render_inline(records: &[LineRecord], options: &DisplayOptions) -> String {
    let matches: HashSet<usize> = options
        .search
        .as_deref()
        .map(|term| find_matches(records, term).into_iter().collect())
        .unwrap_or_default();

    let mut output = String::new();
    for (group_index, group) in group_runs(records, options.collapse).iter().enumerate() {
        if let RunGroup::Collapsed {
            entries,
            first_line,
            last_line,
            ..
        } = group
        {
            if !options.expanded.is_expanded(group_index) {
                output.push_str(&collapsed_line(
                    group_index,
                    entries.len(),
                    *first_line,
                    *last_line,
                ));
                continue;
            }
        }

        for (index, record) in group.entries() {
            let text = match record.kind {
                LineKind::Modified => markup(record.segments()),
                _ => record.text().to_string(),
            };
            output.push_str(&format!(
                "{}{} {:>4} | {}\n",
                flag(matches.contains(&index)),
                marker(record.kind),
                record.line_number,
                text
            ));
        }
    }

    output
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Old,
    New,
}

/// Marker and text of one side of a row; `None` for an empty slot.
fn cell(record: Option<&LineRecord>, side: Side) -> Option<(char, String)> {
    let record = record?;
    let text = match (record.kind, side) {
        (LineKind::Modified, Side::Old) => {
            markup(record.segments().iter().filter(|s| s.tag != SegmentTag::Added))
        }
        (LineKind::Modified, Side::New) => {
            markup(record.segments().iter().filter(|s| s.tag != SegmentTag::Removed))
        }
        (_, Side::Old) => record.old_text.clone().unwrap_or_default(),
        (_, Side::New) => record.new_text.clone().unwrap_or_default(),
    };
    let marker = match (record.kind, side) {
        (LineKind::Unchanged, _) => ' ',
        (LineKind::Modified, _) => '~',
        (_, Side::Old) => '-',
        (_, Side::New) => '+',
    };
    Some((marker, text))
}

/// Pad or truncate `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{:<width$}", text, width = width)
    }
}

/// Line numbers of both sides of every row, counted per document.
fn number_rows(rows: &[AlignedRow<'_>]) -> Vec<(Option<usize>, Option<usize>)> {
    let (mut old, mut new) = (0, 0);
    rows.iter()
        .map(|row| {
            let old_number = row.old_side.map(|_| {
                old += 1;
                old
            });
            let new_number = row.new_side.map(|_| {
                new += 1;
                new
            });
            (old_number, new_number)
        })
        .collect()
}

/// Render records as two columns, old document on the left.
pub fn render_side_by_side(records: &[LineRecord], options: &DisplayOptions) -> String {
    let column = (options.width.saturating_sub(SIDE_BY_SIDE_GUTTER) / 2).max(MIN_COLUMN);
    let rows = align_for_side_by_side(records);
    let numbers = number_rows(&rows);
    let term = options.search.as_deref().unwrap_or_default();

    let mut output = String::new();
    for (group_index, group) in group_runs(rows.iter().copied(), options.collapse)
        .iter()
        .enumerate()
    {
        if let RunGroup::Collapsed {
            entries,
            first_line,
            last_line,
            ..
        } = group
        {
            if !options.expanded.is_expanded(group_index) {
                output.push_str(&collapsed_line(
                    group_index,
                    entries.len(),
                    *first_line,
                    *last_line,
                ));
                continue;
            }
        }

        for (index, row) in group.entries() {
            let matched = row.sides().any(|record| record_matches(record, term));
            let (old_number, new_number) = numbers[index];
            let number = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
            let (old_marker, old_text) =
                cell(row.old_side, Side::Old).unwrap_or((' ', String::new()));
            let (new_marker, new_text) =
                cell(row.new_side, Side::New).unwrap_or((' ', String::new()));

            let line = format!(
                "{}{:>4} {} {} | {:>4} {} {}",
                flag(matched),
                number(old_number),
                old_marker,
                fit(&old_text, column),
                number(new_number),
                new_marker,
                fit(&new_text, column),
            );
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}
