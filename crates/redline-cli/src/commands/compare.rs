//! Compare command
//!
//! Usage: redline compare <OLD> <NEW> [--view inline|side-by-side|json]
//! [--collapse] [--expand <GROUP>...] [--search <TERM>] [--output <FILE>]

use clap::{Args, ValueEnum};
use redline_core::diff::ExpandedGroups;
use redline_core::errors::RedlineError;
use std::path::PathBuf;

use super::{emit, DiffArgs};
use crate::render::{render_inline, render_side_by_side, DisplayOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// One column, records in order
    #[default]
    Inline,
    /// Old and new documents next to each other
    SideBySide,
    /// The full comparison as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub diff: DiffArgs,

    /// Presentation
    #[arg(long, value_enum, default_value_t = View::Inline)]
    pub view: View,

    /// Fold runs of more than three unchanged lines
    #[arg(long)]
    pub collapse: bool,

    /// Show a collapsed group in full (repeatable)
    #[arg(long = "expand", value_name = "GROUP")]
    pub expand: Vec<usize>,

    /// Flag lines containing this text, ignoring case
    #[arg(short, long)]
    pub search: Option<String>,

    /// Total line width of the side-by-side view
    #[arg(long, default_value_t = 120)]
    pub width: usize,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.diff.options()?;
    let comparison = args.diff.compare(&options)?;

    let display = DisplayOptions {
        collapse: args.collapse || options.collapse_unchanged,
        expanded: args.expand.iter().copied().collect::<ExpandedGroups>(),
        search: args.search.clone(),
        width: args.width,
    };

    let output = match args.view {
        View::Inline => render_inline(&comparison.records, &display),
        View::SideBySide => render_side_by_side(&comparison.records, &display),
        View::Json => {
            let mut json =
                serde_json::to_string_pretty(&comparison).map_err(RedlineError::from)?;
            json.push('\n');
            json
        }
    };

    emit(&output, args.output.as_deref())
}
