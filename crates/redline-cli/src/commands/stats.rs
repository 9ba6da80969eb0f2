//! Stats command
//!
//! Usage: redline stats <OLD> <NEW> [--json]

use clap::Args;
use redline_core::errors::RedlineError;
use redline_core::DiffStats;

use super::DiffArgs;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub diff: DiffArgs,

    /// Print counts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.diff.options()?;
    let comparison = args.diff.compare(&options)?;

    let output = if args.json {
        let mut json =
            serde_json::to_string_pretty(&comparison.stats).map_err(RedlineError::from)?;
        json.push('\n');
        json
    } else {
        format_stats(&comparison.stats)
    };
    print!("{}", output);

    Ok(())
}

fn format_stats(stats: &DiffStats) -> String {
    format!(
        "added:     {}\nremoved:   {}\nmodified:  {}\nunchanged: {}\n",
        stats.added, stats.removed, stats.modified, stats.unchanged
    )
}
