pub mod compare;
pub mod stats;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use redline_core::errors::{ExError, RedlineError};
use redline_core::{compute_diff_bytes, Comparison, DiffAlgorithm, DiffOptions, PairingStrategy};

/// Inputs and comparison options shared by every command
#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Original document
    pub old: PathBuf,

    /// Modified document
    pub new: PathBuf,

    /// TOML file with comparison options; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Line diff algorithm (myers, patience, lcs)
    #[arg(long)]
    pub algorithm: Option<DiffAlgorithm>,

    /// How removed and added runs pair into modified lines (positional, similarity)
    #[arg(long)]
    pub pairing: Option<PairingStrategy>,

    /// Minimum similarity for a pair under similarity pairing
    #[arg(long)]
    pub similarity_threshold: Option<f32>,
}

impl DiffArgs {
    /// Options from the config file, if any, with flags applied on top.
    pub fn options(&self) -> Result<DiffOptions, RedlineError> {
        let mut options = match &self.config {
            Some(path) => DiffOptions::load(path)?,
            None => DiffOptions::default(),
        };
        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm;
        }
        if let Some(pairing) = self.pairing {
            options.pairing = pairing;
        }
        if let Some(threshold) = self.similarity_threshold {
            options.similarity_threshold = threshold;
        }
        options.validate()?;
        Ok(options)
    }

    /// Read and compare both documents.
    pub fn compare(&self, options: &DiffOptions) -> Result<Comparison, Box<dyn Error>> {
        read_document(&self.old)
            .and_then(|old| {
                let new = read_document(&self.new)?;
                compute_diff_bytes(&old, &new, options)
            })
            .map_err(|e| Box::<dyn Error>::from(format!("could not compare files: {}", e)))
    }
}

fn read_document(path: &Path) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| {
        ExError::from(RedlineError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
        .with_op("read_document")
    })
}

/// Write to `output` when given, otherwise print to stdout.
pub fn emit(text: &str, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| RedlineError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            println!("✓ Written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
