//! Comparison options.
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! algorithm = "patience"
//! pairing = "similarity"
//! similarity_threshold = 0.6
//! collapse_unchanged = true
//! timeout_ms = 2000
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{RedlineError, Result};
use crate::primitives::{DiffAlgorithm, SimilarDiffer};

/// How removed and added runs are paired into modified lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingStrategy {
    /// k-th removed line with k-th added line, by index only
    #[default]
    Positional,
    /// Order-preserving best match by character similarity
    Similarity,
}

impl FromStr for PairingStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positional" => Ok(PairingStrategy::Positional),
            "similarity" => Ok(PairingStrategy::Similarity),
            other => Err(format!(
                "unknown pairing strategy '{}' (expected positional or similarity)",
                other
            )),
        }
    }
}

pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.5;

/// Options for one comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Edit-script algorithm for both line and word primitives
    pub algorithm: DiffAlgorithm,
    /// Pairing of removed/added runs into modified lines
    pub pairing: PairingStrategy,
    /// Minimum similarity ratio (0.0..=1.0) for a similarity pairing
    pub similarity_threshold: f32,
    /// Whether presentations should collapse long unchanged runs
    pub collapse_unchanged: bool,
    /// Upper bound for a single primitive diff, in milliseconds
    pub timeout_ms: Option<u64>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            pairing: PairingStrategy::default(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            collapse_unchanged: false,
            timeout_ms: None,
        }
    }
}

impl DiffOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the text is not valid TOML, contains unknown keys,
    /// or holds an out-of-range value.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: DiffOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// `ReadFailed` if the file cannot be read, otherwise as
    /// [`DiffOptions::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RedlineError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loading diff options");
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `similarity_threshold` is outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(RedlineError::InvalidConfig {
                reason: format!(
                    "similarity_threshold must be within 0.0..=1.0, got {}",
                    self.similarity_threshold
                ),
            });
        }
        Ok(())
    }

    /// The primitive differ these options describe.
    pub fn differ(&self) -> SimilarDiffer {
        let differ = SimilarDiffer::new(self.algorithm);
        match self.timeout_ms {
            Some(ms) => differ.with_timeout(Duration::from_millis(ms)),
            None => differ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let options = DiffOptions::from_toml_str("").unwrap();
        assert_eq!(options, DiffOptions::default());
        assert_eq!(options.pairing, PairingStrategy::Positional);
        assert!(!options.collapse_unchanged);
    }

    #[test]
    fn test_full_toml_is_parsed() {
        let options = DiffOptions::from_toml_str(
            r#"
            algorithm = "patience"
            pairing = "similarity"
            similarity_threshold = 0.75
            collapse_unchanged = true
            timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(options.algorithm, DiffAlgorithm::Patience);
        assert_eq!(options.pairing, PairingStrategy::Similarity);
        assert_eq!(options.similarity_threshold, 0.75);
        assert!(options.collapse_unchanged);
        assert_eq!(options.timeout_ms, Some(250));
        assert_eq!(options.differ().algorithm(), DiffAlgorithm::Patience);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = DiffOptions::from_toml_str("context_lines = 3").unwrap_err();
        assert!(matches!(err, RedlineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let err = DiffOptions::from_toml_str("similarity_threshold = 1.5").unwrap_err();
        match err {
            RedlineError::InvalidConfig { reason } => assert!(reason.contains("1.5")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pairing_parses_from_str() {
        assert_eq!(
            "Similarity".parse::<PairingStrategy>(),
            Ok(PairingStrategy::Similarity)
        );
        assert!("best".parse::<PairingStrategy>().is_err());
    }
}
