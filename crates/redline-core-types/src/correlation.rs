//! Correlation types for comparison requests
//!
//! Every comparison carries a [`RequestId`] so that a presentation layer
//! receiving results out of order can keep only the newest one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single comparison request
///
/// Backed by a UUIDv7, so identifiers created later compare greater.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// True if `self` was issued after `other`
    pub fn supersedes(&self, other: &RequestId) -> bool {
        self > other
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
