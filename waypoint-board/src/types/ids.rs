//! ID wrapper types for type-safe identifiers.
//!
//! Card ids are opaque strings. Freshly created cards get a ULID; ids
//! assigned by an external caller (e.g. a seed set) are accepted verbatim.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier for a card. Unique within a board session; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Generate a fresh unique id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Wrap an externally assigned id
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}
