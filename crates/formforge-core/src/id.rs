//! Opaque identifiers for field instances.
//!
//! A [`FieldId`] is a short random token assigned when an instance is
//! constructed and never reassigned. Ids are unique within one document;
//! uniqueness across documents is not required.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The unique identifier of one field instance within a document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        let token: u32 = rand::thread_rng().gen();
        Self(format!("{token:08x}"))
    }

    /// Wraps an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_nonempty_hex() {
        let id = FieldId::generate();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_ids_differ() {
        // Collisions on a 32-bit token are possible but vanishingly unlikely
        // across a handful of draws.
        let ids: Vec<FieldId> = (0..16).map(|_| FieldId::generate()).collect();
        let unique: std::collections::HashSet<&str> =
            ids.iter().map(FieldId::as_str).collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_serde_transparent() {
        let id = FieldId::new("f1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"f1\"");
        let back: FieldId = serde_json::from_str("\"f1\"").unwrap();
        assert_eq!(back, id);
    }
}
