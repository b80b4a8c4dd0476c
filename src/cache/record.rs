//! Player Record Module
//!
//! The resolved identity stored in the lookup cache.

use serde::Serialize;

// == Player Record ==
/// A resolved (UUID, username) pair.
///
/// `uuid` is always 32 lowercase hex characters without separators. Records
/// are never mutated once built; a newer lookup builds a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    /// De-hyphenated UUID
    pub uuid: String,
    /// Most recently observed canonical casing of the name
    pub username: String,
}

impl PlayerRecord {
    /// Creates a record, normalizing the UUID.
    pub fn new(uuid: &str, username: impl Into<String>) -> Self {
        Self {
            uuid: super::uuid_key(uuid),
            username: username.into(),
        }
    }

    /// Cache key for the username half of this record.
    pub fn username_key(&self) -> String {
        super::username_key(&self.username)
    }
}
