//! Greeting record type
//!
//! The one persisted entity in the system: an auto-assigned integer id
//! plus a message string. Rows are created by an explicit insert (CLI
//! seeding or test setup) and read back by the prefix query; there is no
//! update or delete path.

use serde::{Deserialize, Serialize};

/// A stored greeting.
///
/// `id` is assigned by the database on insert and never changes;
/// `message` is the searchable payload. Serializes to the wire shape
/// `{"id": <integer>, "message": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Database-assigned row id
    pub id: i64,
    /// The greeting text
    pub message: String,
}

impl Greeting {
    /// Create a greeting from an already-assigned id and message
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.message)
    }
}
