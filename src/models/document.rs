//! Document Model
//!
//! The stored text record owned by the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Document ==
/// A stored text document belonging to a single owner.
///
/// `owner_id` is immutable after creation; `updated_at` is bumped on
/// every content mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Opaque stable identity
    pub id: String,
    /// The document text
    pub content: String,
    /// Owning user; the authorization boundary for every operation
    pub owner_id: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last content mutation
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Creates a new document with a fresh id and current timestamps.
    pub fn new(content: impl Into<String>, owner_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            owner_id: owner_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
