//! Document Store Module
//!
//! The persistence seam for text documents. The service consumes the
//! [`DocumentStore`] trait only; `MemoryStore` is the bundled backend.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Document;

// == Document Store Trait ==
/// Authoritative persistence for documents.
///
/// Unknown ids are reported as `Ok(None)` / `Ok(false)`, never as
/// errors; the error type covers transport and persistence failure
/// only. Implementations must be safe for concurrent use.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Persists a new document.
    async fn create(&self, document: Document) -> Result<Document, StoreError>;

    /// Looks up a document by id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Document>, StoreError>;

    /// Replaces the content of an existing document and bumps its
    /// `updated_at`. Returns the updated document, or None if the id is
    /// unknown at mutate time.
    async fn update_content(&self, id: &str, content: &str)
        -> Result<Option<Document>, StoreError>;

    /// Deletes a document. Returns whether a document was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Lists every document belonging to the given owner.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, StoreError>;
}
