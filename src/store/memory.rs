//! In-Memory Document Store
//!
//! HashMap-backed [`DocumentStore`] used as the default backend and as
//! the substitute implementation in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::StoreError;
use crate::models::Document;

// == Memory Store ==
/// Thread-safe in-memory document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, document: Document) -> Result<Document, StoreError> {
        let mut documents = self.documents.write().await;
        documents.insert(document.id.clone(), document.clone());
        Ok(document)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.get(id).cloned())
    }

    async fn update_content(
        &self,
        id: &str,
        content: &str,
    ) -> Result<Option<Document>, StoreError> {
        let mut documents = self.documents.write().await;
        Ok(documents.get_mut(id).map(|document| {
            document.content = content.to_string();
            document.updated_at = Utc::now();
            document.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        Ok(documents.remove(id).is_some())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .values()
            .filter(|document| document.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
