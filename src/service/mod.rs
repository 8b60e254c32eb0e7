//! Analysis Service Module
//!
//! Orchestrates document persistence, authorization, metric computation,
//! and the read-through metric cache. The store is authoritative; the
//! cache is an optimization layer only, so every cache failure degrades
//! to direct computation instead of surfacing to the caller.
//!
//! Invalidation ordering: within one update/delete call the store write
//! happens-before the cache invalidation. Across concurrent requests
//! there is no mutual exclusion: a read that misses the cache, fetches
//! the pre-mutation document, and writes it back can race a concurrent
//! update's invalidation and leave a stale entry until the next
//! invalidation or TTL expiry. That window is accepted behavior and
//! pinned by a test below.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::cache::{key, MetricCache};
use crate::config::Config;
use crate::error::{Result, ServiceError, StoreError};
use crate::models::{Document, Metric, MetricResult};
use crate::store::DocumentStore;

// == Analysis Service ==
/// Document CRUD plus cached metric reads over injected store and cache
/// backends.
pub struct AnalysisService<S, C> {
    store: Arc<S>,
    cache: Arc<C>,
    metric_ttl: u64,
    store_timeout: Duration,
    cache_timeout: Duration,
}

impl<S: DocumentStore, C: MetricCache> AnalysisService<S, C> {
    // == Constructor ==
    /// Creates a service over the given backends, taking TTL and call
    /// deadlines from the configuration.
    pub fn new(store: Arc<S>, cache: Arc<C>, config: &Config) -> Self {
        Self {
            store,
            cache,
            metric_ttl: config.metric_ttl,
            store_timeout: config.store_timeout(),
            cache_timeout: config.cache_timeout(),
        }
    }

    // == Create ==
    /// Persists a new document for the owner.
    ///
    /// Only the owner's aggregate key is invalidated; no per-document
    /// metric entries can exist yet. Cache unavailability never fails
    /// the create.
    pub async fn create_document(&self, content: &str, owner_id: &str) -> Result<Document> {
        let document = self
            .store_call(self.store.create(Document::new(content, owner_id)))
            .await?;
        self.cache_evict(&key::report_key(owner_id)).await;
        debug!(document_id = %document.id, owner_id, "document created");
        Ok(document)
    }

    // == Get Metric ==
    /// Returns a metric for the document, served from cache when
    /// possible.
    ///
    /// On a cache hit the store is not consulted. On a miss the
    /// document is fetched and authorized, the metric computed, and the
    /// result written through with the configured TTL. A failing cache
    /// write does not fail the read.
    pub async fn get_metric(
        &self,
        document_id: &str,
        owner_id: &str,
        metric: Metric,
    ) -> Result<MetricResult> {
        let cache_key = key::metric_key(&metric, owner_id, document_id);

        if let Some(cached) = self.cache_get(&cache_key).await {
            debug!(key = %cache_key, "metric served from cache");
            return Ok(cached);
        }

        let document = self.fetch_authorized(document_id, owner_id).await?;
        let result = metric.compute(&document.content);
        self.cache_put(&cache_key, &result).await;
        Ok(result)
    }

    // == Update ==
    /// Replaces the document content and refreshes `updated_at`.
    ///
    /// The store write commits before any cache key is touched; then
    /// every metric variant for the document plus the owner's aggregate
    /// key is invalidated. Fails if the document vanished between the
    /// authorization fetch and the mutation.
    pub async fn update_document(
        &self,
        document_id: &str,
        owner_id: &str,
        new_content: &str,
    ) -> Result<Document> {
        self.fetch_authorized(document_id, owner_id).await?;

        let updated = self
            .store_call(self.store.update_content(document_id, new_content))
            .await?
            .ok_or(ServiceError::NotFoundOrUnauthorized)?;

        self.invalidate_document(owner_id, document_id).await;
        debug!(document_id, owner_id, "document updated, cache invalidated");
        Ok(updated)
    }

    // == Delete ==
    /// Deletes the document and invalidates the same key set as update.
    ///
    /// Returns whether the store actually removed a document.
    pub async fn delete_document(&self, document_id: &str, owner_id: &str) -> Result<bool> {
        self.fetch_authorized(document_id, owner_id).await?;

        let deleted = self.store_call(self.store.delete(document_id)).await?;

        self.invalidate_document(owner_id, document_id).await;
        debug!(document_id, owner_id, deleted, "document delete finished");
        Ok(deleted)
    }

    // == List ==
    /// Lists the owner's documents straight from the store.
    ///
    /// The aggregate key only participates in invalidation; listing is
    /// not cached.
    pub async fn list_documents(&self, owner_id: &str) -> Result<Vec<Document>> {
        self.store_call(self.store.list_by_owner(owner_id)).await
    }

    // == Internals ==

    /// Fetches a document and checks ownership. Absence and foreign
    /// ownership collapse into the same error so existence is never
    /// leaked.
    async fn fetch_authorized(&self, document_id: &str, owner_id: &str) -> Result<Document> {
        match self.store_call(self.store.get_by_id(document_id)).await? {
            Some(document) if document.owner_id == owner_id => Ok(document),
            _ => Err(ServiceError::NotFoundOrUnauthorized),
        }
    }

    /// Bounds a store call by the configured deadline. A timeout is a
    /// hard storage failure.
    async fn store_call<T>(
        &self,
        fut: impl Future<Output = std::result::Result<T, StoreError>>,
    ) -> Result<T> {
        match timeout(self.store_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(ServiceError::Storage(err)),
            Err(_) => Err(ServiceError::Storage(StoreError::Timeout)),
        }
    }

    /// Cache read treating every failure, timeout, or undecodable entry
    /// as a miss.
    async fn cache_get(&self, cache_key: &str) -> Option<MetricResult> {
        match timeout(self.cache_timeout, self.cache.get(cache_key)).await {
            Ok(Ok(Some(raw))) => match serde_json::from_str(&raw) {
                Ok(result) => Some(result),
                Err(err) => {
                    warn!(key = %cache_key, error = %err, "discarding undecodable cache entry");
                    None
                }
            },
            Ok(Ok(None)) => None,
            Ok(Err(err)) => {
                warn!(key = %cache_key, error = %err, "cache get failed, treating as miss");
                None
            }
            Err(_) => {
                warn!(key = %cache_key, "cache get timed out, treating as miss");
                None
            }
        }
    }

    /// Best-effort write-through with the metric TTL.
    async fn cache_put(&self, cache_key: &str, result: &MetricResult) {
        let raw = match serde_json::to_string(result) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %cache_key, error = %err, "metric result did not serialize");
                return;
            }
        };
        match timeout(
            self.cache_timeout,
            self.cache.set(cache_key, raw, Some(self.metric_ttl)),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(key = %cache_key, error = %err, "cache write failed"),
            Err(_) => warn!(key = %cache_key, "cache write timed out"),
        }
    }

    /// Best-effort eviction of a single key.
    async fn cache_evict(&self, cache_key: &str) {
        match timeout(self.cache_timeout, self.cache.delete(cache_key)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(key = %cache_key, error = %err, "cache invalidation failed"),
            Err(_) => warn!(key = %cache_key, "cache invalidation timed out"),
        }
    }

    /// Invalidates every metric variant of the document plus the
    /// owner's aggregate key.
    async fn invalidate_document(&self, owner_id: &str, document_id: &str) {
        for cache_key in key::document_keys(owner_id, document_id) {
            self.cache_evict(&cache_key).await;
        }
        self.cache_evict(&key::report_key(owner_id)).await;
    }
}
