//! Metric Cache Module
//!
//! Advisory key/value cache for computed metric values. The service
//! consumes the [`MetricCache`] trait only and never treats the cache as
//! a source of truth; any failure degrades to direct computation.

mod entry;
pub mod key;
mod memory;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::{CacheStats, MemoryCache};

use async_trait::async_trait;

use crate::error::CacheError;

// == Metric Cache Trait ==
/// Key/value store with per-entry expiry.
///
/// Absent keys are `Ok(None)`, not errors. Callers must treat every
/// error as a miss (get) or a no-op (set/delete) and never propagate it.
#[async_trait]
pub trait MetricCache: Send + Sync + 'static {
    /// Retrieves the serialized value stored under `key`, if present
    /// and not expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a serialized value under `key`. `ttl_seconds` of None
    /// means the entry only leaves the cache through explicit deletion
    /// or eviction.
    async fn set(&self, key: &str, value: String, ttl_seconds: Option<u64>)
        -> Result<(), CacheError>;

    /// Removes the entry under `key` if present.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
