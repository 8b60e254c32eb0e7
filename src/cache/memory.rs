//! In-Memory Cache Backend
//!
//! Bounded [`MetricCache`] implementation combining HashMap storage with
//! TTL expiration and oldest-first eviction at capacity.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

use super::{CacheEntry, MetricCache};
use crate::error::CacheError;

// == Cache Stats ==
/// Tracks cache performance counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted at capacity
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Inner State ==
#[derive(Debug, Default)]
struct CacheState {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order; the front is evicted first at capacity
    insertion_order: VecDeque<String>,
    /// Performance counters
    stats: CacheStats,
}

impl CacheState {
    fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.insertion_order.retain(|k| k != key);
        }
        removed
    }
}

// == Memory Cache ==
/// Bounded in-memory cache with TTL support.
///
/// Expired entries are dropped lazily on access and periodically by the
/// cleanup task; when the cache is full, the oldest-inserted entry is
/// evicted to make room.
#[derive(Debug)]
pub struct MemoryCache {
    state: RwLock<CacheState>,
    max_entries: usize,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            max_entries,
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.read().await;
        let mut stats = state.stats.clone();
        stats.total_entries = state.entries.len();
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut state = self.state.write().await;
        let expired_keys: Vec<String> = state
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            state.remove(key);
        }
        expired_keys.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MetricCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut state = self.state.write().await;
        if let Some(entry) = state.entries.get(key) {
            if entry.is_expired() {
                state.remove(key);
                state.stats.misses += 1;
                return Ok(None);
            }
            let value = entry.value.clone();
            state.stats.hits += 1;
            return Ok(Some(value));
        }
        state.stats.misses += 1;
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: String,
        ttl_seconds: Option<u64>,
    ) -> Result<(), CacheError> {
        let mut state = self.state.write().await;

        let is_overwrite = state.entries.contains_key(key);
        if !is_overwrite && state.entries.len() >= self.max_entries {
            // Prefer reclaiming expired entries before evicting live ones
            let expired: Vec<String> = state
                .entries
                .iter()
                .filter(|(_, entry)| entry.is_expired())
                .map(|(k, _)| k.clone())
                .collect();
            for k in &expired {
                state.remove(k);
            }

            while state.entries.len() >= self.max_entries {
                match state.insertion_order.pop_front() {
                    Some(oldest) => {
                        state.entries.remove(&oldest);
                        state.stats.evictions += 1;
                    }
                    None => break,
                }
            }
        }

        state
            .entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_seconds));
        if !is_overwrite {
            state.insertion_order.push_back(key.to_string());
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut state = self.state.write().await;
        state.remove(key);
        Ok(())
    }
}
