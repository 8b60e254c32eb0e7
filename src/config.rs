//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached per-document metric values
    pub metric_ttl: u64,
    /// Background cache cleanup interval in seconds
    pub cleanup_interval: u64,
    /// Deadline in milliseconds for document store calls
    pub store_timeout_ms: u64,
    /// Deadline in milliseconds for cache calls
    pub cache_timeout_ms: u64,
    /// Maximum number of entries the in-memory cache backend can hold
    pub max_cache_entries: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `METRIC_TTL` - Metric cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cache cleanup frequency in seconds (default: 60)
    /// - `STORE_TIMEOUT_MS` - Store call deadline in milliseconds (default: 2000)
    /// - `CACHE_TIMEOUT_MS` - Cache call deadline in milliseconds (default: 250)
    /// - `MAX_CACHE_ENTRIES` - Cache capacity (default: 10000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            metric_ttl: env::var("METRIC_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            store_timeout_ms: env::var("STORE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            cache_timeout_ms: env::var("CACHE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(250),
            max_cache_entries: env::var("MAX_CACHE_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Deadline applied to every document store call.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Deadline applied to every cache call.
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            metric_ttl: 3600,
            cleanup_interval: 60,
            store_timeout_ms: 2000,
            cache_timeout_ms: 250,
            max_cache_entries: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.metric_ttl, 3600);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.store_timeout_ms, 2000);
        assert_eq!(config.cache_timeout_ms, 250);
        assert_eq!(config.max_cache_entries, 10_000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("METRIC_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("STORE_TIMEOUT_MS");
        env::remove_var("CACHE_TIMEOUT_MS");
        env::remove_var("MAX_CACHE_ENTRIES");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.metric_ttl, 3600);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.max_cache_entries, 10_000);
    }

    #[test]
    fn test_timeout_durations() {
        let config = Config::default();
        assert_eq!(config.store_timeout(), Duration::from_millis(2000));
        assert_eq!(config.cache_timeout(), Duration::from_millis(250));
    }
}
