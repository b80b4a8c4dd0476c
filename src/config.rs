//! Configuration Module
//!
//! Handles loading and managing resolver configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL of the Mojang API.
pub const DEFAULT_API_URL: &str = "https://api.mojang.com";

/// Resolver and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds applied to every cache insertion
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the remote identity service
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 43200, twelve hours)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds, zero ignored (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MOJANG_API_URL` - Remote service base URL (default: https://api.mojang.com)
    ///
    /// Short TTLs make it easy to run into the Mojang rate limits.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            api_base_url: env::var("MOJANG_API_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Cleanup interval as a Duration.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 12 * 60 * 60,
            cleanup_interval: 60,
            server_port: 3000,
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
