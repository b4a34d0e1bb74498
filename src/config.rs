//! Configuration Module
//!
//! Handles loading and validating gateway configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECONDS};
use crate::error::ConfigError;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Default upstream host for app store metadata
pub const DEFAULT_API_HOST: &str = "app-stores.p.rapidapi.com";

/// Gateway configuration parameters.
///
/// Everything except the API key has a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upstream API key sent as `x-rapidapi-key`
    pub api_key: String,
    /// Upstream host, also sent as `x-rapidapi-host`
    pub api_host: String,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Default TTL in seconds for cached lookups
    pub default_ttl: u64,
    /// Page size used when a request does not set one
    pub page_size: usize,
    /// When false, every lookup goes to the upstream API
    pub cache_enabled: bool,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a Config with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            default_ttl: DEFAULT_TTL_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
            cache_enabled: true,
            cleanup_interval: 60,
            server_port: 3000,
        }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `APP_STORE_API_KEY` - Upstream API key (required)
    /// - `APP_STORE_API_HOST` - Upstream host (default: app-stores.p.rapidapi.com)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL_SECONDS` - Default TTL in seconds (default: 300)
    /// - `RESULTS_PER_PAGE` - Default page size (default: 10)
    /// - `CACHE_ENABLED` - Set to `false` to bypass the cache (default: true)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("APP_STORE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("APP_STORE_API_KEY"))?;

        let defaults = Self::new(api_key);
        let config = Self {
            api_host: env::var("APP_STORE_API_HOST").unwrap_or(defaults.api_host),
            max_entries: parse_var("CACHE_MAX_ENTRIES", defaults.max_entries)?,
            default_ttl: parse_var("CACHE_TTL_SECONDS", defaults.default_ttl)?,
            page_size: parse_var("RESULTS_PER_PAGE", defaults.page_size)?,
            cache_enabled: env::var("CACHE_ENABLED")
                .map(|v| v != "false")
                .unwrap_or(defaults.cache_enabled),
            cleanup_interval: parse_var("CACHE_CLEANUP_INTERVAL", defaults.cleanup_interval)?,
            server_port: parse_var("SERVER_PORT", defaults.server_port)?,
            api_key: defaults.api_key,
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects numeric settings that cannot be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("CACHE_MAX_ENTRIES", self.max_entries as u64),
            ("CACHE_TTL_SECONDS", self.default_ttl),
            ("RESULTS_PER_PAGE", self.page_size as u64),
            ("CACHE_CLEANUP_INTERVAL", self.cleanup_interval),
        ];

        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    name,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("expected a positive integer, got '{}'", raw),
        }),
        Err(_) => Ok(default),
    }
}
