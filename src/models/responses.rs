//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CacheStats;
use crate::pagination::{Page, Pagination};

/// Response body for `app_store_autocomplete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub suggestions: Vec<Value>,
    pub pagination: Pagination,
    pub cached: bool,
}

impl AutocompleteResponse {
    pub fn new(page: Page<Value>, cached: bool) -> Self {
        Self {
            suggestions: page.data,
            pagination: page.pagination,
            cached,
        }
    }
}

/// Response body for `app_store_search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Value>,
    pub pagination: Pagination,
    pub cached: bool,
}

impl SearchResponse {
    pub fn new(page: Page<Value>, cached: bool) -> Self {
        Self {
            results: page.data,
            pagination: page.pagination,
            cached,
        }
    }
}

/// Response body for `app_store_reviews`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Value>,
    pub pagination: Pagination,
    pub cached: bool,
}

impl ReviewsResponse {
    pub fn new(page: Page<Value>, cached: bool) -> Self {
        Self {
            reviews: page.data,
            pagination: page.pagination,
            cached,
        }
    }
}

/// Response body for `app_store_details`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsResponse {
    /// Upstream payload, passed through untouched
    pub app: Value,
    pub cached: bool,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub cache_enabled: bool,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, cache_enabled: bool) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
            cache_enabled,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cached entries", removed),
            removed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Describes one callable tool (GET /tools)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Response body for GET /tools
#[derive(Debug, Clone, Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDescriptor>,
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error category
    pub error: String,
    /// What went wrong
    pub message: String,
    /// Upstream HTTP status, when the upstream produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
