//! Lookup Service
//!
//! Runs the four lookup operations against the upstream API with the result
//! cache in front of it. List results are cached whole and paginated on the
//! way out, so a cache hit and a fresh fetch page identically.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{build_key, CacheStore};
use crate::config::Config;
use crate::error::{AppError, ConfigError, Result};
use crate::models::{
    AppParams, AutocompleteResponse, DetailsResponse, Query, ReviewsResponse, SearchResponse,
    StatsResponse, TermParams,
};
use crate::pagination::{paginate, Page};
use crate::upstream::Upstream;

/// Cache shared between request handlers and the cleanup task
pub type SharedCache = Arc<RwLock<CacheStore<Value>>>;

// == Operation ==
/// The lookups offered by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Autocomplete,
    Search,
    Details,
    Reviews,
}

impl Operation {
    /// Upstream endpoint, also used as the cache key prefix.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Autocomplete => "autocomplete",
            Operation::Search => "search",
            Operation::Details => "details",
            Operation::Reviews => "reviews",
        }
    }

    /// Field of the upstream payload that holds the result list.
    pub fn items_field(&self) -> Option<&'static str> {
        match self {
            Operation::Autocomplete => Some("suggestions"),
            Operation::Search => Some("results"),
            Operation::Details => None,
            Operation::Reviews => Some("reviews"),
        }
    }
}

// == Lookup Service ==
/// Cached front for the upstream metadata API.
#[derive(Clone)]
pub struct LookupService {
    cache: SharedCache,
    upstream: Arc<dyn Upstream>,
    cache_enabled: bool,
    page_size: usize,
}

impl LookupService {
    pub fn new(
        cache: CacheStore<Value>,
        upstream: Arc<dyn Upstream>,
        cache_enabled: bool,
        page_size: usize,
    ) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream,
            cache_enabled,
            page_size: page_size.max(1),
        }
    }

    /// Builds the service and its cache from configuration.
    pub fn from_config(config: &Config, upstream: Arc<dyn Upstream>) -> std::result::Result<Self, ConfigError> {
        let cache = CacheStore::new(config.max_entries, config.default_ttl)?;
        Ok(Self::new(cache, upstream, config.cache_enabled, config.page_size))
    }

    pub fn cache(&self) -> SharedCache {
        self.cache.clone()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    // == Operations ==
    pub async fn autocomplete(&self, params: &TermParams) -> Result<AutocompleteResponse> {
        let query = Query::try_from(params)?;
        let (page, cached) = self.list(Operation::Autocomplete, &query).await?;
        Ok(AutocompleteResponse::new(page, cached))
    }

    pub async fn search(&self, params: &TermParams) -> Result<SearchResponse> {
        let query = Query::try_from(params)?;
        let (page, cached) = self.list(Operation::Search, &query).await?;
        Ok(SearchResponse::new(page, cached))
    }

    pub async fn reviews(&self, params: &AppParams) -> Result<ReviewsResponse> {
        let query = Query::try_from(params)?;
        let (page, cached) = self.list(Operation::Reviews, &query).await?;
        Ok(ReviewsResponse::new(page, cached))
    }

    /// Details are cached as returned and never paginated.
    pub async fn details(&self, params: &AppParams) -> Result<DetailsResponse> {
        let query = Query::try_from(params)?;
        let operation = Operation::Details;
        let key = build_key(operation.endpoint(), &query.key_params());

        if let Some(app) = self.lookup(&key).await {
            return Ok(DetailsResponse { app, cached: true });
        }

        let app = self.fetch(operation, &query).await?;
        self.remember(key, app.clone()).await;

        Ok(DetailsResponse { app, cached: false })
    }

    /// Returns cache statistics.
    pub async fn stats(&self) -> StatsResponse {
        let stats = self.cache.read().await.stats();
        StatsResponse::new(stats, self.cache_enabled)
    }

    /// Empties the cache and returns how many entries were dropped.
    pub async fn clear_cache(&self) -> usize {
        let mut cache = self.cache.write().await;
        let removed = cache.len();
        cache.clear();
        removed
    }

    // == Internals ==
    async fn list(&self, operation: Operation, query: &Query) -> Result<(Page<Value>, bool)> {
        let key = build_key(operation.endpoint(), &query.key_params());

        if let Some(cached) = self.lookup(&key).await {
            let items = match cached {
                Value::Array(items) => items,
                _ => Vec::new(),
            };
            return Ok((paginate(&items, query.page, self.page_size), true));
        }

        let payload = self.fetch(operation, query).await?;
        let items = extract_items(payload, operation.items_field());

        // Empty lists are not worth remembering
        if !items.is_empty() {
            self.remember(key, Value::Array(items.clone())).await;
        }

        Ok((paginate(&items, query.page, self.page_size), false))
    }

    async fn lookup(&self, key: &str) -> Option<Value> {
        if !self.cache_enabled {
            return None;
        }

        let found = self.cache.write().await.get(key);
        match found {
            Some(_) => debug!(key, "Cache hit"),
            None => debug!(key, "Cache miss"),
        }
        found
    }

    async fn remember(&self, key: String, value: Value) {
        if self.cache_enabled {
            self.cache.write().await.set(key, value, None);
        }
    }

    async fn fetch(&self, operation: Operation, query: &Query) -> Result<Value> {
        let endpoint = operation.endpoint();
        self.upstream
            .fetch(endpoint, &query.upstream_params())
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "Upstream lookup failed");
                AppError::from(e)
            })
    }
}

/// Pulls the result list out of an upstream payload.
///
/// Looks for an array under `field` first, then accepts a bare array.
/// Anything else yields an empty list.
pub fn extract_items(payload: Value, field: Option<&str>) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => match field.and_then(|f| map.remove(f)) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}
