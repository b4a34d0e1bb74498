//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::models::{ClearResponse, HealthResponse, StatsResponse, ToolCall, ToolListResponse};
use crate::service::LookupService;
use crate::upstream::Upstream;

use super::tools::{dispatch, tool_descriptors};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: LookupService,
}

impl AppState {
    pub fn new(service: LookupService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config, upstream: Arc<dyn Upstream>) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(LookupService::from_config(config, upstream)?))
    }
}

/// Handler for GET /tools
pub async fn list_tools_handler() -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: tool_descriptors(),
    })
}

/// Handler for POST /tools/call
///
/// Runs the named lookup tool with the given arguments.
pub async fn call_tool_handler(
    State(state): State<AppState>,
    Json(call): Json<ToolCall>,
) -> Result<Json<Value>> {
    let result = dispatch(&state.service, call).await?;
    Ok(Json(result))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.stats().await)
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.service.clear_cache().await;
    tracing::info!("Cache cleared: {} entries removed", removed);
    Json(ClearResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
