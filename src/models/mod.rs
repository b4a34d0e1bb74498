//! Request and Response models for the gateway API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing tool arguments and HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AppParams, Query, Store, TermParams, ToolCall, DEFAULT_LANGUAGE};
pub use responses::{
    AutocompleteResponse, ClearResponse, DetailsResponse, ErrorResponse, HealthResponse,
    ReviewsResponse, SearchResponse, StatsResponse, ToolDescriptor, ToolListResponse,
};
