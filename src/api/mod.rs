//! API Module
//!
//! HTTP handlers and routing for the lookup gateway.
//!
//! # Endpoints
//! - `GET /tools` - List the lookup tools
//! - `POST /tools/call` - Run a lookup tool
//! - `GET /stats` - Get cache statistics
//! - `DELETE /cache` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod tools;

pub use handlers::*;
pub use routes::create_router;
