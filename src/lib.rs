//! App Store Cache - lookup gateway for app store metadata
//!
//! Fronts the upstream metadata API with a TTL/LRU result cache and
//! uniform pagination of list results.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use service::LookupService;
pub use tasks::spawn_cleanup_task;
