//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction, plus the
//! key derivation used to address cached lookups.

mod entry;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{build_key, KEY_DELIMITER, KEY_PARAMS};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default TTL in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 300;
