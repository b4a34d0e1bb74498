//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with the metadata needed for TTL checks.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored payload
    pub data: T,
    /// When the entry was created or last refreshed by `set`
    pub created_at: Instant,
    /// Lifetime in seconds, measured from `created_at`
    pub ttl_seconds: u64,
    /// The key this entry is stored under
    pub key: String,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(key: impl Into<String>, data: T, ttl_seconds: u64) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl_seconds,
            key: key.into(),
        }
    }

    // == Age ==
    /// Returns the time elapsed since the entry was created or refreshed.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has outlived its TTL.
    ///
    /// Boundary condition: an entry whose age equals its TTL exactly is still
    /// live. It only expires once the age is strictly greater.
    pub fn is_expired(&self) -> bool {
        self.age().as_secs_f64() > self.ttl_seconds as f64
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds).saturating_sub(self.age())
    }
}
