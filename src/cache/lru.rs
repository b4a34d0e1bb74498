//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with the next value of a monotonically
/// increasing counter. The key holding the smallest stamp is the least
/// recently used one.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Last recency stamp per key
    stamps: HashMap<String, u64>,
    /// Keys ordered by recency stamp (smallest = oldest)
    order: BTreeMap<u64, String>,
    /// Last stamp handed out
    counter: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as the most recently used one.
    ///
    /// Returns the stamp assigned to the key.
    pub fn touch(&mut self, key: &str) -> u64 {
        self.counter += 1;
        let stamp = self.counter;

        match self.stamps.get_mut(key) {
            Some(previous) => {
                self.order.remove(&*previous);
                *previous = stamp;
            }
            None => {
                self.stamps.insert(key.to_string(), stamp);
            }
        }
        self.order.insert(stamp, key.to_string());

        stamp
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(stamp) = self.stamps.remove(key) {
            self.order.remove(&stamp);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.stamps.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.first_key_value().map(|(_, key)| key)
    }

    // == Stamp ==
    /// Returns the current recency stamp of a key.
    pub fn stamp(&self, key: &str) -> Option<u64> {
        self.stamps.get(key).copied()
    }

    // == Reset ==
    /// Forgets every key and restarts the counter from zero.
    pub fn reset(&mut self) {
        self.stamps.clear();
        self.order.clear();
        self.counter = 0;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}
