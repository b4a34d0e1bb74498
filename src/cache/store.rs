//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::error::ConfigError;

// == Cache Store ==
/// Bounded cache with LRU eviction and per-entry TTL.
///
/// Not synchronized. Shared use must go through one exclusive lock, and
/// `get` counts as a mutation because it may drop an expired entry.
#[derive(Debug)]
pub struct CacheStore<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: u64,
}

impl<T: Clone> CacheStore<T> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// Both values must be greater than zero.
    pub fn new(max_entries: usize, default_ttl: u64) -> Result<Self, ConfigError> {
        if max_entries == 0 {
            return Err(ConfigError::Invalid {
                name: "CACHE_MAX_ENTRIES",
                reason: "must be greater than zero".to_string(),
            });
        }
        if default_ttl == 0 {
            return Err(ConfigError::Invalid {
                name: "CACHE_TTL_SECONDS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(max_entries),
            max_entries,
            default_ttl,
        })
    }

    // == Set ==
    /// Stores a payload under `key`.
    ///
    /// An existing key is refreshed in place: new payload, new timestamp, new
    /// TTL. A new key evicts the least recently used entry first when the
    /// cache is full. A `ttl` of `None` or `Some(0)` falls back to the default.
    pub fn set(&mut self, key: impl Into<String>, data: T, ttl: Option<u64>) {
        let key = key.into();
        let ttl = ttl.filter(|secs| *secs > 0).unwrap_or(self.default_ttl);

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_one();
        }

        self.lru.touch(&key);
        self.entries
            .insert(key.clone(), CacheEntry::new(key, data, ttl));
        self.stats.set_size(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the payload stored under `key`.
    ///
    /// Expired entries are removed on the spot and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_miss();
            return None;
        }

        self.lru.touch(key);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    // == Evict One ==
    /// Drops the entry with the oldest recency stamp.
    fn evict_one(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.set_size(self.entries.len());
            self.stats.record_eviction();
        }
    }

    fn remove_entry(&mut self, key: &str) {
        self.entries.remove(key);
        self.lru.remove(key);
        self.stats.set_size(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry and restarts the recency counter.
    ///
    /// Hit, miss and eviction counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.reset();
        self.stats.set_size(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Counters are not touched.
    pub fn cleanup(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        expired_keys.len()
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Checks for a key without touching recency, stats or expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    #[cfg(test)]
    pub(crate) fn recency(&self, key: &str) -> Option<u64> {
        self.lru.stamp(key)
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, key: &str, by: std::time::Duration) {
        if let Some(entry) = self.entries.get_mut(key) {
            if let Some(earlier) = entry.created_at.checked_sub(by) {
                entry.created_at = earlier;
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn store(max_entries: usize) -> CacheStore<String> {
        CacheStore::new(max_entries, 300).unwrap()
    }

    #[test]
    fn test_store_new() {
        let store = store(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.max_entries(), 100);
        assert_eq!(store.default_ttl(), 300);
        assert_eq!(store.stats().max_size, 100);
    }

    #[test]
    fn test_store_rejects_zero_capacity() {
        let result = CacheStore::<String>::new(0, 300);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "CACHE_MAX_ENTRIES", .. })
        ));
    }

    #[test]
    fn test_store_rejects_zero_ttl() {
        let result = CacheStore::<String>::new(10, 0);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "CACHE_TTL_SECONDS", .. })
        ));
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), None);

        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = store(100);

        assert_eq!(store.get("nonexistent"), None);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_overwrite_keeps_size() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), None);
        store.set("key1", "value2".to_string(), None);

        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().size, 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), Some(10));
        store.backdate("key1", Duration::from_secs(9));
        store.set("key1", "value2".to_string(), Some(10));
        store.backdate("key1", Duration::from_secs(9));

        assert_eq!(store.get("key1"), Some("value2".to_string()));
    }

    #[test]
    fn test_store_overwrite_replaces_ttl() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), Some(100));
        store.set("key1", "value2".to_string(), Some(5));
        store.backdate("key1", Duration::from_secs(6));

        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_zero_ttl_override_uses_default() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), Some(0));
        store.backdate("key1", Duration::from_secs(200));

        assert_eq!(store.get("key1"), Some("value1".to_string()));
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), Some(1));
        assert!(store.get("key1").is_some());

        sleep(Duration::from_millis(1100));

        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_expired_get_decrements_size_once() {
        let mut store = store(100);

        store.set("stale", "value".to_string(), Some(1));
        store.set("fresh", "value".to_string(), None);
        store.backdate("stale", Duration::from_secs(2));

        assert_eq!(store.get("stale"), None);
        assert_eq!(store.get("stale"), None);
        assert_eq!(store.get("stale"), None);

        let stats = store.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.hits, 0);
        assert_eq!(store.recency("stale"), None);
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = store(3);

        store.set("key1", "value1".to_string(), None);
        store.set("key2", "value2".to_string(), None);
        store.set("key3", "value3".to_string(), None);

        // Cache is full, adding key4 should evict key1 (oldest)
        store.set("key4", "value4".to_string(), None);

        assert_eq!(store.len(), 3);
        assert_eq!(store.stats().evictions, 1);
        assert!(!store.contains_key("key1"));
        assert!(store.get("key2").is_some());
        assert!(store.get("key3").is_some());
        assert!(store.get("key4").is_some());
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut store = store(3);

        store.set("key1", "value1".to_string(), None);
        store.set("key2", "value2".to_string(), None);
        store.set("key3", "value3".to_string(), None);

        store.get("key1");

        // Adding key4 should evict key2 (now oldest)
        store.set("key4", "value4".to_string(), None);

        assert!(store.contains_key("key1"));
        assert!(!store.contains_key("key2"));
    }

    #[test]
    fn test_store_overwrite_does_not_evict() {
        let mut store = store(2);

        store.set("key1", "value1".to_string(), None);
        store.set("key2", "value2".to_string(), None);
        store.set("key1", "value1b".to_string(), None);

        assert_eq!(store.len(), 2);
        assert_eq!(store.stats().evictions, 0);

        // key1 was refreshed, so key2 is now the eviction candidate
        store.set("key3", "value3".to_string(), None);
        assert!(store.contains_key("key1"));
        assert!(!store.contains_key("key2"));
    }

    #[test]
    fn test_store_miss_does_not_bump_recency() {
        let mut store = store(2);

        store.set("key1", "value1".to_string(), None);
        let before = store.recency("key1");
        store.get("other");

        assert_eq!(store.recency("key1"), before);
    }

    #[test]
    fn test_store_stats() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), None);
        store.get("key1");
        store.get("nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn test_store_stats_is_a_snapshot() {
        let mut store = store(100);

        let snapshot = store.stats();
        store.set("key1", "value1".to_string(), None);
        store.get("key1");

        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.size, 0);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), Some(1));
        store.set("key2", "value2".to_string(), Some(10));
        store.backdate("key1", Duration::from_secs(2));
        let key2_recency = store.recency("key2");
        let stats_before = store.stats();

        let removed = store.cleanup();

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(!store.contains_key("key1"));
        assert_eq!(store.recency("key2"), key2_recency);

        let stats_after = store.stats();
        assert_eq!(stats_after.hits, stats_before.hits);
        assert_eq!(stats_after.misses, stats_before.misses);
        assert_eq!(stats_after.evictions, stats_before.evictions);
        assert_eq!(stats_after.size, 1);
    }

    #[test]
    fn test_store_cleanup_nothing_expired() {
        let mut store = store(100);

        store.set("key1", "value1".to_string(), None);

        assert_eq!(store.cleanup(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_clear_keeps_counters() {
        let mut store = store(2);

        store.set("key1", "value1".to_string(), None);
        store.set("key2", "value2".to_string(), None);
        store.set("key3", "value3".to_string(), None);
        store.get("key3");
        store.get("key1");

        store.clear();

        let stats = store.stats();
        assert!(store.is_empty());
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
    }

    #[test]
    fn test_store_clear_restarts_recency() {
        let mut store = store(10);

        store.set("key1", "value1".to_string(), None);
        store.set("key2", "value2".to_string(), None);
        store.clear();
        store.set("key3", "value3".to_string(), None);

        assert_eq!(store.recency("key3"), Some(1));
    }

    #[test]
    fn test_store_generic_payload() {
        let mut store: CacheStore<Vec<u32>> = CacheStore::new(4, 60).unwrap();

        store.set("numbers", vec![1, 2, 3], None);

        assert_eq!(store.get("numbers"), Some(vec![1, 2, 3]));
    }
}
