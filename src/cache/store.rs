//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with per-entry TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, PlayerRecord};

// == Cache Store ==
/// Unbounded record storage; entries leave only when their TTL elapses.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied by `put`
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore whose insertions live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == TTL ==
    /// Returns the TTL used for new insertions.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Changes the TTL for future insertions. Stored entries keep their expiry.
    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl = ttl;
    }

    // == Put ==
    /// Stores a record under `key` with the configured TTL.
    ///
    /// If the key already exists, the record is replaced and its TTL is reset.
    pub fn put(&mut self, key: String, record: Arc<PlayerRecord>) {
        let ttl = self.ttl;
        self.put_with_ttl(key, record, ttl);
    }

    /// Stores a record under `key` with an explicit TTL.
    pub fn put_with_ttl(&mut self, key: String, record: Arc<PlayerRecord>, ttl: Duration) {
        self.put_at(key, record, ttl, current_timestamp_ms());
    }

    /// Stores a record as if inserted at `now_ms`.
    pub fn put_at(&mut self, key: String, record: Arc<PlayerRecord>, ttl: Duration, now_ms: u64) {
        self.entries.insert(key, CacheEntry::new(record, ttl, now_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a record by key.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<Arc<PlayerRecord>> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Retrieves a record by key as seen at `now_ms`.
    pub fn get_at(&mut self, key: &str, now_ms: u64) -> Option<Arc<PlayerRecord>> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now_ms) => {
                let record = Arc::clone(&entry.record);
                self.stats.record_hit();
                return Some(record);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp_ms())
    }

    /// Removes all entries expired at `now_ms`.
    pub fn cleanup_expired_at(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now_ms));

        let count = before - self.entries.len();
        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    fn notch() -> Arc<PlayerRecord> {
        Arc::new(PlayerRecord::new("069a79f444e94726a5befca90e38aaf5", "Notch"))
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(TTL);

        store.put("notch".to_string(), notch());
        let record = store.get("notch").unwrap();

        assert_eq!(record.username, "Notch");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(TTL);
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TTL);

        store.put("notch".to_string(), notch());
        store.put(
            "notch".to_string(),
            Arc::new(PlayerRecord::new("069a79f444e94726a5befca90e38aaf5", "NOTCH")),
        );

        assert_eq!(store.get("notch").unwrap().username, "NOTCH");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_ttl() {
        let mut store = CacheStore::new(TTL);

        store.put_at("notch".to_string(), notch(), Duration::from_millis(100), 1_000);
        store.put_at("notch".to_string(), notch(), Duration::from_millis(100), 1_080);

        assert!(store.get_at("notch", 1_150).is_some());
        assert!(store.get_at("notch", 1_181).is_none());
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(TTL);
        store.put_at("notch".to_string(), notch(), Duration::from_secs(10), 50_000);

        assert!(store.get_at("notch", 59_999).is_some());
        assert!(store.get_at("notch", 60_001).is_none());

        // Lazy expiry removed the entry
        assert!(store.is_empty());
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_shared_record_expires_independently() {
        let mut store = CacheStore::new(TTL);
        let record = notch();

        store.put_at(record.uuid.clone(), Arc::clone(&record), Duration::from_secs(1), 0);
        store.put_at("notch".to_string(), Arc::clone(&record), Duration::from_secs(5), 0);

        assert!(store.get_at(&record.uuid, 2_000).is_none());
        let by_name = store.get_at("notch", 2_000).unwrap();
        assert!(Arc::ptr_eq(&by_name, &record));
    }

    #[test]
    fn test_set_ttl_only_affects_future_insertions() {
        let mut store = CacheStore::new(Duration::from_secs(10));
        store.put_at("old".to_string(), notch(), store.ttl(), 0);

        store.set_ttl(Duration::from_secs(1));
        store.put_at("new".to_string(), notch(), store.ttl(), 0);

        assert!(store.get_at("new", 2_000).is_none());
        assert!(store.get_at("old", 2_000).is_some());
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(TTL);

        store.put("notch".to_string(), notch());
        store.get("notch").unwrap(); // hit
        let _ = store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new(TTL);

        store.put_at("short".to_string(), notch(), Duration::from_secs(1), 0);
        store.put_at("long".to_string(), notch(), Duration::from_secs(10), 0);

        let removed = store.cleanup_expired_at(1_100);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get_at("long", 1_100).is_some());
        assert_eq!(store.stats().expirations, 1);
    }
}
