//! Shared Cache Handle
//!
//! Thread-safe, cloneable access to a single `CacheStore`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, PlayerRecord};

// == Player Cache ==
/// Cloneable handle to the lookup cache.
///
/// Every clone points at the same store. Callers never lock; each method
/// takes the lock for the duration of a single operation.
#[derive(Debug, Clone)]
pub struct PlayerCache {
    store: Arc<RwLock<CacheStore>>,
}

impl PlayerCache {
    /// Creates an empty cache whose insertions live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(ttl))),
        }
    }

    /// Returns the live record under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Arc<PlayerRecord>> {
        // Write lock: expired entries are dropped and stats updated
        let record = self.store.write().await.get(key);
        debug!(key, hit = record.is_some(), "cache lookup");
        record
    }

    /// Stores `record` under `key` with the configured TTL.
    pub async fn put(&self, key: String, record: Arc<PlayerRecord>) {
        self.store.write().await.put(key, record);
    }

    /// Stores `record` under `key` with an explicit TTL.
    pub async fn put_with_ttl(&self, key: String, record: Arc<PlayerRecord>, ttl: Duration) {
        self.store.write().await.put_with_ttl(key, record, ttl);
    }

    /// Stores one record under its UUID key and `name_key`.
    ///
    /// Both slots share the allocation but expire on their own.
    pub async fn remember(&self, name_key: String, record: PlayerRecord) -> Arc<PlayerRecord> {
        let record = Arc::new(record);
        let mut store = self.store.write().await;
        store.put(record.uuid.clone(), Arc::clone(&record));
        store.put(name_key, Arc::clone(&record));
        record
    }

    /// Returns the TTL applied to new insertions.
    pub async fn ttl(&self) -> Duration {
        self.store.read().await.ttl()
    }

    /// Changes the TTL for future insertions only.
    pub async fn set_ttl(&self, ttl: Duration) {
        self.store.write().await.set_ttl(ttl);
    }

    /// Removes every expired entry, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
