//! In-memory cache implementation with LRU eviction.
//!
//! Thread-safe cache with per-key TTL using tokio synchronization
//! primitives. Expiry is lazy: entries are checked on access, not
//! swept by a background task.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use weathervane_core::cache::{pattern_matches, Cache, CacheError, Result};

/// A single cache entry with its expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// In-memory cache with LRU eviction.
///
/// `set` applies the configured default TTL; `set_with_ttl` overrides it
/// per key. LRU eviction bounds memory when `max_entries` is reached.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    default_ttl: Duration,
}

impl MemoryCache {
    /// Creates a new in-memory cache.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            default_ttl,
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;
        if store.get(key).is_some_and(CacheEntry::is_expired) {
            store.pop(key);
            return Ok(None);
        }
        Ok(store.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.set_with_ttl(key, value, self.default_ttl).await
    }

    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut store = self.store.write().await;
        let entry = CacheEntry::new(value.to_vec(), Some(ttl));
        store.put(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> Result<()> {
        let mut store = self.store.write().await;
        for key in keys {
            store.pop(*key);
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let store = self.store.read().await;
        Ok(store.peek(key).is_some_and(|entry| !entry.is_expired()))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<()> {
        let mut store = self.store.write().await;
        // Resetting TTL on an absent key is a no-op, matching Redis EXPIRE.
        if let Some(entry) = store.peek_mut(key) {
            entry.expires_at = Some(Instant::now() + ttl);
        }
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let mut store = self.store.write().await;

        let current = match store.get(key) {
            Some(entry) if !entry.is_expired() => std::str::from_utf8(&entry.value)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| {
                    CacheError::OperationFailed(format!("value at {key} is not an integer"))
                })?,
            _ => 0,
        };

        let next = current + 1;
        let entry = CacheEntry::new(next.to_string().into_bytes(), Some(self.default_ttl));
        store.put(key.to_string(), entry);
        Ok(next)
    }

    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|(key, entry)| !entry.is_expired() && pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn flush(&self) -> Result<()> {
        self.store.write().await.clear();
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        // In-process store; live as long as we are.
        Ok(())
    }
}
