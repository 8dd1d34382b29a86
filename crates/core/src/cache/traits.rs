use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for key-value cache operations with per-key TTL.
///
/// Values are opaque bytes; the JSON (de)serialization helpers in this
/// module convert domain types. A missing key is `Ok(None)` from
/// [`get`], not an error - errors mean the cache itself misbehaved.
///
/// Connection teardown is handled by `Drop` on the implementation.
///
/// [`get`]: Cache::get
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value using the implementation's configured default TTL.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Sets a value with an explicit TTL.
    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;

    /// Deletes the given keys. Deleting an absent key is not an error.
    async fn delete(&self, keys: &[&str]) -> Result<()>;

    /// Returns true if the key exists and has not expired.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Resets the TTL of an existing key.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<()>;

    /// Atomically increments the integer value at `key`, returning the
    /// new value. A missing key starts from zero.
    async fn increment(&self, key: &str) -> Result<i64>;

    /// Returns all keys matching a glob pattern (e.g. `weather:*`).
    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Removes every key.
    async fn flush(&self) -> Result<()>;

    /// Succeeds only if the underlying connection is live.
    async fn health_check(&self) -> Result<()>;
}
