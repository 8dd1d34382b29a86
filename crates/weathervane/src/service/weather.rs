//! Cache-aside orchestration for weather records.
//!
//! Reads check the cache before the source of truth; writes go to the
//! repository first and then refresh or invalidate the affected cache
//! keys best-effort. A cache failure is never fatal: reads treat it as
//! a miss, writes log and continue.

use std::sync::Arc;

use uuid::Uuid;

use weathervane_core::cache::{
    deserialize_weather, id_key, serialize_weather, weather_key, Cache,
};
use weathervane_core::clock::Clock;
use weathervane_core::provider::WeatherProvider;
use weathervane_core::storage::WeatherRepository;
use weathervane_core::weather::{merge_update, Weather, WeatherUpdate};

use super::ServiceError;

/// Orchestrates the cache, repository, and provider for all weather
/// operations. Holds no state of its own beyond the injected
/// dependencies; safe to share across concurrent requests.
#[derive(Clone)]
pub struct WeatherService {
    repo: Arc<dyn WeatherRepository>,
    provider: Arc<dyn WeatherProvider>,
    cache: Arc<dyn Cache>,
    clock: Arc<dyn Clock>,
}

impl WeatherService {
    pub fn new(
        repo: Arc<dyn WeatherRepository>,
        provider: Arc<dyn WeatherProvider>,
        cache: Arc<dyn Cache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            provider,
            cache,
            clock,
        }
    }

    /// Fetches weather for a city/country pair, from cache when possible.
    ///
    /// On a composite-key cache hit the cached record is returned verbatim
    /// with no provider call and no repository write - once populated, the
    /// cache is authoritative until the entry expires. On a miss (including
    /// an unavailable cache) the provider is called, the new record is
    /// persisted, and both the composite and identity cache keys are
    /// populated best-effort.
    ///
    /// Two concurrent calls for the same pair may both miss and both
    /// persist a record; there is no in-flight de-duplication.
    pub async fn fetch_and_store(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Weather, ServiceError> {
        let cache_key = weather_key(city, country);

        if let Some(cached) = self.cache_get(&cache_key).await {
            tracing::debug!(%city, %country, "Returning cached weather");
            return Ok(cached);
        }

        tracing::debug!(%city, %country, "Cache miss, fetching from provider");
        let reading = self.provider.fetch(city, country).await?;

        let now = self.clock.now();
        let record = Weather {
            id: Uuid::new_v4(),
            city: city.to_string(),
            country: country.to_string(),
            temperature: reading.temperature,
            description: reading.description,
            humidity: reading.humidity,
            wind_speed: reading.wind_speed,
            fetched_at: reading.fetched_at,
            created_at: now,
            updated_at: now,
        };

        self.repo.save(&record).await?;

        // Persisted; cache population from here on is best-effort.
        self.cache_put(&cache_key, &record).await;
        self.cache_put(&id_key(record.id), &record).await;

        Ok(record)
    }

    /// Returns a record by ID, from cache when possible.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Weather, ServiceError> {
        let cache_key = id_key(id);

        if let Some(cached) = self.cache_get(&cache_key).await {
            tracing::trace!(%id, "Cache hit for weather record");
            return Ok(cached);
        }

        let record = self.repo.find_by_id(id).await?;

        self.cache_put(&cache_key, &record).await;

        Ok(record)
    }

    /// Returns the most recent record for a city. Straight repository
    /// read; not on the cached per-record hot path.
    pub async fn latest_by_city(&self, city: &str) -> Result<Weather, ServiceError> {
        Ok(self.repo.find_latest_by_city(city).await?)
    }

    /// Returns every record. Straight repository read.
    pub async fn get_all(&self) -> Result<Vec<Weather>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Applies a partial update to an existing record.
    ///
    /// Fields overwrite only when non-empty/non-zero (see
    /// [`merge_update`]). After persisting, the identity cache key is
    /// refreshed and, when the city or country changed, the old composite
    /// key is dropped and the new one set - all best-effort.
    pub async fn update(&self, id: Uuid, update: &WeatherUpdate) -> Result<Weather, ServiceError> {
        let existing = self.repo.find_by_id(id).await?;

        let old_key = weather_key(&existing.city, &existing.country);

        let mut merged = merge_update(&existing, update);
        merged.updated_at = self.clock.now();

        self.repo.update(&merged).await?;

        self.cache_put(&id_key(id), &merged).await;

        let new_key = weather_key(&merged.city, &merged.country);
        if new_key != old_key {
            self.cache_drop(&[&old_key]).await;
        }
        self.cache_put(&new_key, &merged).await;

        Ok(merged)
    }

    /// Deletes a record and evicts its cache keys.
    ///
    /// The record is loaded first only to recover its city/country for
    /// composite-key eviction; if that load fails, deletion proceeds and
    /// only the identity key is evicted.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.repo.find_by_id(id).await.ok();

        self.repo.delete(id).await?;

        let identity = id_key(id);
        self.cache_drop(&[identity.as_str()]).await;

        if let Some(record) = existing {
            let composite = weather_key(&record.city, &record.country);
            self.cache_drop(&[composite.as_str()]).await;
        }

        Ok(())
    }

    /// Best-effort cache read. Any cache failure, and any stored bytes
    /// that fail to deserialize, count as a miss.
    async fn cache_get(&self, key: &str) -> Option<Weather> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match deserialize_weather(&bytes) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(key, error = %err, "Cache entry deserialization failed");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed");
                None
            }
        }
    }

    /// Best-effort cache write under the default TTL.
    async fn cache_put(&self, key: &str, record: &Weather) {
        let bytes = match serialize_weather(record) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to serialize weather for cache");
                return;
            }
        };
        if let Err(err) = self.cache.set(key, &bytes).await {
            tracing::warn!(key, error = %err, "Failed to cache weather record");
        }
    }

    /// Best-effort cache eviction.
    async fn cache_drop(&self, keys: &[&str]) {
        if let Err(err) = self.cache.delete(keys).await {
            tracing::warn!(?keys, error = %err, "Failed to evict cache keys");
        }
    }
}
