//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use weathervane_core::storage::{RepositoryError, Result, WeatherRepository};
use weathervane_core::weather::Weather;

/// In-memory storage backend for tests and local development.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<Uuid, Weather>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeatherRepository for InMemoryRepository {
    async fn save(&self, record: &Weather) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Weather",
                id: record.id.to_string(),
            });
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Weather> {
        let records = self.records.read().await;
        records.get(&id).cloned().ok_or(RepositoryError::NotFound {
            entity_type: "Weather",
            id: id.to_string(),
        })
    }

    async fn find_all(&self) -> Result<Vec<Weather>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_latest_by_city(&self, city: &str) -> Result<Weather> {
        let records = self.records.read().await;
        records
            .values()
            .filter(|r| r.city == city)
            .max_by_key(|r| r.fetched_at)
            .cloned()
            .ok_or(RepositoryError::NotFound {
                entity_type: "Weather",
                id: city.to_string(),
            })
    }

    async fn update(&self, record: &Weather) -> Result<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Weather",
                id: record.id.to_string(),
            });
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        if records.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Weather",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
