use async_trait::async_trait;
use uuid::Uuid;

use crate::weather::Weather;

use super::Result;

/// Repository for weather record persistence.
///
/// All operations propagate underlying storage errors unchanged and never
/// retry. Lookups that can miss return [`RepositoryError::NotFound`]
/// so callers can distinguish a missing record from other failures.
///
/// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
#[async_trait]
pub trait WeatherRepository: Send + Sync {
    /// Inserts a new record.
    async fn save(&self, record: &Weather) -> Result<()>;

    /// Returns the record with the given ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Weather>;

    /// Returns every record. No pagination at this scope.
    async fn find_all(&self) -> Result<Vec<Weather>>;

    /// Returns the most recent record for a city, ordered by `fetched_at`
    /// descending.
    async fn find_latest_by_city(&self, city: &str) -> Result<Weather>;

    /// Full upsert of the given record state. The caller has already
    /// merged partial fields.
    async fn update(&self, record: &Weather) -> Result<()>;

    /// Removes the record with the given ID.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
