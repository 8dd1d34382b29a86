use thiserror::Error;

use weathervane_core::provider::ProviderError;
use weathervane_core::storage::RepositoryError;

/// Errors a service operation can return to its caller.
///
/// Repository and provider failures pass through transparently so the
/// handler layer can still distinguish not-found from other failures.
/// Cache failures never appear here - they are logged at the point of
/// occurrence and swallowed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ServiceError {
    /// Returns true if this is a repository not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Repository(err) if err.is_not_found())
    }
}
