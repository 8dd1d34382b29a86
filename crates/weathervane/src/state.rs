//! Shared application state.
//!
//! Cloned into every request handler. Holds the orchestrating weather
//! service plus direct handles to the repository and cache for the
//! health probes, and the auth state for the bearer-token extractor.

use std::sync::Arc;

use axum::extract::FromRef;

use weathervane_auth::AuthState;
use weathervane_core::cache::Cache;
use weathervane_core::clock::Clock;
use weathervane_core::provider::WeatherProvider;
use weathervane_core::storage::WeatherRepository;

use crate::service::WeatherService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The cache-aside orchestrator behind every weather endpoint.
    pub service: WeatherService,
    /// Repository handle for readiness probing.
    pub repo: Arc<dyn WeatherRepository>,
    /// Cache handle for health probing.
    pub cache: Arc<dyn Cache>,
    /// Bearer-token auth state.
    pub auth: AuthState,
}

impl AppState {
    /// Wires the service from its injected dependencies.
    pub fn new(
        repo: Arc<dyn WeatherRepository>,
        provider: Arc<dyn WeatherProvider>,
        cache: Arc<dyn Cache>,
        clock: Arc<dyn Clock>,
        auth: AuthState,
    ) -> Self {
        let service = WeatherService::new(repo.clone(), provider, cache.clone(), clock);
        Self {
            service,
            repo,
            cache,
            auth,
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> AuthState {
        state.auth.clone()
    }
}
