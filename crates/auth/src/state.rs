use std::sync::Arc;

use crate::AuthService;

/// Shared auth state, cloned into the application state.
///
/// The server's `AppState` implements `FromRef<AppState> for AuthState`
/// so the [`CurrentUser`](crate::CurrentUser) extractor can reach it.
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
}

impl AuthState {
    pub fn new(service: Arc<AuthService>) -> Self {
        Self { service }
    }
}
