//! JWT bearer-token authentication for weathervane.
//!
//! This crate provides:
//! - HS256 token issuing and validation
//! - An axum extractor gating mutating endpoints
//! - Credential checking for the login endpoint

mod config;
mod error;
mod extractors;
mod service;
mod state;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentUser;
pub use service::{AuthService, Claims, IssuedToken};
pub use state::AuthState;
