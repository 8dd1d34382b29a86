//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};

use crate::AuthState;

/// Extractor for the authenticated user. Returns 401 if the request has
/// no valid bearer token.
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header_value = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or((StatusCode::UNAUTHORIZED, "missing Authorization header"))?
            .to_str()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "invalid Authorization header"))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .or_else(|| header_value.strip_prefix("bearer "))
            .ok_or((StatusCode::UNAUTHORIZED, "invalid Authorization header"))?;

        let claims = auth_state.service.validate_token(token).map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            (StatusCode::UNAUTHORIZED, "invalid or expired token")
        })?;

        Ok(CurrentUser(claims.sub))
    }
}
