//! Login handler issuing bearer tokens.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_at: String,
}

/// Exchange credentials for a bearer token (POST /auth/login).
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let auth = &state.auth.service;

    if !auth.validate_credentials(&payload.username, &payload.password) {
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let issued = auth.issue_token(&payload.username).map_err(|err| {
        tracing::error!(error = %err, "Token issue failed");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "could not issue token")
    })?;

    Ok(Json(LoginResponse {
        token: issued.token,
        token_type: "Bearer".to_string(),
        expires_at: issued.expires_at.to_rfc3339(),
    }))
}
