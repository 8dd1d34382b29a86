//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Cache connectivity status
//! - `/readyz` - Repository and cache readiness

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check the server is accepting
/// connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Cache connectivity.
///
/// Cache failures degrade request latency but never fail requests, so
/// this reports 503 without taking the instance out of rotation on its
/// own.
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.cache.health_check().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "cache": "ok" }))).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "cache": err.to_string() })),
        )
            .into_response(),
    }
}

/// GET /readyz - Readiness probe.
///
/// Verifies the repository answers queries and reports cache state
/// alongside. Repository failure is the only condition that makes the
/// instance unready.
pub async fn readyz(State(state): State<AppState>) -> Response {
    let storage = state.repo.find_all().await;
    let cache = state.cache.health_check().await;

    let body = serde_json::json!({
        "storage": match &storage {
            Ok(_) => "ok".to_string(),
            Err(err) => err.to_string(),
        },
        "cache": match &cache {
            Ok(()) => "ok".to_string(),
            Err(err) => err.to_string(),
        },
    });

    let status = if storage.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body)).into_response()
}
