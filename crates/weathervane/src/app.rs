use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{auth, health, weather},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API consumers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        // Weather routes
        .route(
            "/weather",
            get(weather::get_all).post(weather::fetch_and_store),
        )
        .route("/weather/latest/{city}", get(weather::latest_by_city))
        .route(
            "/weather/{id}",
            get(weather::get_by_id)
                .put(weather::update)
                .delete(weather::delete),
        )
        // Auth routes
        .route("/auth/login", post(auth::login))
        // Health probes
        .route("/livez", get(health::livez))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "inmemory", feature = "memory"))]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use weathervane_auth::{AuthConfig, AuthService, AuthState};
    use weathervane_core::clock::SystemClock;
    use weathervane_core::provider::{
        ProviderError, Result as ProviderResult, WeatherProvider, WeatherReading,
    };

    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    /// Provider stub returning a fixed reading.
    struct StubProvider {
        temperature: f64,
        fail: bool,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn fetch(&self, _city: &str, _country: &str) -> ProviderResult<WeatherReading> {
            if self.fail {
                return Err(ProviderError::RequestFailed("provider down".to_string()));
            }
            Ok(WeatherReading {
                temperature: self.temperature,
                description: "scattered clouds".to_string(),
                humidity: 55,
                wind_speed: 4.1,
                fetched_at: Utc.with_ymd_and_hms(2025, 3, 10, 11, 55, 0).unwrap(),
            })
        }
    }

    fn auth_service() -> Arc<AuthService> {
        Arc::new(AuthService::new(AuthConfig {
            secret: "test-secret".to_string(),
            token_ttl: std::time::Duration::from_secs(3600),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        }))
    }

    fn test_app_with_provider(provider: StubProvider) -> (Router, String) {
        let auth = auth_service();
        let token = auth.issue_token("admin").unwrap().token;

        let state = AppState::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(provider),
            Arc::new(MemoryCache::new(1_000, std::time::Duration::from_secs(600))),
            Arc::new(SystemClock),
            AuthState::new(auth),
        );
        (create_app(state), token)
    }

    fn test_app() -> (Router, String) {
        test_app_with_provider(StubProvider {
            temperature: 30.5,
            fail: false,
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_weather(token: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/weather")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let (app, _) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_cache_ok() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["cache"], "ok");
    }

    #[tokio::test]
    async fn test_readyz_reports_storage_ok() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/readyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["storage"], "ok");
    }

    #[tokio::test]
    async fn test_fetch_and_store_requires_token() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/weather")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"city": "tehran", "country": "IR"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_fetch_and_store_rejects_bad_token() {
        let (app, _) = test_app();

        let response = app
            .oneshot(post_weather("garbage", r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_fetch_and_store_creates_record() {
        let (app, token) = test_app();

        let response = app
            .oneshot(post_weather(&token, r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["city"], "tehran");
        assert_eq!(json["country"], "IR");
        assert_eq!(json["temperature"], 30.5);
        assert!(json["id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_fetch_and_store_empty_city_is_400() {
        let (app, token) = test_app();

        let response = app
            .oneshot(post_weather(&token, r#"{"city": "  ", "country": "IR"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fetch_and_store_provider_failure_is_502() {
        let (app, token) = test_app_with_provider(StubProvider {
            temperature: 0.0,
            fail: true,
        });

        let response = app
            .oneshot(post_weather(&token, r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_get_all_starts_empty() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/weather")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_roundtrip() {
        let (app, token) = test_app();

        let created = app
            .clone()
            .oneshot(post_weather(&token, r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/weather/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], id.as_str());
        assert_eq!(json["city"], "tehran");
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_404() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/weather/00000000-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_by_id_malformed_uuid_is_400() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/weather/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_applies_partial_fields() {
        let (app, token) = test_app();

        let created = app
            .clone()
            .oneshot(post_weather(&token, r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/weather/{id}"))
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::from(r#"{"temperature": 12.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["temperature"], 12.0);
        // Untouched fields survive the partial update.
        assert_eq!(json["city"], "tehran");
        assert_eq!(json["description"], "scattered clouds");
    }

    #[tokio::test]
    async fn test_update_requires_token() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/weather/00000000-0000-0000-0000-000000000000")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"temperature": 12.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_humidity_out_of_range_is_400() {
        let (app, token) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/weather/00000000-0000-0000-0000-000000000000")
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::from(r#"{"humidity": 250}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let (app, token) = test_app();

        let created = app
            .clone()
            .oneshot(post_weather(&token, r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/weather/{id}"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/weather/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_latest_by_city() {
        let (app, token) = test_app();

        app.clone()
            .oneshot(post_weather(&token, r#"{"city": "tehran", "country": "IR"}"#))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/weather/latest/tehran")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["city"], "tehran");
    }

    #[tokio::test]
    async fn test_latest_by_city_unknown_is_404() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/weather/latest/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"username": "admin", "password": "password"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["tokenType"], "Bearer");
        assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(json["expiresAt"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"username": "admin", "password": "wrong"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_token_authorizes_mutations() {
        let (app, _) = test_app();

        let login = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"username": "admin", "password": "password"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        let login = body_json(login).await;
        let token = login["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(post_weather(&token, r#"{"city": "paris", "country": "FR"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
