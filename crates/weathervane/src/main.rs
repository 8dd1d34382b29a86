mod app;
mod cache;
mod config;
mod error;
mod handlers;
mod provider;
mod service;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weathervane_auth::{AuthConfig, AuthService, AuthState};
use weathervane_core::clock::SystemClock;

use crate::{
    app::create_app, config::Config, provider::OpenWeatherClient, state::AppState,
};

/// Weathervane - weather CRUD service with cache-aside reads
#[derive(Parser, Debug)]
#[command(name = "weathervane")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weathervane=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let auth_config = AuthConfig::from_env()?;

    if config.openweather_api_key.is_empty() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; provider calls will be rejected upstream");
    }

    let state = build_state(&config, auth_config).await?;

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Construct the application state from the feature-selected backends.
async fn build_state(config: &Config, auth_config: AuthConfig) -> Result<AppState> {
    #[cfg(feature = "sqlite")]
    let repo: Arc<dyn weathervane_core::storage::WeatherRepository> = {
        tracing::info!(path = %config.sqlite_path, "Opening SQLite storage");
        Arc::new(storage::SqliteRepository::new(&config.sqlite_path).await?)
    };

    #[cfg(feature = "inmemory")]
    let repo: Arc<dyn weathervane_core::storage::WeatherRepository> = {
        tracing::info!("Using in-memory storage; records will not survive restarts");
        Arc::new(storage::InMemoryRepository::new())
    };

    #[cfg(feature = "redis")]
    let cache_impl: Arc<dyn weathervane_core::cache::Cache> = {
        tracing::info!(url = %config.redis_url, "Connecting to Redis cache");
        Arc::new(cache::RedisCache::new(&config.redis_url, config.cache_ttl()).await?)
    };

    #[cfg(feature = "memory")]
    let cache_impl: Arc<dyn weathervane_core::cache::Cache> = {
        tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
        Arc::new(cache::MemoryCache::new(
            config.cache_max_entries,
            config.cache_ttl(),
        ))
    };

    let provider = Arc::new(OpenWeatherClient::new(
        config.openweather_api_key.clone(),
        config.openweather_base_url.clone(),
    )?);

    let auth = AuthState::new(Arc::new(AuthService::new(auth_config)));

    Ok(AppState::new(
        repo,
        provider,
        cache_impl,
        Arc::new(SystemClock),
        auth,
    ))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
