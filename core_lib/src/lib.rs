//! Core library for the provider directory: the record store, the search
//! and ordering engine, and the HTTP routes that expose them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod search;
pub mod seed;
pub mod store;

pub use crate::config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::{cors_layer_from_config, cors_layer_permissive};
pub use models::{NewProvider, Provider};
pub use search::{SearchEngine, SearchQuery, SortKey};
pub use store::{ProviderStore, StoreStats};

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub store: ProviderStore,
    pub search_engine: SearchEngine,
}

impl AppState {
    pub fn new(store: ProviderStore) -> Self {
        let search_engine = SearchEngine::new(store.clone());

        Self {
            app_name: "Provider Directory".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store,
            search_engine,
        }
    }

    /// State backed by the seed list the configuration selects.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let records = seed::load_configured_seed(&config.seed.file)?;
        let store = ProviderStore::from_seed(records)?;
        Ok(Self::new(store))
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: AppConfig) -> Router {
    let router = create_routes()
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .with_state(state);

    middleware::logging::with_request_logging(router)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

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
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
