//! SocialHub - social networking backend over an in-memory store
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                        │
//! │  - REST endpoints under /api                                │
//! │  - Health and Prometheus metrics                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Service Layer                            │
//! │  - Repository traits (one per entity)                       │
//! │  - Relationship resolver and mutation counters              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                              │
//! │  - Entity store (insertion-ordered collections)             │
//! │  - Models and credential hashing                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers and DTOs
//! - `service`: Storage facade and business rules
//! - `data`: Entity store and models
//! - `config`: Configuration management
//! - `error`: Error types
//! - `metrics`: Prometheus instruments

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod service;

use std::sync::Arc;

use service::{MemStorage, RandomStatsPolicy, Storage};

/// Application state shared across all handlers
///
/// This struct is cloned for each request.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// Storage facade (volatile, in-memory)
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    /// Initialize application state
    ///
    /// # Steps
    /// 1. Build the in-memory storage with the configured suggestion policy
    /// 2. Seed demo data when `store.seed_demo_data` is set
    ///
    /// # Errors
    /// Returns error if seeding fails
    pub async fn new(config: config::AppConfig) -> Result<Self, error::AppError> {
        tracing::info!("Initializing application state...");

        let policy = RandomStatsPolicy::new(&config.suggestions);
        let storage = MemStorage::new(Box::new(policy));

        if config.store.seed_demo_data {
            service::seed_demo_data(&storage).await?;
        }

        Ok(Self {
            config: Arc::new(config),
            storage: Arc::new(storage),
        })
    }
}

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::{Router, middleware};
    use tower_http::{
        compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer,
    };

    let cors_layer = build_cors_layer(&state.config.server);

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest("/api", api::social_api_router())
        .layer(middleware::from_fn(api::track_http_metrics))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
        .merge(api::metrics_router())
}

fn build_cors_layer(server: &config::ServerConfig) -> tower_http::cors::CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::{Any, CorsLayer};

    let Some(allowed_origin) = server.allowed_origin.as_deref() else {
        return CorsLayer::permissive();
    };

    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => CorsLayer::new()
            .allow_origin([origin])
            .allow_methods(Any)
            .allow_headers(Any),
        Err(error) => {
            tracing::error!(
                %error,
                origin = %allowed_origin,
                "Failed to parse configured CORS origin; denying cross-origin requests"
            );
            CorsLayer::new().allow_methods(Any).allow_headers(Any)
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
