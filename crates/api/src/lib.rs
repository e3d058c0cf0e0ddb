//! `api` crate — HTTP REST API layer.
//!
//! Exposes, under `/marron/pets`:
//!   GET    /                     list all pets
//!   POST   /                     create a pet
//!   GET    /{id}                 fetch one pet
//!   PUT    /{id}                 replace a pet's fields
//!   DELETE /{id}                 delete a pet
//!   GET    /search               OR search over the text fields
//!   GET    /search/price/{price} pets at or below a price
//!   POST   /bulk                 create many pets

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use db::PetStore;
use service::PetService;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use error::{ApiError, ServeError};

/// Path prefix for every pet route.
pub const PETS_PREFIX: &str = "/marron/pets";

/// Origin of the front-end development server.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PetService>,
}

impl AppState {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self {
            service: Arc::new(PetService::new(store)),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// The single origin allowed to make cross-origin requests.
    pub cors_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState, config: &ApiConfig) -> Result<Router, ServeError> {
    let origin = HeaderValue::from_str(&config.cors_origin)
        .map_err(|_| ServeError::InvalidOrigin(config.cors_origin.clone()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let pets = Router::new()
        .route("/", get(handlers::pets::list).post(handlers::pets::create))
        .route("/bulk", post(handlers::pets::bulk_create))
        .route("/search", get(handlers::pets::search))
        .route("/search/price/{price}", get(handlers::pets::search_by_price))
        .route(
            "/{id}",
            get(handlers::pets::get)
                .put(handlers::pets::update)
                .delete(handlers::pets::delete),
        );

    Ok(Router::new()
        .nest(PETS_PREFIX, pets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: &ApiConfig, store: Arc<dyn PetStore>) -> Result<(), ServeError> {
    let app = router(AppState::new(store), config)?;

    let listener = TcpListener::bind(&config.bind).await?;
    info!("Listening on {} (CORS origin {})", config.bind, config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
