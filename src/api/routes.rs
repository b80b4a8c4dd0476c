//! API Routes
//!
//! Configures the Axum router with all lookup endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, name_handler, names_handler, stats_handler, uuid_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /names/:uuid` - Name history for a UUID
/// - `GET /name/:uuid` - Current name for a UUID
/// - `GET /uuid/:name` - UUID and canonical name for a player name
/// - `GET /stats` - Lookup cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/names/:uuid", get(names_handler))
        .route("/name/:uuid", get(name_handler))
        .route("/uuid/:name", get(uuid_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
