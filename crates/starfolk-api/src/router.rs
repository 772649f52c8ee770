//! Axum router construction for the API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! open to any origin.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /api/characters` -- name search
/// - `GET /api/characters/featured` -- featured characters
/// - `GET /api/characters/{id}` -- single character
/// - `POST /api/__reload` -- reload the data file
///
/// The static `featured` segment takes priority over `{id}`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/characters", get(handlers::search_characters))
        .route("/api/characters/featured", get(handlers::featured_characters))
        .route("/api/characters/{id}", get(handlers::get_character))
        .route("/api/__reload", post(handlers::reload))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
