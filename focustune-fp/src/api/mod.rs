//! REST API implementation for the Focus Player
//!
//! Exposes timer and transport intents plus an SSE event stream to
//! presentation clients.

pub mod handlers;
pub mod sse;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Create the API router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // Health check (no prefix for health endpoint)
        .route("/health", get(health_check))
        // API v1 routes
        .nest(
            "/api/v1",
            Router::new()
                // Timer endpoints
                .route("/timer/state", get(handlers::get_timer_state))
                .route("/timer/configure", post(handlers::configure_timer))
                .route("/timer/presets", get(handlers::list_presets))
                .route("/timer/preset", post(handlers::apply_preset))
                .route("/timer/start", post(handlers::start_timer))
                .route("/timer/pause", post(handlers::pause_timer))
                .route("/timer/reset", post(handlers::reset_timer))
                // Player endpoints
                .route("/player/state", get(handlers::get_player_state))
                .route("/player/tracks", post(handlers::load_tracks))
                .route("/player/play", post(handlers::play))
                .route("/player/pause", post(handlers::pause))
                .route("/player/stop", post(handlers::stop))
                .route("/player/next", post(handlers::next_track))
                .route("/player/previous", post(handlers::previous_track))
                .route("/player/select", post(handlers::select_track))
                .route("/player/mode", post(handlers::set_advance_mode))
                .route("/player/seek", post(handlers::seek))
                // SSE events
                .route("/events", get(sse::sse_handler)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "module": "focustune-fp",
        "version": env!("CARGO_PKG_VERSION"),
        "port": state.port,
    }))
}
