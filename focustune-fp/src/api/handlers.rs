//! HTTP request handlers
//!
//! Thin adapters between HTTP payloads and engine operations. All state
//! mutation happens inside the engines; handlers only hold the lock for
//! the duration of one synchronous operation.

use axum::{extract::State, http::StatusCode, Json};
use focustune_common::{presets, AdvanceMode, TimerConfig};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::player::{PlayerSnapshot, TrackSource};
use crate::state::SharedState;
use crate::timer::TimerSnapshot;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: String,
}

impl StatusResponse {
    fn ok() -> Json<Self> {
        Json(Self {
            status: "ok".to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct PresetRequest {
    id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadTracksRequest {
    tracks: Vec<TrackSource>,
}

#[derive(Debug, Deserialize)]
pub struct SelectTrackRequest {
    index: usize,
}

#[derive(Debug, Deserialize)]
pub struct AdvanceModeRequest {
    mode: AdvanceMode,
}

#[derive(Debug, Deserialize)]
pub struct SeekRequest {
    /// Target position as a fraction of the known duration, in [0, 1]
    fraction: f64,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map engine errors onto HTTP status codes
fn error_response(err: Error) -> ApiError {
    let status = match &err {
        Error::InvalidConfig(_) | Error::EmptySelection | Error::NoActiveDuration => {
            StatusCode::BAD_REQUEST
        }
        Error::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Timer Endpoints
// ============================================================================

/// GET /api/v1/timer/state
pub async fn get_timer_state(State(state): State<SharedState>) -> Json<TimerSnapshot> {
    Json(state.timer.lock().await.snapshot())
}

/// POST /api/v1/timer/configure
pub async fn configure_timer(
    State(state): State<SharedState>,
    Json(config): Json<TimerConfig>,
) -> Result<Json<TimerSnapshot>, ApiError> {
    let mut timer = state.timer.lock().await;
    timer.configure(config).map_err(error_response)?;
    Ok(Json(timer.snapshot()))
}

/// GET /api/v1/timer/presets
pub async fn list_presets() -> Json<&'static [presets::SessionPreset]> {
    Json(presets::PRESETS)
}

/// POST /api/v1/timer/preset
pub async fn apply_preset(
    State(state): State<SharedState>,
    Json(request): Json<PresetRequest>,
) -> Result<Json<TimerSnapshot>, ApiError> {
    let preset = presets::find_preset(&request.id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Unknown preset: {}", request.id),
            }),
        )
    })?;

    let mut timer = state.timer.lock().await;
    timer.configure(preset.config()).map_err(error_response)?;
    Ok(Json(timer.snapshot()))
}

/// POST /api/v1/timer/start
pub async fn start_timer(State(state): State<SharedState>) -> Json<StatusResponse> {
    state.timer.lock().await.start();
    StatusResponse::ok()
}

/// POST /api/v1/timer/pause
pub async fn pause_timer(State(state): State<SharedState>) -> Json<StatusResponse> {
    state.timer.lock().await.pause();
    StatusResponse::ok()
}

/// POST /api/v1/timer/reset
pub async fn reset_timer(State(state): State<SharedState>) -> Json<StatusResponse> {
    state.timer.lock().await.reset();
    StatusResponse::ok()
}

// ============================================================================
// Player Endpoints
// ============================================================================

/// GET /api/v1/player/state
pub async fn get_player_state(State(state): State<SharedState>) -> Json<PlayerSnapshot> {
    Json(state.player.lock().await.snapshot())
}

/// POST /api/v1/player/tracks
pub async fn load_tracks(
    State(state): State<SharedState>,
    Json(request): Json<LoadTracksRequest>,
) -> Result<Json<PlayerSnapshot>, ApiError> {
    let mut player = state.player.lock().await;
    player.load_tracks(request.tracks).map_err(error_response)?;
    Ok(Json(player.snapshot()))
}

/// POST /api/v1/player/play
pub async fn play(State(state): State<SharedState>) -> Json<StatusResponse> {
    state.player.lock().await.play();
    StatusResponse::ok()
}

/// POST /api/v1/player/pause
pub async fn pause(State(state): State<SharedState>) -> Json<StatusResponse> {
    state.player.lock().await.pause();
    StatusResponse::ok()
}

/// POST /api/v1/player/stop
pub async fn stop(State(state): State<SharedState>) -> Json<StatusResponse> {
    state.player.lock().await.stop();
    StatusResponse::ok()
}

/// POST /api/v1/player/next
pub async fn next_track(State(state): State<SharedState>) -> Json<PlayerSnapshot> {
    let mut player = state.player.lock().await;
    player.next();
    Json(player.snapshot())
}

/// POST /api/v1/player/previous
pub async fn previous_track(State(state): State<SharedState>) -> Json<PlayerSnapshot> {
    let mut player = state.player.lock().await;
    player.previous();
    Json(player.snapshot())
}

/// POST /api/v1/player/select
pub async fn select_track(
    State(state): State<SharedState>,
    Json(request): Json<SelectTrackRequest>,
) -> Result<Json<PlayerSnapshot>, ApiError> {
    let mut player = state.player.lock().await;
    player.select_track(request.index).map_err(error_response)?;
    Ok(Json(player.snapshot()))
}

/// POST /api/v1/player/mode
pub async fn set_advance_mode(
    State(state): State<SharedState>,
    Json(request): Json<AdvanceModeRequest>,
) -> Json<PlayerSnapshot> {
    let mut player = state.player.lock().await;
    player.set_advance_mode(request.mode);
    Json(player.snapshot())
}

/// POST /api/v1/player/seek
pub async fn seek(
    State(state): State<SharedState>,
    Json(request): Json<SeekRequest>,
) -> Result<Json<PlayerSnapshot>, ApiError> {
    let mut player = state.player.lock().await;
    player.seek(request.fraction).map_err(error_response)?;
    Ok(Json(player.snapshot()))
}
