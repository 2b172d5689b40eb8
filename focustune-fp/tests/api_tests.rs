//! Integration tests for the REST API
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`;
//! no TCP listener is required.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use focustune_common::{EventBus, TimerConfig};
use focustune_fp::api;
use focustune_fp::player::{NullSink, PlaylistTransport, RandomIndexPicker};
use focustune_fp::state::SharedState;
use focustune_fp::timer::{NullNotifier, TimerEngine};

fn test_app() -> (Router, SharedState) {
    let events = EventBus::new(100);
    let timer = Arc::new(Mutex::new(
        TimerEngine::new(TimerConfig::default(), events.clone(), Arc::new(NullNotifier))
            .expect("default config is valid"),
    ));
    let player = Arc::new(Mutex::new(PlaylistTransport::new(
        Box::new(NullSink),
        Box::new(RandomIndexPicker),
        events.clone(),
    )));
    let state = SharedState {
        timer,
        player,
        events,
        port: 0,
    };
    (api::create_router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn track_sources(names: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "tracks": names
            .iter()
            .map(|n| serde_json::json!({
                "display_name": n,
                "locator": format!("/music/{}", n),
            }))
            .collect::<Vec<_>>()
    })
}

#[tokio::test]
async fn test_health_reports_ok() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "focustune-fp");
}

#[tokio::test]
async fn test_timer_configure_and_state() {
    let (app, _) = test_app();

    let (status, body) = post_json(
        &app,
        "/api/v1/timer/configure",
        serde_json::json!({
            "focus_seconds": 60,
            "break_seconds": 30,
            "long_break_seconds": 90,
            "cycles_before_long_break": 2,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["config"]["focus_seconds"], 60);
    assert_eq!(body["seconds_remaining"], 60);

    let (status, body) = get(&app, "/api/v1/timer/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "Focus");
    assert_eq!(body["running"], false);
    assert_eq!(body["seconds_remaining"], 60);
}

#[tokio::test]
async fn test_timer_invalid_config_rejected() {
    let (app, _) = test_app();

    let (status, body) = post_json(
        &app,
        "/api/v1/timer/configure",
        serde_json::json!({
            "focus_seconds": 0,
            "break_seconds": 300,
            "long_break_seconds": 900,
            "cycles_before_long_break": 4,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("focus_seconds"));

    // State untouched
    let (_, body) = get(&app, "/api/v1/timer/state").await;
    assert_eq!(body["seconds_remaining"], 1500);
}

#[tokio::test]
async fn test_timer_presets() {
    let (app, _) = test_app();

    let (status, body) = get(&app, "/api/v1/timer/presets").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().len() >= 5);

    let (status, body) = post_json(
        &app,
        "/api/v1/timer/preset",
        serde_json::json!({"id": "long"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["config"]["focus_seconds"], 3000);

    let (status, _) = post_json(
        &app,
        "/api/v1/timer/preset",
        serde_json::json!({"id": "nonexistent"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_timer_start_pause_reset() {
    let (app, _) = test_app();

    let (status, _) = post(&app, "/api/v1/timer/start").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/v1/timer/state").await;
    assert_eq!(body["running"], true);

    let (status, _) = post(&app, "/api/v1/timer/pause").await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get(&app, "/api/v1/timer/state").await;
    assert_eq!(body["running"], false);

    let (status, _) = post(&app, "/api/v1/timer/reset").await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get(&app, "/api/v1/timer/state").await;
    assert_eq!(body["mode"], "Focus");
    assert_eq!(body["seconds_remaining"], 1500);
}

#[tokio::test]
async fn test_player_load_and_select_flow() {
    let (app, _) = test_app();

    let (status, body) =
        post_json(&app, "/api/v1/player/tracks", track_sources(&["a", "b", "c"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_index"], 0);
    assert_eq!(body["tracks"].as_array().unwrap().len(), 3);
    assert_eq!(body["playing"], false);

    let (status, body) = post_json(
        &app,
        "/api/v1/player/select",
        serde_json::json!({"index": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_index"], 2);

    let (status, body) = post_json(
        &app,
        "/api/v1/player/select",
        serde_json::json!({"index": 9}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("out of range"));
}

#[tokio::test]
async fn test_player_empty_load_rejected() {
    let (app, _) = test_app();

    let (status, body) = post_json(&app, "/api/v1/player/tracks", track_sources(&[])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Empty selection"));
}

#[tokio::test]
async fn test_player_mode_and_navigation() {
    let (app, _) = test_app();
    post_json(&app, "/api/v1/player/tracks", track_sources(&["a", "b"])).await;

    let (status, body) = post_json(
        &app,
        "/api/v1/player/mode",
        serde_json::json!({"mode": "shuffle"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advance_mode"], "shuffle");

    let (status, body) = post(&app, "/api/v1/player/next").await;
    assert_eq!(status, StatusCode::OK);
    // With 2 tracks, shuffle must move off index 0
    assert_eq!(body["current_index"], 1);
}

#[tokio::test]
async fn test_player_seek_requires_duration() {
    let (app, _) = test_app();
    post_json(&app, "/api/v1/player/tracks", track_sources(&["a"])).await;

    // The headless sink never reports a duration
    let (status, body) = post_json(
        &app,
        "/api/v1/player/seek",
        serde_json::json!({"fraction": 0.5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("No active duration"));
}

#[tokio::test]
async fn test_intents_emit_bus_events() {
    let (app, state) = test_app();
    let mut rx = state.events.subscribe();

    post(&app, "/api/v1/timer/start").await;
    post_json(&app, "/api/v1/player/tracks", track_sources(&["a"])).await;

    let mut types = Vec::new();
    while let Ok(event) = rx.try_recv() {
        types.push(event.event_type().to_string());
    }
    assert!(types.contains(&"TimerProgress".to_string()));
    assert!(types.contains(&"PlaylistReplaced".to_string()));
    assert!(types.contains(&"TrackChanged".to_string()));
}
