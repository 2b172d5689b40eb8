//! Focus Player (focustune-fp) - Main entry point
//!
//! Hosts the Pomodoro timer engine and the playlist transport behind an
//! HTTP/SSE control interface.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use focustune_common::config::AppConfig;
use focustune_common::EventBus;
use focustune_fp::api;
use focustune_fp::player::{NullSink, PlaylistTransport, RandomIndexPicker};
use focustune_fp::state::SharedState;
use focustune_fp::timer::{run_ticker, DesktopNotifier, TimerEngine};

/// Command-line arguments for focustune-fp
#[derive(Parser, Debug)]
#[command(name = "focustune-fp")]
#[command(about = "Focus Player service for FocusTune")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "FOCUSTUNE_FP_PORT")]
    port: Option<u16>,

    /// Path to TOML configuration file
    #[arg(short, long, env = "FOCUSTUNE_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "focustune_fp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    let port = args.port.unwrap_or(config.port);

    info!("Starting FocusTune Focus Player on port {}", port);
    info!(
        "Timer defaults: focus={}s break={}s long_break={}s cycles={}",
        config.timer.focus_seconds,
        config.timer.break_seconds,
        config.timer.long_break_seconds,
        config.timer.cycles_before_long_break
    );

    // Shared event bus feeding SSE clients
    let events = EventBus::new(1000);

    // Timer engine with desktop notification capability
    let timer = Arc::new(Mutex::new(
        TimerEngine::new(config.timer, events.clone(), Arc::new(DesktopNotifier))
            .context("Failed to initialize timer engine")?,
    ));

    // Playlist transport; the media sink is headless until a front end
    // attaches a real one
    let player = Arc::new(Mutex::new(PlaylistTransport::new(
        Box::new(NullSink),
        Box::new(RandomIndexPicker),
        events.clone(),
    )));

    // 1 Hz tick source driving the countdown
    let ticker = tokio::spawn(run_ticker(timer.clone()));
    info!("Tick source started");

    // Build the application router
    let app_state = SharedState {
        timer,
        player,
        events,
        port,
    };
    let app = api::create_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    ticker.abort();
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
