//! # terratrackd: TerraTrack daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise structured logging
//! - Build the random source (seeded or from entropy)
//! - Spawn the refresh scheduler, presenting frames to the in-process frame bus
//! - Build the axum router over the frame bus and the control surface
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl+C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use terratrack_adapter_http_axum::state::AppState;
use terratrack_adapter_rand::RandSource;
use terratrack_app::frame_bus::InProcessFrameBus;
use terratrack_app::ports::TokioClock;
use terratrack_app::scheduler::RefreshScheduler;
use terratrack_app::shutdown::{self, ShutdownHandle};
use terratrack_app::telemetry::TelemetryGenerator;

use config::Config;

const FRAME_BUS_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let refresh = config.refresh_config()?;
    tracing::info!(
        led_on = refresh.led_on(),
        auto_refresh = refresh.auto_refresh_enabled(),
        interval_secs = refresh.refresh_interval_secs(),
        seeded = config.generator.seed.is_some(),
        "starting terratrackd"
    );

    // Control surface and shutdown
    let (controls_tx, controls_rx) = watch::channel(refresh);
    let (shutdown_handle, shutdown_signal) = shutdown::channel();

    // Presentation
    let frames = Arc::new(InProcessFrameBus::new(FRAME_BUS_CAPACITY));

    // Scheduler
    let generator = TelemetryGenerator::new(RandSource::from_optional_seed(config.generator.seed));
    let mut scheduler = RefreshScheduler::new(
        generator,
        Arc::clone(&frames),
        TokioClock,
        controls_rx,
        shutdown_signal,
    );
    let scheduler_task = tokio::spawn(async move { scheduler.run_until_shutdown().await });

    // HTTP
    let state = AppState::new(frames, controls_tx);
    let app = terratrack_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "terratrackd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on_ctrl_c(shutdown_handle.clone()))
        .await?;

    // The server may also stop on its own; make sure the scheduler follows.
    shutdown_handle.trigger();
    match scheduler_task.await? {
        Ok(frames) => tracing::info!(frames, "scheduler stopped"),
        Err(err) => tracing::error!(error = %err, "scheduler stopped with an error"),
    }

    Ok(())
}

async fn shutdown_on_ctrl_c(handle: ShutdownHandle) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
    }
    tracing::info!("shutdown requested");
    handle.trigger();
}
