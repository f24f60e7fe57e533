//! End-to-end smoke tests for the full terratrackd stack.
//!
//! Each test wires the real random source, scheduler, frame bus and axum
//! router together and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use terratrack_adapter_http_axum::router;
use terratrack_adapter_http_axum::state::AppState;
use terratrack_adapter_rand::RandSource;
use terratrack_app::frame_bus::InProcessFrameBus;
use terratrack_app::ports::TokioClock;
use terratrack_app::scheduler::{RefreshScheduler, RunOutcome};
use terratrack_app::shutdown;
use terratrack_app::telemetry::TelemetryGenerator;
use terratrack_domain::refresh::RefreshConfig;
use tokio::sync::watch;
use tower::ServiceExt;

struct Harness {
    app: axum::Router,
    frames: Arc<InProcessFrameBus>,
    controls: watch::Receiver<RefreshConfig>,
}

/// Build a fully-wired router with a one-shot (auto-refresh off) config.
fn harness() -> Harness {
    let config = RefreshConfig::new(true, false, 5).expect("default interval is valid");
    let (tx, rx) = watch::channel(config);
    let frames = Arc::new(InProcessFrameBus::new(16));
    let state = AppState::new(Arc::clone(&frames), tx);
    Harness {
        app: router::build(state),
        frames,
        controls: rx,
    }
}

async fn run_one_cycle(harness: &Harness) -> RunOutcome {
    let (_handle, signal) = shutdown::channel();
    let mut scheduler = RefreshScheduler::new(
        TelemetryGenerator::new(RandSource::seeded(42)),
        Arc::clone(&harness.frames),
        TokioClock,
        harness.controls.clone(),
        signal,
    );
    scheduler.run().await.expect("frame bus never rejects frames")
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(resp.into_body().collect().await.unwrap().to_bytes().to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = harness()
        .app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "OK");
}

// ---------------------------------------------------------------------------
// Dashboard (SSR) page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_waiting_page_before_first_frame() {
    let resp = harness()
        .app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("TerraTrack: Smart Terrarium Dashboard"));
    assert!(body.contains("Device Controls"));
    assert!(body.contains("Waiting for the first sensor reading"));
}

#[tokio::test]
async fn should_render_readings_after_scheduler_cycle() {
    let harness = harness();
    assert_eq!(run_one_cycle(&harness).await, RunOutcome::Completed { cycles: 1 });

    let resp = harness
        .app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Live Sensor Readings"));
    assert!(body.contains("Battery Level"));
    assert!(body.contains("<svg"));
    assert!(!body.contains("http-equiv=\"refresh\""));
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_service_unavailable_before_first_frame() {
    let resp = harness()
        .app
        .oneshot(
            Request::builder()
                .uri("/api/snapshot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_serve_generated_snapshot_within_ranges() {
    let harness = harness();
    run_one_cycle(&harness).await;

    let resp = harness
        .app
        .oneshot(
            Request::builder()
                .uri("/api/snapshot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["sequence"], 1);
    assert_eq!(json["led_on"], true);

    let temperature = json["snapshot"]["temperature"].as_f64().unwrap();
    assert!((18.0..=28.0).contains(&temperature));
    let co2 = json["snapshot"]["co2_absorbed"].as_f64().unwrap();
    assert!((0.02..=0.06).contains(&co2));

    let energy_log = json["energy_log"].as_array().unwrap();
    assert_eq!(energy_log.len(), 12);
    assert_eq!(energy_log[0]["label"], "8:00");
    assert_eq!(energy_log[11]["label"], "19:00");
}

#[tokio::test]
async fn should_reject_config_with_interval_out_of_range() {
    let harness = harness();

    let resp = harness
        .app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/config")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"led_on":true,"auto_refresh_enabled":true,"refresh_interval_secs":11}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(resp).await;
    assert!(body.contains("between 2 and 10"));
    assert_eq!(harness.controls.borrow().refresh_interval_secs(), 5);
}

// ---------------------------------------------------------------------------
// Device Controls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_apply_controls_and_redirect_home() {
    let harness = harness();

    let resp = harness
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/controls")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("led_on=on&auto_refresh=on&interval_secs=2"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let applied = *harness.controls.borrow();
    assert!(applied.led_on());
    assert!(applied.auto_refresh_enabled());
    assert_eq!(applied.refresh_interval_secs(), 2);
}
