//! JSON REST handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod config;
#[allow(clippy::missing_errors_doc)]
pub mod snapshot;
pub mod stream;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(snapshot::latest))
        .route("/config", get(config::get).put(config::replace))
        .route("/stream", get(stream::stream))
}
