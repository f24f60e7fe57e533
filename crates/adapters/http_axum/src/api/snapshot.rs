//! Latest frame endpoint.

use axum::Json;
use axum::extract::State;

use terratrack_domain::frame::DashboardFrame;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/snapshot`: the most recently presented frame.
pub async fn latest(State(state): State<AppState>) -> Result<Json<DashboardFrame>, ApiError> {
    state.frames.latest().map(Json).ok_or(ApiError::NoFrame)
}
