//! Refresh configuration endpoints.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use terratrack_domain::refresh::RefreshConfig;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `PUT /api/config`. Validated before it is applied.
#[derive(Debug, Deserialize)]
pub struct ConfigBody {
    pub led_on: bool,
    pub auto_refresh_enabled: bool,
    pub refresh_interval_secs: u32,
}

/// `GET /api/config`: the configuration currently in effect.
pub async fn get(State(state): State<AppState>) -> Json<RefreshConfig> {
    Json(state.current_config())
}

/// `PUT /api/config`: replace the configuration.
pub async fn replace(
    State(state): State<AppState>,
    Json(body): Json<ConfigBody>,
) -> Result<Json<RefreshConfig>, ApiError> {
    let config = RefreshConfig::builder()
        .led_on(body.led_on)
        .auto_refresh(body.auto_refresh_enabled)
        .refresh_interval_secs(body.refresh_interval_secs)
        .build()?;
    state.apply_config(config);
    Ok(Json(config))
}
