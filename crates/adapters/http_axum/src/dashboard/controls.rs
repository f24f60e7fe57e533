//! Device Controls form handler (POST-Redirect-GET).

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use terratrack_domain::refresh::RefreshConfig;

use super::DashboardError;
use crate::state::AppState;

/// Submitted Device Controls form.
///
/// HTML checkboxes are only sent when checked, so their presence is the value.
#[derive(Debug, Deserialize)]
pub struct ControlsForm {
    #[serde(default)]
    pub led_on: Option<String>,
    #[serde(default)]
    pub auto_refresh: Option<String>,
    pub interval_secs: u32,
}

impl ControlsForm {
    fn into_config(self) -> Result<RefreshConfig, DashboardError> {
        let config = RefreshConfig::builder()
            .led_on(self.led_on.is_some())
            .auto_refresh(self.auto_refresh.is_some())
            .refresh_interval_secs(self.interval_secs)
            .build()?;
        Ok(config)
    }
}

/// `POST /controls` applies the submitted controls and redirects back to `/`.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<ControlsForm>,
) -> Result<Redirect, DashboardError> {
    let config = form.into_config()?;
    state.apply_config(config);
    Ok(Redirect::to("/"))
}
