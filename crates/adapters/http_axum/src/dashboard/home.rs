//! Dashboard home page: live sensor readings, energy chart and device controls.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use terratrack_domain::frame::DashboardFrame;
use terratrack_domain::refresh::{MAX_INTERVAL_SECS, MIN_INTERVAL_SECS, RefreshConfig};

use super::DashboardError;
use super::chart::EnergyChart;
use super::metrics::{self, MetricCard};
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    auto_refresh: bool,
    refresh_seconds: u32,
    led_on: bool,
    min_interval: u32,
    max_interval: u32,
    has_frame: bool,
    sequence: u64,
    updated_at: String,
    columns: Vec<Vec<MetricCard>>,
    chart: Option<EnergyChart>,
}

impl HomeTemplate {
    /// Build the page model from the current controls and latest frame.
    #[must_use]
    pub fn new(config: RefreshConfig, frame: Option<&DashboardFrame>) -> Self {
        Self {
            auto_refresh: config.auto_refresh_enabled(),
            refresh_seconds: config.refresh_interval_secs(),
            led_on: config.led_on(),
            min_interval: MIN_INTERVAL_SECS,
            max_interval: MAX_INTERVAL_SECS,
            has_frame: frame.is_some(),
            sequence: frame.map_or(0, |f| f.sequence),
            updated_at: frame
                .map(|f| terratrack_domain::time::clock_label(&f.captured_at))
                .unwrap_or_default(),
            columns: frame.map(metrics::columns).unwrap_or_default(),
            chart: frame.map(|f| EnergyChart::new(&f.energy_log)),
        }
    }
}

/// `GET /` renders the terrarium dashboard.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let frame = state.frames.latest();
    let page = HomeTemplate::new(state.current_config(), frame.as_ref());
    Ok(Html(page.render()?))
}
