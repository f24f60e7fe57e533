//! Server-side rendered HTML dashboard (no JavaScript).

pub mod chart;
#[allow(clippy::missing_errors_doc)]
pub mod controls;
pub mod home;
pub mod metrics;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use terratrack_domain::error::ConfigurationError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/controls", post(controls::update))
}

/// Errors rendered as a minimal HTML page.
#[derive(Debug)]
pub enum DashboardError {
    Configuration(ConfigurationError),
    Render(askama::Error),
}

impl From<ConfigurationError> for DashboardError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ErrorTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                (self.status, self.message).into_response()
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Configuration(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            Self::Render(err) => {
                tracing::error!(error = %err, "failed to render dashboard");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        ErrorTemplate { status, message }.into_response()
    }
}
