//! # terratrack-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum). This is the
//! presentation layer and the control surface of TerraTrack.
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered dashboard** (`/`): live sensor
//!   readings in three metric columns plus the energy usage chart
//! - Serve the **Device Controls** form (`POST /controls`): LED toggle,
//!   auto-refresh toggle, refresh interval
//! - Serve a **JSON API** (`/api/snapshot`, `/api/config`) and a
//!   **Server-Sent Events** stream of frames (`/api/stream`)
//! - Publish control changes to the scheduler through a `watch` channel
//!
//! ## No-JS dashboard approach
//! - The page is rendered server-side as complete HTML.
//! - Controls are a `<form>` that POSTs back and redirects (PRG pattern).
//! - While auto-refresh is on, the page carries
//!   `<meta http-equiv="refresh" content="N">` with the configured interval.
//!
//! ## Dependency rule
//! Depends on `terratrack-app` (frame bus) and `terratrack-domain` (types
//! used in request/response mapping). Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
