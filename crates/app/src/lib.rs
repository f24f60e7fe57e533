//! # terratrack-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `RandomSource`: unit draws feeding the simulated sensors
//!   - `Presenter`: consumes each generated frame (dashboard, stream, …)
//!   - `Clock`: the suspension between refresh cycles
//! - Provide the **TelemetryGenerator** (snapshot + energy log) and the
//!   **RefreshScheduler** (generate → present → wait cadence)
//! - Provide **in-process infrastructure** that doesn't need IO (frame bus,
//!   shutdown signalling)
//!
//! ## Dependency rule
//! Depends on `terratrack-domain` only (plus `tokio::sync`/`tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod frame_bus;
pub mod ports;
pub mod scheduler;
pub mod shutdown;
pub mod telemetry;
