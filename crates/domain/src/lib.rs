//! # terratrack-domain
//!
//! Pure domain model for the TerraTrack smart-terrarium dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Describe the simulated **sensors** (range, precision, unit of each reading)
//! - Define the **SensorSnapshot** (one immutable set of readings) and its
//!   derived display values
//! - Define the **EnergyLogSeries** (12 hourly readings for the usage chart)
//! - Define the **RefreshConfig** (control-surface settings) and its invariants
//! - Define the **DashboardFrame** (everything one refresh cycle presents)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Randomness, clocks and presentation are expressed as traits in the `app`
//! crate (ports).

pub mod error;
pub mod time;

pub mod energy_log;
pub mod frame;
pub mod refresh;
pub mod sensor;
pub mod snapshot;
