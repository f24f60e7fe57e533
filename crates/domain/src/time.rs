//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to every presented frame.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Wall-clock `HH:MM:SS` rendering used for "last updated" labels.
#[must_use]
pub fn clock_label(ts: &Timestamp) -> String {
    ts.format("%H:%M:%S").to_string()
}
