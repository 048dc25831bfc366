//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for campaign start/end dates.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as a short `M/D/YYYY` calendar date.
#[must_use]
pub fn short_date(ts: Timestamp) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}
