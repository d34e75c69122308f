use chrono::{DateTime, Utc};

/// Parse a constant fixture timestamp; falls back to the epoch.
pub(crate) fn seed_time(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_default()
}
