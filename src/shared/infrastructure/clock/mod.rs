pub mod system;

use chrono::{DateTime, SecondsFormat, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Day granularity, e.g. `2026-10-19`. Used for `insertedAt`.
pub fn to_date_string(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Full UTC timestamp with milliseconds, e.g. `2026-10-19T08:30:00.000Z`.
pub fn to_timestamp_string(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
