//! Serde adapter for record timestamps.
//!
//! Timestamps are written the way a browser's `Date.prototype.toISOString` writes
//! them: UTC, millisecond precision, `Z` suffix (`2024-05-01T10:00:00.000Z`).
//! Any RFC 3339 timestamp is accepted when reading.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drop sub-millisecond precision so in-memory values equal their stored form.
pub fn truncate(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(3)
}
