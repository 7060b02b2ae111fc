//! Serde helpers for the lenient request formats the API accepts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Opaque {
    Text(String),
    Number(serde_json::Number),
}

/// Accept a JSON string or number and keep it as text.
///
/// Tax ids and phone numbers were historically sent as numbers; leading
/// zeros only survive when the caller sends a string.
pub(crate) fn opaque_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Opaque::deserialize(deserializer)? {
        Opaque::Text(s) => s,
        Opaque::Number(n) => n.to_string(),
    })
}

/// Accept `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or an RFC 3339 timestamp.
pub(crate) fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| {
        de::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", raw))
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}
