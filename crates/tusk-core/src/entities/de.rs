use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Accepts either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which
/// some servers send for day-granularity fields. Dates map to midnight UTC.
pub fn optional_date_or_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(|date| Some(date.and_time(chrono::NaiveTime::MIN).and_utc()))
        .map_err(serde::de::Error::custom)
}

/// Treats an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
