//! Serde adapters for the service's naive timestamps.
//!
//! The service writes ISO-8601 date-times with either no fractional part or exactly six
//! fractional digits. chrono's default encoding trims trailing zeros, so values are written
//! back in the service's own shape.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

const WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const MICROSECONDS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Formats a timestamp the way the service does.
pub fn format(value: &NaiveDateTime) -> String {
    if value.nanosecond() == 0 {
        value.format(WHOLE_SECONDS).to_string()
    } else {
        value.format(MICROSECONDS).to_string()
    }
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

/// The same encoding for optional timestamps.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| s.parse().map_err(serde::de::Error::custom))
            .transpose()
    }
}
