//! Serde codec for item creation timestamps.
//!
//! Always written as RFC 3339. Reading also accepts the short forms found
//! in hand-written seed files: `2023-10-01` and `2025/11/30 20:22`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserializer, Serializer, de};

const LEGACY_DATETIME_FORMATS: &[&str] = &["%Y/%m/%d %H:%M", "%Y-%m-%d %H:%M", "%Y/%m/%d %H:%M:%S"];
const LEGACY_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a timestamp in any accepted form. Naive values are taken as UTC.
pub fn parse(given: &str) -> Option<DateTime<Utc>> {
    let given = given.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(given) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in LEGACY_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(given, format) {
            return Some(naive.and_utc());
        }
    }

    for format in LEGACY_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(given, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(TimestampVisitor)
}

struct TimestampVisitor;

impl<'de> de::Visitor<'de> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an RFC 3339 timestamp, YYYY-MM-DD, or YYYY/MM/DD HH:MM")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse(s).ok_or_else(|| E::invalid_value(de::Unexpected::Str(s), &self))
    }
}
