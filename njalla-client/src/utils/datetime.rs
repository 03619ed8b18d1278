//! Date/time serialization helpers
//!
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp (seconds or milliseconds) -> `DateTime<Utc>`
//!
//! Use with `#[serde(with = "crate::utils::datetime")]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
}

/// Deserialize an RFC3339 string or a Unix timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        String(String),
        I64(i64),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::String(s) => parse_rfc3339(&s)
            .ok_or_else(|| Error::custom(format!("Invalid RFC3339 timestamp: {s}"))),
        Timestamp::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a Unix timestamp, telling seconds from milliseconds by magnitude.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    fn expected() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 2, 20, 19, 38, 48).unwrap()
    }

    #[test]
    fn parses_rfc3339() {
        let h: Holder = serde_json::from_str(r#"{"at":"2021-02-20T19:38:48Z"}"#).unwrap();
        assert_eq!(h.at, expected());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let h: Holder = serde_json::from_str(r#"{"at":"2021-02-20T20:38:48+01:00"}"#).unwrap();
        assert_eq!(h.at, expected());
    }

    #[test]
    fn parses_unix_seconds_and_millis() {
        let secs = expected().timestamp();
        let h: Holder = serde_json::from_str(&format!(r#"{{"at":{secs}}}"#)).unwrap();
        assert_eq!(h.at, expected());

        let millis = expected().timestamp_millis();
        let h: Holder = serde_json::from_str(&format!(r#"{{"at":{millis}}}"#)).unwrap();
        assert_eq!(h.at, expected());
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Holder>(r#"{"at":"next tuesday"}"#).is_err());
    }

    #[test]
    fn serializes_as_zulu() {
        let json = serde_json::to_string(&Holder { at: expected() }).unwrap();
        assert_eq!(json, r#"{"at":"2021-02-20T19:38:48Z"}"#);
    }
}
