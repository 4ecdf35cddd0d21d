//! Serde helpers for form payloads.
//!
//! Form inputs arrive with numbers encoded as strings and empty strings
//! standing in for "no value"; these deserializers normalize both at the
//! payload boundary.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Accept a float or its string encoding.
pub(crate) fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(Error::custom),
    }
}

/// Accept an unsigned integer or its string encoding.
pub(crate) fn coerce_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => {
            if n.fract() != 0.0 || n < 0.0 || n > u32::MAX as f64 {
                return Err(Error::custom(format!("expected a whole number, got {n}")));
            }
            Ok(n as u32)
        }
        NumberOrString::String(s) => s.trim().parse().map_err(Error::custom),
    }
}

/// Treat `""`, `"null"`, and `"undefined"` as an absent value.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s))
            if s.is_empty() || s == "null" || s == "undefined" =>
        {
            Ok(None)
        }
        Some(other) => T::deserialize(other).map(Some).map_err(Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "coerce_f64")]
        weight: f64,
        #[serde(deserialize_with = "coerce_u32")]
        count: u32,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        note: Option<String>,
    }

    #[test]
    fn test_numbers_pass_through() {
        let probe: Probe =
            serde_json::from_value(serde_json::json!({"weight": 1.5, "count": 3})).unwrap();
        assert_eq!(probe.weight, 1.5);
        assert_eq!(probe.count, 3);
        assert_eq!(probe.note, None);
    }

    #[test]
    fn test_string_encoded_numbers_coerce() {
        let probe: Probe =
            serde_json::from_value(serde_json::json!({"weight": "2.25", "count": "12"})).unwrap();
        assert_eq!(probe.weight, 2.25);
        assert_eq!(probe.count, 12);
    }

    #[test]
    fn test_fractional_count_rejected() {
        let result: Result<Probe, _> =
            serde_json::from_value(serde_json::json!({"weight": 1.0, "count": 2.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let probe: Probe = serde_json::from_value(
            serde_json::json!({"weight": 1.0, "count": 1, "note": ""}),
        )
        .unwrap();
        assert_eq!(probe.note, None);

        let probe: Probe = serde_json::from_value(
            serde_json::json!({"weight": 1.0, "count": 1, "note": "undefined"}),
        )
        .unwrap();
        assert_eq!(probe.note, None);

        let probe: Probe = serde_json::from_value(
            serde_json::json!({"weight": 1.0, "count": 1, "note": "kept"}),
        )
        .unwrap();
        assert_eq!(probe.note.as_deref(), Some("kept"));
    }
}
