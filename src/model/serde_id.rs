//! Serde helpers for external ids.
//!
//! Discord snowflakes exceed the safe integer range of JavaScript clients, so they are
//! written as strings. Player ids are accepted either as JSON numbers or strings.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// Accepts `123` as well as `"123"`.
pub fn deserialize_u64_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value.trim().parse::<u64>().map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "deserialize_u64_from_number_or_string")]
        userid: u64,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let from_number: Payload = serde_json::from_str(r#"{"userid": 12345}"#).unwrap();
        let from_string: Payload = serde_json::from_str(r#"{"userid": "12345"}"#).unwrap();

        assert_eq!(from_number.userid, 12345);
        assert_eq!(from_string.userid, 12345);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let result = serde_json::from_str::<Payload>(r#"{"userid": "abc"}"#);

        assert!(result.is_err());
    }
}
