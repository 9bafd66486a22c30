//! Tolerant field decoders for stored day files
//!
//! Files may have been written by older versions or edited by hand. A field
//! holding the wrong JSON type decodes to something usable instead of
//! failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: numbers and booleans keep their JSON spelling, anything else
/// that is not a string becomes empty
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Numeric field: numeric strings are parsed, anything else is zero
pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().replace(',', ".").parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct StoredFields {
        #[serde(default, deserialize_with = "text")]
        label: String,
        #[serde(default, deserialize_with = "number")]
        amount: f64,
    }

    fn decode(json: &str) -> StoredFields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_accepts_other_scalars() {
        assert_eq!(decode(r#"{"label": "12,50"}"#).label, "12,50");
        assert_eq!(decode(r#"{"label": 100}"#).label, "100");
        assert_eq!(decode(r#"{"label": 12.5}"#).label, "12.5");
        assert_eq!(decode(r#"{"label": null}"#).label, "");
        assert_eq!(decode(r#"{"label": [1]}"#).label, "");
        assert_eq!(decode("{}").label, "");
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        assert_eq!(decode(r#"{"amount": 3}"#).amount, 3.0);
        assert_eq!(decode(r#"{"amount": "2,5"}"#).amount, 2.5);
        assert_eq!(decode(r#"{"amount": "many"}"#).amount, 0.0);
        assert_eq!(decode(r#"{"amount": true}"#).amount, 0.0);
    }
}
