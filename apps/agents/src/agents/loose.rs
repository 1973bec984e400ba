//! Scalars the model fills in inconsistently.
//!
//! A field the schema describes as `"number"` comes back as `3`, `"3"`, `"85%"`
//! or `"about 3"` depending on the day. `LooseNumber` keeps the raw value for
//! display and persistence and exposes the integer reading separately.
//!
//! Text and list fields come back as `null` about as often as they go missing;
//! `null_as_default` reads both the same way.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LooseNumber {
    raw: Value,
}

impl LooseNumber {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Non-negative integer reading: `3`, `3.0`, `"3"`, `"85%"`. Anything else is `None`.
    pub fn value(&self) -> Option<u32> {
        match &self.raw {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
                .and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => {
                let digits = s.trim().replace('%', "");
                if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                    digits.parse().ok()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn value_or_zero(&self) -> u32 {
        self.value().unwrap_or(0)
    }

    pub fn is_missing(&self) -> bool {
        self.raw.is_null()
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Value::Null => write!(f, "?"),
            Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

impl From<u32> for LooseNumber {
    fn from(value: u32) -> Self {
        Self::new(Value::from(value))
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        Self::new(Value::from(value))
    }
}

impl<'de> Deserialize<'de> for LooseNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::new)
    }
}

impl Serialize for LooseNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

/// `deserialize_with` helper: an explicit `null` reads as `T::default()`.
/// Pair it with `#[serde(default)]` so an absent field does too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reads_plain_numbers_and_numeric_strings() {
        assert_eq!(LooseNumber::new(json!(3)).value(), Some(3));
        assert_eq!(LooseNumber::new(json!(4.0)).value(), Some(4));
        assert_eq!(LooseNumber::new(json!("7")).value(), Some(7));
        assert_eq!(LooseNumber::new(json!(" 85% ")).value(), Some(85));
    }

    #[test]
    fn test_rejects_fuzzy_values() {
        assert_eq!(LooseNumber::new(json!("about 3")).value(), None);
        assert_eq!(LooseNumber::new(json!("72.5")).value(), None);
        assert_eq!(LooseNumber::new(json!(-2)).value(), None);
        assert_eq!(LooseNumber::new(json!(null)).value(), None);
        assert_eq!(LooseNumber::new(json!("")).value_or_zero(), 0);
    }

    #[test]
    fn test_display_keeps_raw_text() {
        assert_eq!(LooseNumber::new(json!("85")).to_string(), "85");
        assert_eq!(LooseNumber::new(json!(3)).to_string(), "3");
        assert_eq!(LooseNumber::default().to_string(), "?");
    }

    #[test]
    fn test_serializes_back_to_original_value() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            #[serde(default)]
            n: LooseNumber,
        }
        let holder: Holder = serde_json::from_str(r#"{"n": "3"}"#).unwrap();
        assert_eq!(serde_json::to_value(&holder).unwrap(), json!({"n": "3"}));

        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(missing.n.is_missing());
    }

    #[test]
    fn test_null_as_default_for_text_and_lists() {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct Holder {
            #[serde(deserialize_with = "null_as_default")]
            text: String,
            #[serde(deserialize_with = "null_as_default")]
            items: Vec<String>,
        }
        let nulls: Holder = serde_json::from_str(r#"{"text": null, "items": null}"#).unwrap();
        assert_eq!(nulls.text, "");
        assert!(nulls.items.is_empty());

        let absent: Holder = serde_json::from_str("{}").unwrap();
        assert!(absent.text.is_empty());

        let present: Holder = serde_json::from_str(r#"{"text": "a", "items": ["b"]}"#).unwrap();
        assert_eq!(present.text, "a");
        assert_eq!(present.items, vec!["b"]);
    }
}
