//! Monetary amounts as the backend sends them: JSON numbers or numeric
//! strings.

use serde::{Deserialize, Deserializer};

/// Deserialize an amount from a number, a numeric string, or `null`.
///
/// `null` and the empty string read as zero.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Null(()) => Ok(0.0),
        Raw::Text(text) => parse_amount(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid amount: {text:?}"))
        }),
    }
}

/// Parse a numeric string, treating blank input as zero.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
