//! Lenient field deserializers for provider payloads.
//!
//! The back-office API formats values for display: amounts arrive as
//! numbers or as strings with thousands separators, text fields may be
//! null or missing entirely. A malformed field degrades to a neutral
//! value and the record is kept.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Accept a number, a numeric string, or null; anything else becomes zero.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Accept a string, a number, or null; null becomes the empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    })
}

fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => {
            Decimal::from_str(&number.to_string()).unwrap_or(Decimal::ZERO)
        }
        Value::String(text) => {
            let cleaned = text.trim().replace(',', "");
            Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}
