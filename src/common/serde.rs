//! Lenient deserializers for the numeric fields of gender records.
//!
//! The service has historically sent `probability` both as a JSON number and
//! as a decimal string, and omits or nulls the numeric fields for names it
//! knows nothing about. None of that should fail a whole batch.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an `f64` from a number or a decimal string.
///
/// Anything that does not parse, including `null`, becomes `0.0`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()).unwrap_or_default())
}

/// Deserializes a sample count from a number or a numeric string.
///
/// Negative, fractional or unparsable values become `0`.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(value.unwrap_or_default())
}
