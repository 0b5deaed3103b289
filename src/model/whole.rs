//! Serde helpers for counts, prices and identifiers sent as JSON values.

use crate::pipeline::checks::{canonical_id, positive_whole};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any whole number above zero, including `5.0`.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    positive_whole(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a whole number above zero, got {value}")))
}

/// An optional identifier given as a string or a number. `null` reads as absent.
pub fn deserialize_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => canonical_id(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a text or numeric id, got {value}"))),
    }
}
