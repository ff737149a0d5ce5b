//! Cleanup and typed decoding of structuring-call responses.
//!
//! The upstream collaborator is a language model asked to return a JSON
//! array. In practice the array arrives wrapped in code fences, prefixed with
//! prose, or as a single bare object. This module recovers the array when it
//! is recoverable and reports `InvalidPayload` when it is not.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::elements::{Question, Section};
use crate::error::{Error, Result};

lazy_static! {
    /// Opening code fence, with or without a language tag
    static ref RE_FENCE_OPEN: Regex = Regex::new(r"^`{1,3}(?:json)?").unwrap();

    /// Closing code fence
    static ref RE_FENCE_CLOSE: Regex = Regex::new(r"`{1,3}$").unwrap();

    /// First JSON array of objects embedded in surrounding prose
    static ref RE_JSON_ARRAY: Regex = Regex::new(r"\[\s*\{[\s\S]*?\}\s*\]").unwrap();
}

/// Extract the JSON array from a raw structuring response.
///
/// Tries, in order: a direct parse of the fence-stripped text (a bare object
/// is accepted and wrapped into a one-element array), then a regex scan for
/// the first embedded `[ { ... } ]` array. Anything else is an
/// [`Error::InvalidPayload`].
///
/// # Examples
///
/// ```
/// use deck_forge::ingest::clean_json_payload;
///
/// let raw = "```json\n[{\"title\": \"Ratio\", \"points\": []}]\n```";
/// let value = clean_json_payload(raw).unwrap();
/// assert!(value.is_array());
/// ```
pub fn clean_json_payload(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidPayload("empty response".to_string()));
    }

    let unfenced = strip_fences(trimmed);
    if let Ok(value) = serde_json::from_str::<Value>(&unfenced) {
        match value {
            Value::Array(_) => return Ok(value),
            Value::Object(_) => return Ok(Value::Array(vec![value])),
            _ => {}
        }
    }

    if let Some(found) = RE_JSON_ARRAY.find(&unfenced) {
        return Ok(serde_json::from_str(found.as_str())?);
    }

    Err(Error::InvalidPayload(
        "no JSON array found in response".to_string(),
    ))
}

fn strip_fences(text: &str) -> String {
    let opened = RE_FENCE_OPEN.replace(text, "");
    let closed = RE_FENCE_CLOSE.replace(opened.trim(), "");
    closed.trim().to_string()
}

/// Decode a payload of bullet-point sections.
pub fn parse_sections(raw: &str) -> Result<Vec<Section>> {
    decode_records(clean_json_payload(raw)?)
}

/// Decode a payload of question records.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    decode_records(clean_json_payload(raw)?)
}

fn decode_records<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    let Value::Array(entries) = value else {
        return Err(Error::InvalidPayload(
            "payload is not a JSON array".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            return Err(Error::InvalidPayload(format!(
                "record {} is not an object",
                index
            )));
        }
        let record = serde_json::from_value(entry).map_err(|err| {
            Error::InvalidPayload(format!("record {} does not match the schema: {}", index, err))
        })?;
        records.push(record);
    }
    Ok(records)
}
