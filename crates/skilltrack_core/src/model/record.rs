//! Shared record identity and batch decoding envelope.
//!
//! # Invariants
//! - One malformed element never fails the whole batch.
//! - A payload that is not a JSON array is a batch-level error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Opaque record identifier as delivered by the API (string or integer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A single element of a batch that could not be turned into a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid record at index {index} (id={}): {reason}", .id.as_deref().unwrap_or("?"))]
    InvalidRecord {
        index: usize,
        id: Option<String>,
        reason: String,
    },
}

impl RecordError {
    pub(crate) fn invalid(index: usize, element: &Value, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            id: raw_id(element),
            reason: reason.into(),
        }
    }

    /// Position of the rejected element in its batch.
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidRecord { index, .. } => *index,
        }
    }
}

/// Batch-level precondition failure.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Typed records decoded from a batch plus the elements that were rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub items: Vec<T>,
    pub rejected: Vec<RecordError>,
}

impl<T> Decoded<T> {
    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }
}

/// Decodes every element of `payload` with `decode_one`, collecting failures.
pub(crate) fn decode_batch<T>(
    kind: &'static str,
    payload: &Value,
    decode_one: impl Fn(usize, &Value) -> Result<T, RecordError>,
) -> Result<Decoded<T>, BatchError> {
    let elements = payload.as_array().ok_or(BatchError::NotAnArray {
        found: json_kind(payload),
    })?;

    let mut items = Vec::with_capacity(elements.len());
    let mut rejected = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        match decode_one(index, element) {
            Ok(item) => items.push(item),
            Err(err) => {
                log::warn!(
                    "event=record_skipped module=model status=skip kind={kind} index={index}"
                );
                rejected.push(err);
            }
        }
    }

    Ok(Decoded { items, rejected })
}

fn raw_id(element: &Value) -> Option<String> {
    match element.get("id")? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
