//! Goal record: a dated objective without completion state.

use crate::model::record::{decode_batch, BatchError, Decoded, RecordError, RecordId};
use crate::time::date_key::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed goal with a parsed target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub target_date: DateTime<Utc>,
}

/// Wire shape of one element of `GET /api/goals`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalRecord {
    id: RecordId,
    title: String,
    description: String,
    target_date: String,
}

/// Decodes a `GET /api/goals` payload.
///
/// # Errors
/// - `BatchError::NotAnArray` when the payload is not a sequence.
///
/// Elements with a missing field, blank title/description or unparseable
/// `targetDate` are returned in `rejected`.
pub fn decode_goals(payload: &Value) -> Result<Decoded<Goal>, BatchError> {
    decode_batch("goal", payload, decode_goal)
}

/// Same as [`decode_goals`] for a raw JSON string.
pub fn decode_goals_str(payload: &str) -> Result<Decoded<Goal>, BatchError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_goals(&value)
}

fn decode_goal(index: usize, element: &Value) -> Result<Goal, RecordError> {
    let record = GoalRecord::deserialize(element)
        .map_err(|err| RecordError::invalid(index, element, err.to_string()))?;

    if record.title.trim().is_empty() {
        return Err(RecordError::invalid(index, element, "title is empty"));
    }
    if record.description.trim().is_empty() {
        return Err(RecordError::invalid(index, element, "description is empty"));
    }
    let target_date = parse_timestamp(&record.target_date)
        .map_err(|err| RecordError::invalid(index, element, format!("targetDate: {err}")))?;

    Ok(Goal {
        id: record.id,
        title: record.title,
        description: record.description,
        target_date,
    })
}
