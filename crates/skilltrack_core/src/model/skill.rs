//! Skill record and proficiency tiers.

use crate::model::record::{decode_batch, BatchError, Decoded, RecordError, RecordId};
use crate::time::date_key::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Typed skill.
///
/// `level` is kept as delivered; values outside `1..=3` are surfaced by
/// `level_label`/`level_tier` instead of being rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    /// Free text, may be empty.
    pub category: String,
    pub level: i64,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Ordinal proficiency classification used for tier/color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl LevelTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Numeric level sent to the API.
    pub fn level(self) -> i64 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }
}

/// Wire shape of one element of `GET /api/skills`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillRecord {
    id: RecordId,
    name: String,
    #[serde(default)]
    category: Option<String>,
    level: Number,
    #[serde(default)]
    last_updated: Option<String>,
}

/// Decodes a `GET /api/skills` payload.
///
/// # Errors
/// - `BatchError::NotAnArray` when the payload is not a sequence.
///
/// Elements with a blank name, a fractional or non-numeric level or an
/// unparseable `lastUpdated` are returned in `rejected`. Integral floats
/// such as `2.0` are read as integer levels.
pub fn decode_skills(payload: &Value) -> Result<Decoded<Skill>, BatchError> {
    decode_batch("skill", payload, decode_skill)
}

/// Same as [`decode_skills`] for a raw JSON string.
pub fn decode_skills_str(payload: &str) -> Result<Decoded<Skill>, BatchError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_skills(&value)
}

fn decode_skill(index: usize, element: &Value) -> Result<Skill, RecordError> {
    let record = SkillRecord::deserialize(element)
        .map_err(|err| RecordError::invalid(index, element, err.to_string()))?;

    if record.name.trim().is_empty() {
        return Err(RecordError::invalid(index, element, "name is empty"));
    }
    let level = integral_level(&record.level).ok_or_else(|| {
        RecordError::invalid(index, element, format!("level is not an integer: {}", record.level))
    })?;
    let last_updated = match record.last_updated.as_deref() {
        Some(raw) => Some(
            parse_timestamp(raw)
                .map_err(|err| RecordError::invalid(index, element, format!("lastUpdated: {err}")))?,
        ),
        None => None,
    };

    Ok(Skill {
        id: record.id,
        name: record.name,
        category: record.category.unwrap_or_default(),
        level,
        last_updated,
    })
}

fn integral_level(raw: &Number) -> Option<i64> {
    if let Some(level) = raw.as_i64() {
        return Some(level);
    }
    let value = raw.as_f64()?;
    // i64::MAX is not exactly representable; 2^63 is the first out-of-range float.
    let in_range = value >= -9_223_372_036_854_775_808.0 && value < 9_223_372_036_854_775_808.0;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}
