//! Skill grouping by category and level classification.
//!
//! # Invariants
//! - Categories differing only by case or surrounding whitespace share a key.
//! - Empty or blank categories map to `uncategorized`, which sorts as that
//!   literal string.
//! - Levels outside `1..=3` are reported, never defaulted.

use crate::model::skill::{LevelTier, Skill};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Sentinel key for skills without a category.
pub const UNCATEGORIZED_KEY: &str = "uncategorized";
const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("unknown skill level: {0}")]
    UnknownLevel(i64),
}

/// Normalized grouping key derived from a free-text category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Trims and case-folds `raw`; blank input becomes `uncategorized`.
    pub fn normalize(raw: &str) -> Self {
        let folded = raw.trim().to_lowercase();
        if folded.is_empty() {
            Self(UNCATEGORIZED_KEY.to_string())
        } else {
            Self(folded)
        }
    }

    /// Normalized key used for grouping, not for display.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0 == UNCATEGORIZED_KEY
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized category -> skills in input order.
pub type SkillCategories = BTreeMap<CategoryKey, Vec<Skill>>;

/// Groups skills into normalized category buckets.
pub fn group_by_category(skills: &[Skill]) -> SkillCategories {
    let mut categories = SkillCategories::new();
    for skill in skills {
        categories
            .entry(CategoryKey::normalize(&skill.category))
            .or_default()
            .push(skill.clone());
    }
    categories
}

/// Display label for a bucket.
///
/// `raw_category` is one of the original category strings in the bucket.
pub fn category_label(key: &CategoryKey, raw_category: &str) -> String {
    if key.is_uncategorized() {
        return UNCATEGORIZED_LABEL.to_string();
    }
    title_case(raw_category.trim())
}

/// Uppercases the first letter of each whitespace token, lowercases the rest.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tier for a numeric level.
pub fn level_tier(level: i64) -> Result<LevelTier, LevelError> {
    match level {
        1 => Ok(LevelTier::Beginner),
        2 => Ok(LevelTier::Intermediate),
        3 => Ok(LevelTier::Advanced),
        other => Err(LevelError::UnknownLevel(other)),
    }
}

/// Display label for a numeric level.
pub fn level_label(level: i64) -> Result<&'static str, LevelError> {
    level_tier(level).map(LevelTier::label)
}
