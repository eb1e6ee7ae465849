//! Form drafts for add/update screens and their API payloads.
//!
//! # Invariants
//! - A payload only exists for a draft that passed validation.
//! - Payload field names match the REST API (`camelCase`).

use crate::model::skill::LevelTier;
use crate::time::date_key::to_wire_timestamp;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Draft rejection; messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Name and Category are required.")]
    MissingSkillFields,
    #[error("Title and Description are required.")]
    MissingGoalFields,
    #[error("Name and Email cannot be empty")]
    MissingProfileFields,
}

/// Add/update skill form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub level: LevelTier,
}

/// Body of `POST /api/skills` and `PUT /api/skills/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillPayload {
    pub name: String,
    pub category: String,
    pub level: i64,
}

impl SkillDraft {
    /// Requires a name and category and builds the request body.
    pub fn validate(&self) -> Result<SkillPayload, DraftError> {
        let name = self.name.trim();
        let category = self.category.trim();
        if name.is_empty() || category.is_empty() {
            return Err(DraftError::MissingSkillFields);
        }
        Ok(SkillPayload {
            name: name.to_string(),
            category: category.to_string(),
            level: self.level.level(),
        })
    }
}

/// Add/update goal form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub target_date: DateTime<Utc>,
}

/// Body of `POST /api/goals` and `PUT /api/goals/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPayload {
    pub title: String,
    pub description: String,
    pub target_date: String,
}

impl GoalDraft {
    /// Requires a title and description and builds the request body.
    pub fn validate(&self) -> Result<GoalPayload, DraftError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(DraftError::MissingGoalFields);
        }
        Ok(GoalPayload {
            title: title.to_string(),
            description: description.to_string(),
            target_date: to_wire_timestamp(self.target_date),
        })
    }
}

/// Profile edit form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub user_name: String,
    pub email: String,
}

/// Body of `PUT /api/user/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub user_name: String,
    pub email: String,
}

impl ProfileDraft {
    /// Requires a name and email and builds the request body.
    pub fn validate(&self) -> Result<ProfilePayload, DraftError> {
        let user_name = self.user_name.trim();
        let email = self.email.trim();
        if user_name.is_empty() || email.is_empty() {
            return Err(DraftError::MissingProfileFields);
        }
        Ok(ProfilePayload {
            user_name: user_name.to_string(),
            email: email.to_string(),
        })
    }
}
