//! Tracker tuning knobs.
//!
//! # Invariants
//! - Defaults reproduce the app: 7-day due-soon window, 3 upcoming goals, UTC.
//! - A config that passed `validate` always yields a valid `FixedOffset`.

use crate::aggregate::goals::{DEFAULT_DUE_SOON_WINDOW_DAYS, DEFAULT_UPCOMING_LIMIT};
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_DUE_SOON_DAYS: &str = "SKILLTRACK_DUE_SOON_DAYS";
pub const ENV_UPCOMING_LIMIT: &str = "SKILLTRACK_UPCOMING_LIMIT";
pub const ENV_UTC_OFFSET_MINUTES: &str = "SKILLTRACK_UTC_OFFSET_MINUTES";

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("due_soon_window_days must be at least 1")]
    EmptyDueSoonWindow,
    #[error("upcoming_limit must be at least 1")]
    EmptyUpcomingLimit,
    #[error("utc_offset_minutes must be within +/-840, got {0}")]
    OffsetOutOfRange(i32),
    #[error("invalid value for `{name}`: `{value}`")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub due_soon_window_days: u32,
    pub upcoming_limit: usize,
    /// Offset used for every calendar key and for the quote day.
    pub utc_offset_minutes: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            due_soon_window_days: DEFAULT_DUE_SOON_WINDOW_DAYS,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            utc_offset_minutes: 0,
        }
    }
}

impl TrackerConfig {
    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `SKILLTRACK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by values from `lookup`; blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = read_var(&lookup, ENV_DUE_SOON_DAYS)? {
            config.due_soon_window_days = value;
        }
        if let Some(value) = read_var(&lookup, ENV_UPCOMING_LIMIT)? {
            config.upcoming_limit = value;
        }
        if let Some(value) = read_var(&lookup, ENV_UTC_OFFSET_MINUTES)? {
            config.utc_offset_minutes = value;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks window, limit and offset bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.due_soon_window_days == 0 {
            return Err(ConfigError::EmptyDueSoonWindow);
        }
        if self.upcoming_limit == 0 {
            return Err(ConfigError::EmptyUpcomingLimit);
        }
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::OffsetOutOfRange(self.utc_offset_minutes));
        }
        Ok(())
    }

    /// Offset for calendar keys. Out-of-range values fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn read_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv {
            name,
            value: trimmed.to_string(),
        })
}
