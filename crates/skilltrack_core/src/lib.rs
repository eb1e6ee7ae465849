//! Core logic for SkillTrack.
//! Turns raw skill/goal payloads into grouped, dated screen snapshots.

pub mod aggregate;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod time;
pub mod view;

pub use aggregate::goals::{due_soon, group_by_year_month, upcoming, GoalCalendar};
pub use aggregate::quote::{quote_for_day_key, quote_index, quote_of_day, QuoteError};
pub use aggregate::skills::{
    category_label, group_by_category, level_label, level_tier, CategoryKey, LevelError,
    SkillCategories, UNCATEGORIZED_KEY,
};
pub use config::{ConfigError, TrackerConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::draft::{
    DraftError, GoalDraft, GoalPayload, ProfileDraft, ProfilePayload, SkillDraft, SkillPayload,
};
pub use model::goal::{decode_goals, decode_goals_str, Goal};
pub use model::profile::UserProfile;
pub use model::quote::{QuoteEntry, QUOTES};
pub use model::record::{BatchError, Decoded, RecordError, RecordId};
pub use model::skill::{decode_skills, decode_skills_str, LevelTier, Skill};
pub use repo::source::{JsonDirSource, JsonSnapshotSource, SourceError, TrackerSource};
pub use service::dashboard_service::{DashboardService, ServiceError, ServiceResult};
pub use service::refresh::{RefreshGate, RefreshTicket};
pub use time::date_key::{date_key, days_between, parse_timestamp, DateKey, DateKeyError};
pub use view::{GoalsViewModel, HomeViewModel, SkillsViewModel, ViewModelAssembler};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
