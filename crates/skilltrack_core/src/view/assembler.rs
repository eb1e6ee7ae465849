//! View model assembly for the Home, Goals and Skills screens.
//!
//! # Invariants
//! - Calendar keys and labels use the configured offset; wire timestamps stay UTC.
//! - A skill with an unknown level keeps its card with no tier label; a missing
//!   quote leaves the dashboard quote empty. Both are logged, never fatal.

use crate::aggregate::goals::{due_soon, group_by_year_month, upcoming};
use crate::aggregate::quote::quote_of_day;
use crate::aggregate::skills::{category_label, group_by_category, level_tier, CategoryKey};
use crate::config::TrackerConfig;
use crate::model::goal::Goal;
use crate::model::profile::{greeting_name, UserProfile};
use crate::model::quote::{QuoteEntry, QUOTES};
use crate::model::record::{Decoded, RecordId};
use crate::model::skill::{LevelTier, Skill};
use crate::time::date_key::{days_between, display_date, month_short_name, to_wire_timestamp};
use chrono::{DateTime, FixedOffset, Utc};
use log::warn;
use serde::Serialize;

/// Goal as rendered in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCard {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Millisecond UTC ISO string.
    pub target_date: String,
    /// `Wed Jan 15 2025` form.
    pub target_label: String,
    /// Whole days until the target, floored; negative when overdue.
    pub days_left: i64,
}

/// Dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeViewModel {
    pub greeting_name: String,
    pub total_skills: usize,
    pub total_goals: usize,
    pub due_soon_count: usize,
    pub upcoming: Vec<GoalCard>,
    /// `None` only when the catalog is empty.
    pub quote: Option<QuoteEntry>,
    pub skipped_records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSection {
    /// 0-based month.
    pub month: u32,
    pub label: &'static str,
    pub goals: Vec<GoalCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSection {
    pub year: i32,
    pub months: Vec<MonthSection>,
}

/// Goals tab snapshot, years and months ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsViewModel {
    pub years: Vec<YearSection>,
    pub is_empty: bool,
    pub skipped_records: usize,
}

/// Skill as rendered in category lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCard {
    pub id: RecordId,
    pub name: String,
    pub level: i64,
    /// `None` when `level` is outside `1..=3`; presentation picks a fallback.
    pub tier: Option<LevelTier>,
    pub level_label: Option<&'static str>,
    pub updated_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub key: CategoryKey,
    pub label: String,
    pub skills: Vec<SkillCard>,
}

/// Skills tab snapshot, categories sorted by normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsViewModel {
    pub categories: Vec<CategorySection>,
    pub is_empty: bool,
    pub skipped_records: usize,
}

/// Builds screen snapshots from decoded batches.
#[derive(Debug, Clone)]
pub struct ViewModelAssembler {
    config: TrackerConfig,
    catalog: &'static [QuoteEntry],
}

impl ViewModelAssembler {
    /// Assembler over the built-in quote catalog.
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_catalog(config, QUOTES)
    }

    pub fn with_catalog(config: TrackerConfig, catalog: &'static [QuoteEntry]) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Builds the dashboard snapshot.
    pub fn home(
        &self,
        profile: Option<&UserProfile>,
        skills: &Decoded<Skill>,
        goals: &Decoded<Goal>,
        now: DateTime<Utc>,
    ) -> HomeViewModel {
        let offset = self.config.offset();
        let quote = match quote_of_day(now, offset, self.catalog) {
            Ok(entry) => Some(*entry),
            Err(err) => {
                warn!("event=quote_unavailable module=view status=skip reason={err}");
                None
            }
        };

        HomeViewModel {
            greeting_name: greeting_name(profile).to_string(),
            total_skills: skills.items.len(),
            total_goals: goals.items.len(),
            due_soon_count: due_soon(&goals.items, now, self.config.due_soon_window_days),
            upcoming: upcoming(&goals.items, now, self.config.upcoming_limit)
                .iter()
                .map(|goal| goal_card(goal, now, offset))
                .collect(),
            quote,
            skipped_records: skills.skipped() + goals.skipped(),
        }
    }

    /// Builds the Goals tab snapshot grouped by year and month.
    pub fn goals(&self, goals: &Decoded<Goal>, now: DateTime<Utc>) -> GoalsViewModel {
        let offset = self.config.offset();
        let years = group_by_year_month(&goals.items, offset)
            .into_iter()
            .map(|(year, months)| YearSection {
                year,
                months: months
                    .into_iter()
                    .map(|(month, goals)| MonthSection {
                        month,
                        label: month_short_name(month).unwrap_or_default(),
                        goals: goals
                            .iter()
                            .map(|goal| goal_card(goal, now, offset))
                            .collect(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        GoalsViewModel {
            is_empty: years.is_empty(),
            years,
            skipped_records: goals.skipped(),
        }
    }

    /// Builds the Skills tab snapshot grouped by category.
    pub fn skills(&self, skills: &Decoded<Skill>) -> SkillsViewModel {
        let offset = self.config.offset();
        let categories = group_by_category(&skills.items)
            .into_iter()
            .map(|(key, bucket)| {
                let raw_category = bucket
                    .first()
                    .map(|skill| skill.category.as_str())
                    .unwrap_or_default();
                CategorySection {
                    label: category_label(&key, raw_category),
                    key,
                    skills: bucket
                        .iter()
                        .map(|skill| skill_card(skill, offset))
                        .collect(),
                }
            })
            .collect::<Vec<_>>();

        SkillsViewModel {
            is_empty: categories.is_empty(),
            categories,
            skipped_records: skills.skipped(),
        }
    }
}

fn goal_card(goal: &Goal, now: DateTime<Utc>, offset: FixedOffset) -> GoalCard {
    GoalCard {
        id: goal.id.clone(),
        title: goal.title.clone(),
        description: goal.description.clone(),
        target_date: to_wire_timestamp(goal.target_date),
        target_label: display_date(goal.target_date, offset),
        days_left: days_between(now, goal.target_date),
    }
}

fn skill_card(skill: &Skill, offset: FixedOffset) -> SkillCard {
    let tier = match level_tier(skill.level) {
        Ok(tier) => Some(tier),
        Err(err) => {
            warn!(
                "event=unknown_level module=view status=skip skill_id={} reason={err}",
                skill.id
            );
            None
        }
    };

    SkillCard {
        id: skill.id.clone(),
        name: skill.name.clone(),
        level: skill.level,
        tier,
        level_label: tier.map(LevelTier::label),
        updated_label: skill
            .last_updated
            .map(|updated| display_date(updated, offset)),
    }
}
