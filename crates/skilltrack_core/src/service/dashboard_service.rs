//! Dashboard refresh service.
//!
//! # Invariants
//! - A non-array skills/goals payload fails the refresh; malformed elements
//!   only increase `skipped_records`.
//! - A malformed profile degrades to the default greeting.

use crate::config::TrackerConfig;
use crate::model::goal::{decode_goals, Goal};
use crate::model::profile::UserProfile;
use crate::model::record::{BatchError, Decoded};
use crate::model::skill::{decode_skills, Skill};
use crate::repo::source::{SourceError, TrackerSource};
use crate::view::{GoalsViewModel, HomeViewModel, SkillsViewModel, ViewModelAssembler};
use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("{kind} batch rejected: {source}")]
    Batch {
        kind: &'static str,
        #[source]
        source: BatchError,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Refresh facade over a data source.
pub struct DashboardService<S: TrackerSource> {
    source: S,
    assembler: ViewModelAssembler,
}

impl<S: TrackerSource> DashboardService<S> {
    pub fn new(source: S, config: TrackerConfig) -> Self {
        Self::with_assembler(source, ViewModelAssembler::new(config))
    }

    pub fn with_assembler(source: S, assembler: ViewModelAssembler) -> Self {
        Self { source, assembler }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches profile, skills and goals and assembles the dashboard.
    pub fn refresh_home(&self, now: DateTime<Utc>) -> ServiceResult<HomeViewModel> {
        let profile = self.load_profile()?;
        let skills = self.load_skills()?;
        let goals = self.load_goals()?;
        let view = self.assembler.home(profile.as_ref(), &skills, &goals, now);
        info!(
            "event=refresh_home module=service status=ok skills={} goals={} due_soon={} skipped={}",
            view.total_skills, view.total_goals, view.due_soon_count, view.skipped_records
        );
        Ok(view)
    }

    /// Re-fetches goals and assembles the Goals tab.
    pub fn refresh_goals(&self, now: DateTime<Utc>) -> ServiceResult<GoalsViewModel> {
        let goals = self.load_goals()?;
        let view = self.assembler.goals(&goals, now);
        info!(
            "event=refresh_goals module=service status=ok years={} goals={} skipped={}",
            view.years.len(),
            goals.items.len(),
            view.skipped_records
        );
        Ok(view)
    }

    /// Re-fetches skills and assembles the Skills tab.
    pub fn refresh_skills(&self) -> ServiceResult<SkillsViewModel> {
        let skills = self.load_skills()?;
        let view = self.assembler.skills(&skills);
        info!(
            "event=refresh_skills module=service status=ok categories={} skills={} skipped={}",
            view.categories.len(),
            skills.items.len(),
            view.skipped_records
        );
        Ok(view)
    }

    fn load_skills(&self) -> ServiceResult<Decoded<Skill>> {
        let payload = self.source.fetch_skills()?;
        decode_skills(&payload).map_err(|source| batch_error("skills", source))
    }

    fn load_goals(&self) -> ServiceResult<Decoded<Goal>> {
        let payload = self.source.fetch_goals()?;
        decode_goals(&payload).map_err(|source| batch_error("goals", source))
    }

    fn load_profile(&self) -> ServiceResult<Option<UserProfile>> {
        let Some(payload) = self.source.fetch_profile()? else {
            return Ok(None);
        };
        match serde_json::from_value::<UserProfile>(payload) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!("event=profile_skipped module=service status=skip reason={err}");
                Ok(None)
            }
        }
    }
}

fn batch_error(kind: &'static str, source: BatchError) -> ServiceError {
    warn!("event=batch_rejected module=service status=error kind={kind}");
    ServiceError::Batch { kind, source }
}
