//! Tracker data sources.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SKILLS_FILE_NAME: &str = "skills.json";
pub const GOALS_FILE_NAME: &str = "goals.json";
pub const PROFILE_FILE_NAME: &str = "profile.json";

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse `{name}` payload: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Pull interface over the `/api/skills`, `/api/goals` and `/api/user/me`
/// payloads.
pub trait TrackerSource {
    fn fetch_skills(&self) -> SourceResult<Value>;
    fn fetch_goals(&self) -> SourceResult<Value>;
    /// `Ok(None)` when no profile is available.
    fn fetch_profile(&self) -> SourceResult<Option<Value>>;
}

impl<S: TrackerSource + ?Sized> TrackerSource for &S {
    fn fetch_skills(&self) -> SourceResult<Value> {
        (**self).fetch_skills()
    }

    fn fetch_goals(&self) -> SourceResult<Value> {
        (**self).fetch_goals()
    }

    fn fetch_profile(&self) -> SourceResult<Option<Value>> {
        (**self).fetch_profile()
    }
}

/// In-memory payload snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSnapshotSource {
    skills: Value,
    goals: Value,
    profile: Option<Value>,
}

impl JsonSnapshotSource {
    pub fn new(skills: Value, goals: Value, profile: Option<Value>) -> Self {
        Self {
            skills,
            goals,
            profile,
        }
    }

    /// Builds a snapshot from raw JSON texts; a blank profile means none.
    pub fn from_strs(skills: &str, goals: &str, profile: Option<&str>) -> SourceResult<Self> {
        let profile = match profile.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(parse_payload(PROFILE_FILE_NAME, raw)?),
            None => None,
        };
        Ok(Self::new(
            parse_payload(SKILLS_FILE_NAME, skills)?,
            parse_payload(GOALS_FILE_NAME, goals)?,
            profile,
        ))
    }
}

impl TrackerSource for JsonSnapshotSource {
    fn fetch_skills(&self) -> SourceResult<Value> {
        Ok(self.skills.clone())
    }

    fn fetch_goals(&self) -> SourceResult<Value> {
        Ok(self.goals.clone())
    }

    fn fetch_profile(&self) -> SourceResult<Option<Value>> {
        Ok(self.profile.clone())
    }
}

/// Directory holding `skills.json`, `goals.json` and optional `profile.json`.
///
/// Files are re-read on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, name: &'static str) -> SourceResult<Value> {
        let path = self.dir.join(name);
        let raw = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        parse_payload(name, &raw)
    }
}

impl TrackerSource for JsonDirSource {
    fn fetch_skills(&self) -> SourceResult<Value> {
        self.read(SKILLS_FILE_NAME)
    }

    fn fetch_goals(&self) -> SourceResult<Value> {
        self.read(GOALS_FILE_NAME)
    }

    fn fetch_profile(&self) -> SourceResult<Option<Value>> {
        if !self.dir.join(PROFILE_FILE_NAME).exists() {
            return Ok(None);
        }
        self.read(PROFILE_FILE_NAME).map(Some)
    }
}

fn parse_payload(name: &'static str, raw: &str) -> SourceResult<Value> {
    serde_json::from_str(raw).map_err(|source| SourceError::Json { name, source })
}
