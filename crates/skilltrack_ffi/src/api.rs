//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen snapshots and draft validation to Dart via FRB.
//! - Accept raw API payload strings so the shell keeps owning HTTP and auth.
//! - Hand out per-screen refresh generations so only the newest refresh is shown.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Snapshots are returned as JSON text inside a stable envelope.

use chrono::{DateTime, Utc};
use log::warn;
use skilltrack_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, level_tier,
    parse_timestamp, ping as ping_inner, quote_of_day, DashboardService, GoalDraft,
    JsonSnapshotSource, ProfileDraft, RefreshGate, ServiceResult, SkillDraft, TrackerConfig,
    QUOTES,
};
use serde::Serialize;
use std::sync::OnceLock;

static TRACKER_CONFIG: OnceLock<TrackerConfig> = OnceLock::new();
static HOME_REFRESH: RefreshGate = RefreshGate::new();
static GOALS_REFRESH: RefreshGate = RefreshGate::new();
static SKILLS_REFRESH: RefreshGate = RefreshGate::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Snapshot envelope returned by the screen view calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResponse {
    /// Whether the snapshot was assembled.
    pub ok: bool,
    /// Serialized view model when `ok`.
    pub json: Option<String>,
    /// Records dropped because they were malformed.
    pub skipped_records: u32,
    /// Human-readable diagnostics.
    pub message: String,
}

impl ViewResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            json: None,
            skipped_records: 0,
            message: message.into(),
        }
    }
}

/// Generic envelope for draft validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResponse {
    pub ok: bool,
    /// Request body to send when `ok`.
    pub payload_json: Option<String>,
    /// User-facing validation message on failure.
    pub message: String,
}

/// Screen whose refreshes are ordered by one gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshScreen {
    Home,
    Goals,
    Skills,
}

impl RefreshScreen {
    fn gate(self) -> &'static RefreshGate {
        match self {
            Self::Home => &HOME_REFRESH,
            Self::Goals => &GOALS_REFRESH,
            Self::Skills => &SKILLS_REFRESH,
        }
    }
}

/// Quote shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteItem {
    pub text: String,
    pub author: String,
}

/// Dashboard snapshot from `/api/skills`, `/api/goals` and `/api/user/me`
/// bodies.
///
/// # FFI contract
/// - `now_iso = None` uses the current time.
/// - Blank `profile_json` means "no profile".
#[flutter_rust_bridge::frb(sync)]
pub fn home_view(
    skills_json: String,
    goals_json: String,
    profile_json: Option<String>,
    now_iso: Option<String>,
) -> ViewResponse {
    with_service(&skills_json, &goals_json, profile_json.as_deref(), now_iso, |service, now| {
        let view = service.refresh_home(now)?;
        Ok((view.skipped_records, serialize(&view)))
    })
}

/// Goals tab snapshot from a `/api/goals` body.
#[flutter_rust_bridge::frb(sync)]
pub fn goals_view(goals_json: String, now_iso: Option<String>) -> ViewResponse {
    with_service("[]", &goals_json, None, now_iso, |service, now| {
        let view = service.refresh_goals(now)?;
        Ok((view.skipped_records, serialize(&view)))
    })
}

/// Skills tab snapshot from a `/api/skills` body.
#[flutter_rust_bridge::frb(sync)]
pub fn skills_view(skills_json: String) -> ViewResponse {
    with_service(&skills_json, "[]", None, None, |service, _| {
        let view = service.refresh_skills()?;
        Ok((view.skipped_records, serialize(&view)))
    })
}

/// Starts a refresh of `screen` and returns its generation.
///
/// # FFI contract
/// - Call before fetching; every later call supersedes this generation.
/// - Pass the generation to [`is_current_refresh`] once the view is built.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_refresh(screen: RefreshScreen) -> u64 {
    screen.gate().begin().generation()
}

/// Whether `generation` is still the newest refresh of `screen`.
///
/// Results of superseded refreshes must be dropped by the caller.
#[flutter_rust_bridge::frb(sync)]
pub fn is_current_refresh(screen: RefreshScreen, generation: u64) -> bool {
    screen.gate().is_current_generation(generation)
}

/// Quote for the day containing `now_iso` (or today).
#[flutter_rust_bridge::frb(sync)]
pub fn quote_of_the_day(now_iso: Option<String>) -> Option<QuoteItem> {
    let now = resolve_now(now_iso).ok()?;
    let entry = quote_of_day(now, tracker_config().offset(), QUOTES).ok()?;
    Some(QuoteItem {
        text: entry.text.to_string(),
        author: entry.author.to_string(),
    })
}

/// Label for a numeric skill level, `None` when the level is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn skill_level_label(level: i64) -> Option<String> {
    level_tier(level).ok().map(|tier| tier.label().to_string())
}

/// Validates the add/update skill form.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_skill_draft(name: String, category: String, level: i64) -> DraftResponse {
    let level = match level_tier(level) {
        Ok(level) => level,
        Err(err) => return draft_failure(err),
    };
    draft_response(SkillDraft { name, category, level }.validate())
}

/// Validates the add/update goal form.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_goal_draft(
    title: String,
    description: String,
    target_date_iso: String,
) -> DraftResponse {
    let target_date = match parse_timestamp(&target_date_iso) {
        Ok(target_date) => target_date,
        Err(err) => return draft_failure(err),
    };
    draft_response(
        GoalDraft {
            title,
            description,
            target_date,
        }
        .validate(),
    )
}

/// Validates the profile edit form.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_profile_draft(user_name: String, email: String) -> DraftResponse {
    draft_response(ProfileDraft { user_name, email }.validate())
}

fn tracker_config() -> &'static TrackerConfig {
    TRACKER_CONFIG.get_or_init(|| {
        TrackerConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_fallback module=ffi status=error reason={err}");
            TrackerConfig::default()
        })
    })
}

fn resolve_now(now_iso: Option<String>) -> Result<DateTime<Utc>, String> {
    match now_iso.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_timestamp(raw).map_err(|err| err.to_string()),
        None => Ok(Utc::now()),
    }
}

fn with_service(
    skills_json: &str,
    goals_json: &str,
    profile_json: Option<&str>,
    now_iso: Option<String>,
    f: impl FnOnce(
        &DashboardService<JsonSnapshotSource>,
        DateTime<Utc>,
    ) -> ServiceResult<(usize, Result<String, String>)>,
) -> ViewResponse {
    let now = match resolve_now(now_iso) {
        Ok(now) => now,
        Err(err) => return ViewResponse::failure(format!("invalid now: {err}")),
    };
    let source = match JsonSnapshotSource::from_strs(skills_json, goals_json, profile_json) {
        Ok(source) => source,
        Err(err) => return ViewResponse::failure(err.to_string()),
    };
    let service = DashboardService::new(source, tracker_config().clone());

    match f(&service, now) {
        Ok((skipped, Ok(json))) => ViewResponse {
            ok: true,
            json: Some(json),
            skipped_records: u32::try_from(skipped).unwrap_or(u32::MAX),
            message: if skipped == 0 {
                "OK".to_string()
            } else {
                format!("Skipped {skipped} malformed record(s).")
            },
        },
        Ok((_, Err(err))) => ViewResponse::failure(err),
        Err(err) => ViewResponse::failure(err.to_string()),
    }
}

fn serialize(value: &impl Serialize) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("serialize failed: {err}"))
}

fn draft_response<P: Serialize, E: std::fmt::Display>(result: Result<P, E>) -> DraftResponse {
    match result.map_err(|err| err.to_string()).and_then(|payload| serialize(&payload)) {
        Ok(payload_json) => DraftResponse {
            ok: true,
            payload_json: Some(payload_json),
            message: String::new(),
        },
        Err(message) => DraftResponse {
            ok: false,
            payload_json: None,
            message,
        },
    }
}

fn draft_failure(err: impl std::fmt::Display) -> DraftResponse {
    DraftResponse {
        ok: false,
        payload_json: None,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        begin_refresh, core_version, goals_view, home_view, init_logging, is_current_refresh,
        ping, quote_of_the_day, skill_level_label, skills_view, validate_goal_draft,
        validate_profile_draft, validate_skill_draft, RefreshScreen,
    };

    const SKILLS: &str = r#"[
        { "id": 1, "name": "Rust", "category": "Backend", "level": 3 },
        { "id": 2, "name": "", "category": "Backend", "level": 1 }
    ]"#;
    const GOALS: &str = r#"[
        { "id": 1, "title": "Ship", "description": "v1", "targetDate": "2025-01-15" },
        { "id": 2, "title": "Past", "description": "old", "targetDate": "2024-12-20" }
    ]"#;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn home_view_returns_json_and_skip_count() {
        let response = home_view(
            SKILLS.to_string(),
            GOALS.to_string(),
            Some(r#"{ "userName": "Ada Lovelace", "email": "a@b.c" }"#.to_string()),
            Some("2025-01-01T00:00:00Z".to_string()),
        );

        assert!(response.ok, "{}", response.message);
        assert_eq!(response.skipped_records, 1);
        let value: serde_json::Value =
            serde_json::from_str(response.json.as_deref().unwrap()).unwrap();
        assert_eq!(value["greetingName"], "Ada");
        assert_eq!(value["upcoming"][0]["title"], "Ship");
    }

    #[test]
    fn views_report_failures_in_envelope() {
        let bad_json = skills_view("{".to_string());
        assert!(!bad_json.ok);
        assert!(bad_json.json.is_none());

        let not_array = goals_view(r#"{"goals": []}"#.to_string(), None);
        assert!(!not_array.ok);
        assert!(not_array.message.contains("goals"));

        let bad_now = goals_view(GOALS.to_string(), Some("yesterday".to_string()));
        assert!(!bad_now.ok);
    }

    #[test]
    fn goals_view_groups_by_year() {
        let response = goals_view(GOALS.to_string(), Some("2025-01-01".to_string()));
        let value: serde_json::Value =
            serde_json::from_str(response.json.as_deref().unwrap()).unwrap();
        assert_eq!(value["years"][0]["year"], 2024);
        assert_eq!(value["years"][1]["months"][0]["label"], "Jan");
    }

    #[test]
    fn quote_and_level_helpers() {
        assert!(quote_of_the_day(Some("2024-01-01".to_string())).is_some());
        assert!(quote_of_the_day(Some("garbage".to_string())).is_none());
        assert_eq!(skill_level_label(2).as_deref(), Some("Intermediate"));
        assert_eq!(skill_level_label(4), None);
    }

    #[test]
    fn draft_validation_envelopes() {
        let skill = validate_skill_draft("Rust".to_string(), "Backend".to_string(), 2);
        assert!(skill.ok);
        assert!(skill.payload_json.unwrap().contains("\"level\":2"));

        let missing = validate_skill_draft("Rust".to_string(), " ".to_string(), 2);
        assert_eq!(missing.message, "Name and Category are required.");

        let bad_level = validate_skill_draft("Rust".to_string(), "Backend".to_string(), 5);
        assert!(!bad_level.ok);

        let goal = validate_goal_draft(
            "Run".to_string(),
            "10k".to_string(),
            "2025-04-01".to_string(),
        );
        assert!(goal.payload_json.unwrap().contains("2025-04-01T00:00:00.000Z"));

        let profile = validate_profile_draft(String::new(), "a@b.c".to_string());
        assert_eq!(profile.message, "Name and Email cannot be empty");
    }

    #[test]
    fn older_refresh_generation_is_superseded_per_screen() {
        let first = begin_refresh(RefreshScreen::Goals);
        let response = goals_view(GOALS.to_string(), Some("2025-01-01".to_string()));
        let second = begin_refresh(RefreshScreen::Goals);

        assert!(response.ok);
        assert!(second > first);
        assert!(!is_current_refresh(RefreshScreen::Goals, first));
        assert!(is_current_refresh(RefreshScreen::Goals, second));
        assert!(!is_current_refresh(RefreshScreen::Goals, 0));

        let skills = begin_refresh(RefreshScreen::Skills);
        assert!(is_current_refresh(RefreshScreen::Skills, skills));
        assert!(is_current_refresh(RefreshScreen::Goals, second));
    }
}
