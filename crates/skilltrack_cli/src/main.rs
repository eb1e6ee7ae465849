//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `skilltrack_core` linkage without the mobile shell.
//! - Given a snapshot directory (`skills.json`, `goals.json`, optional
//!   `profile.json`), print the three screen snapshots as JSON.
//!
//! Usage: `skilltrack_cli [SNAPSHOT_DIR] [NOW_ISO]`

use skilltrack_core::{parse_timestamp, DashboardService, JsonDirSource, TrackerConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("skilltrack_core ping={}", skilltrack_core::ping());
    println!("skilltrack_core version={}", skilltrack_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(dir) = args.next() else {
        return ExitCode::SUCCESS;
    };

    match run(&dir, args.next().as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(dir: &str, now: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let now = match now {
        Some(raw) => parse_timestamp(raw)?,
        None => chrono::Utc::now(),
    };
    let config = TrackerConfig::from_env()?;
    let service = DashboardService::new(JsonDirSource::new(dir), config);

    let snapshot = serde_json::json!({
        "home": service.refresh_home(now)?,
        "goals": service.refresh_goals(now)?,
        "skills": service.refresh_skills()?,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
