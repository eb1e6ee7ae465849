//! Goal grouping and forward-looking subsets.
//!
//! # Invariants
//! - Years and months ascend; goals inside a month keep input order.
//! - `upcoming` only returns goals strictly after `now`.
//! - `due_soon` uses an open window `(now, now + window_days)`.

use crate::model::goal::Goal;
use crate::time::date_key::{date_key, MILLIS_PER_DAY};
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;

/// Default number of goals listed as upcoming.
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;
/// Default due-soon window in days.
pub const DEFAULT_DUE_SOON_WINDOW_DAYS: u32 = 7;

/// Year -> 0-based month -> goals.
pub type GoalCalendar = BTreeMap<i32, BTreeMap<u32, Vec<Goal>>>;

/// Groups goals by the year and month of their target date at `offset`.
pub fn group_by_year_month(goals: &[Goal], offset: FixedOffset) -> GoalCalendar {
    let mut calendar = GoalCalendar::new();
    for goal in goals {
        let key = date_key(goal.target_date, offset);
        calendar
            .entry(key.year)
            .or_default()
            .entry(key.month)
            .or_default()
            .push(goal.clone());
    }
    calendar
}

/// Goals due after `now`, soonest first, at most `limit`.
///
/// Equal target dates keep input order.
pub fn upcoming(goals: &[Goal], now: DateTime<Utc>, limit: usize) -> Vec<Goal> {
    let mut future = goals
        .iter()
        .filter(|goal| goal.target_date > now)
        .cloned()
        .collect::<Vec<_>>();
    future.sort_by_key(|goal| goal.target_date);
    future.truncate(limit);
    future
}

/// Number of goals due strictly within `window_days` after `now`.
pub fn due_soon(goals: &[Goal], now: DateTime<Utc>, window_days: u32) -> usize {
    let window_ms = i64::from(window_days) * MILLIS_PER_DAY;
    goals
        .iter()
        .filter(|goal| {
            let delta_ms = (goal.target_date - now).num_milliseconds();
            delta_ms > 0 && delta_ms < window_ms
        })
        .count()
}
