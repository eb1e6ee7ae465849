//! Refresh use-cases.
//!
//! # Responsibility
//! - Pull raw payloads from a `TrackerSource`, decode them and assemble
//!   screen snapshots.
//! - Let callers keep only the newest completed refresh.
//!
//! # Invariants
//! - Every refresh re-fetches and re-assembles; nothing is memoized.

pub mod dashboard_service;
pub mod refresh;
