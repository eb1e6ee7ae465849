//! Domain model for skills, goals, quotes and the signed-in profile.
//!
//! # Responsibility
//! - Define the typed records every aggregation works on.
//! - Decode raw fetch payloads into typed records with per-record tolerance.
//! - Validate form drafts before they are sent to the API.
//!
//! # Invariants
//! - Typed records are only built from validated input; a `Goal` always has
//!   a parsed `target_date`.
//! - Records are never mutated by the core after decoding.

pub mod draft;
pub mod goal;
pub mod profile;
pub mod quote;
pub mod record;
pub mod skill;
