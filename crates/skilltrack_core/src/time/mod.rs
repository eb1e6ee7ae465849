//! Calendar keying for timestamps.
//!
//! # Responsibility
//! - Parse wire timestamps into UTC instants.
//! - Derive year/month/day keys and whole-day differences.
//!
//! # Invariants
//! - All keys inside one process are derived with the same UTC offset.
//! - Parsing never falls back to "now".

pub mod date_key;
