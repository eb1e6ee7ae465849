//! Derived views over decoded records.
//!
//! # Responsibility
//! - Group goals by calendar position and derive upcoming/due-soon sets.
//! - Group skills by normalized category and map levels to tiers.
//! - Select the quote of the day.
//!
//! # Invariants
//! - Every function is pure: no I/O, no shared mutable state.
//! - Output ordering is produced here, never inherited from fetch order.
//! - Inputs are borrowed; outputs are fresh containers.

pub mod goals;
pub mod quote;
pub mod skills;
