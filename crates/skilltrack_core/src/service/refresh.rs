//! Last-writer-wins gate for overlapping refreshes.
//!
//! Rapid focus events can start several refreshes; only the result of the
//! most recently *started* refresh may be shown. Earlier results are dropped
//! even if they complete later.
//!
//! The gate never blocks a refresh; callers hold the ticket (or its
//! generation number across the FFI boundary) and ask the gate before
//! showing a result.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque refresh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// Monotonic number of this ticket; the first ticket is `1`.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Issues refresh tickets and tells whether one is still the newest.
#[derive(Debug, Default)]
pub struct RefreshGate {
    latest: AtomicU64,
}

impl RefreshGate {
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Starts a refresh, superseding every earlier ticket.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is the most recently started refresh.
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.is_current_generation(ticket.0)
    }

    /// Same as [`RefreshGate::is_current`] for a generation number.
    pub fn is_current_generation(&self, generation: u64) -> bool {
        generation != 0 && self.latest.load(Ordering::Acquire) == generation
    }

    /// Returns `value` only when `ticket` is still the newest refresh.
    pub fn accept<T>(&self, ticket: RefreshTicket, value: T) -> Option<T> {
        self.accept_generation(ticket.0, value)
    }

    /// Same as [`RefreshGate::accept`] for a generation number.
    pub fn accept_generation<T>(&self, generation: u64, value: T) -> Option<T> {
        if self.is_current_generation(generation) {
            Some(value)
        } else {
            log::debug!(
                "event=refresh_discarded module=service status=skip generation={generation}"
            );
            None
        }
    }
}
