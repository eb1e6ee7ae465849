//! Deterministic quote-of-the-day selection.
//!
//! The selection hashes the canonical `YYYY-MM-DD` key by summing its
//! character codes and reduces the sum modulo the catalog length. The hash is
//! coarse but stable per calendar day.

use crate::model::quote::QuoteEntry;
use crate::time::date_key::date_key;
use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("quote catalog is empty")]
    EmptyCatalog,
}

/// Sum of the character codes of `day_key`.
pub fn day_key_hash(day_key: &str) -> u64 {
    day_key.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Catalog index for `day_key` in a catalog of `len` entries.
pub fn quote_index(day_key: &str, len: usize) -> Result<usize, QuoteError> {
    if len == 0 {
        return Err(QuoteError::EmptyCatalog);
    }
    Ok((day_key_hash(day_key) % len as u64) as usize)
}

/// Quote for the calendar day containing `now` at `offset`.
///
/// # Errors
/// - `EmptyCatalog` when `catalog` has no entries.
pub fn quote_of_day<'a>(
    now: DateTime<Utc>,
    offset: FixedOffset,
    catalog: &'a [QuoteEntry],
) -> Result<&'a QuoteEntry, QuoteError> {
    quote_for_day_key(&date_key(now, offset).day_key(), catalog)
}

/// Quote for an explicit canonical day key.
pub fn quote_for_day_key<'a>(
    day_key: &str,
    catalog: &'a [QuoteEntry],
) -> Result<&'a QuoteEntry, QuoteError> {
    let index = quote_index(day_key, catalog.len())?;
    Ok(&catalog[index])
}
