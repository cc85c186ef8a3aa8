//! Observation-date helpers.
//!
//! Dates are stored as zero-padded ISO `YYYY-MM-DD` text, so lexical
//! comparison in the store matches calendar comparison. Range bounds taken
//! from the URL are passed through as raw strings; only the lookback
//! computation needs real calendar arithmetic.

use chrono::{Days, NaiveDate};

/// Storage format for observation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lookback window for the recent-temperatures query, in days.
pub const LOOKBACK_DAYS: u64 = 366;

/// Error for observation-date text that is not zero-padded `YYYY-MM-DD`.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// Not a calendar date at all.
    #[error("invalid observation date")]
    Parse(#[from] chrono::ParseError),

    /// A valid date, but not in the canonical zero-padded form.
    #[error("observation date is not zero-padded ISO")]
    NotCanonical,
}

/// Parse a stored observation date.
///
/// Stricter than chrono's `%Y-%m-%d`, which tolerates non-padded fields:
/// only the canonical zero-padded form round-trips, so anything else is
/// rejected.
///
/// # Errors
///
/// Returns a [`DateError`] when `value` is not zero-padded `YYYY-MM-DD`.
pub fn parse(value: &str) -> Result<NaiveDate, DateError> {
    let parsed = NaiveDate::parse_from_str(value, DATE_FORMAT)?;
    if format(parsed) != value {
        return Err(DateError::NotCanonical);
    }
    Ok(parsed)
}

/// Format a date in the storage format.
#[must_use]
pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Cutoff for "recent" measurements: [`LOOKBACK_DAYS`] before `latest`.
#[must_use]
pub fn lookback_cutoff(latest: NaiveDate) -> NaiveDate {
    latest
        .checked_sub_days(Days::new(LOOKBACK_DAYS))
        .unwrap_or(NaiveDate::MIN)
}
