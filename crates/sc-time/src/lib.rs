//! # sc-time
//!
//! Civil-date, weekday, and month types, plus the weekday-arithmetic
//! primitives the holiday rules are built on (`nth_weekday`,
//! `last_weekday`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` — civil calendar date.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use weekday::Weekday;
