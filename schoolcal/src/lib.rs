//! # schoolcal
//!
//! The holiday-date computation engine behind the schoolcal month-grid
//! calendar.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code (the HTTP layer serving
//! `/api/holidays`, or anything else that needs the holiday set) should
//! depend on this crate rather than the individual `sc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! schoolcal = "0.1"
//! ```
//!
//! ```rust
//! use schoolcal::holidays::compute_holidays;
//!
//! let set = compute_holidays(2024, "US").unwrap();
//! assert_eq!(set.holidays.len(), 11);
//! // Memorial Day 2024 = last Monday of May
//! assert_eq!(set.holidays[3].date.to_iso(), "2024-05-27");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use sc_core as core;

/// Civil-date, weekday, and month types.
pub use sc_time as time;

/// Holiday rules, the US federal table, and the boundary contracts.
pub use sc_holidays as holidays;

#[cfg(test)]
mod tests {
    use super::holidays::{compute_holidays, holidays_for_query, HolidaysQuery};

    #[test]
    fn end_to_end_query() {
        let query = HolidaysQuery {
            year: Some("2021".into()),
            country: None,
        };
        let set = holidays_for_query(&query).unwrap();
        let body = serde_json::to_string(&set).unwrap();
        assert!(body.contains("\"date\":\"2021-12-24\""));
        assert!(body.contains("\"actualDate\":\"2021-12-25\""));
    }

    #[test]
    fn facade_reexports_compute() {
        assert!(compute_holidays(2023, "US").is_ok());
    }
}
