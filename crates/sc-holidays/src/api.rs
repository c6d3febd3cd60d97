//! Boundary contract consumed by the HTTP layer.
//!
//! The HTTP layer binds the raw query string into [`HolidaysQuery`] and
//! calls [`holidays_for_query`]; the response body is the serialized
//! [`HolidaySet`](crate::holiday::HolidaySet). Input normalization lives
//! here so the core always receives a valid year and an uppercased country
//! code: an absent, non-numeric, or out-of-range year falls back to the
//! current calendar year, and the country defaults to `"US"`
//! (case-insensitive).

use crate::holiday::{compute_holidays, HolidaySet};
use chrono::Datelike;
use sc_core::errors::Result;
use sc_core::Year;
use serde::Deserialize;

/// The raw holiday query parameters, as the HTTP layer receives them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysQuery {
    /// Raw year value; absent or unparseable falls back to the current year.
    pub year: Option<String>,
    /// Country code, case-insensitive; defaults to `"US"`.
    pub country: Option<String>,
}

/// Return the current calendar year.
pub fn current_year() -> Year {
    chrono::Utc::now().year() as Year
}

/// Resolve a raw year parameter to a usable year.
///
/// Absent, non-numeric, or outside the supported date range (1900–2199)
/// all substitute the current calendar year — an invalid year is not an
/// error condition at this boundary.
pub fn resolve_year(raw: Option<&str>) -> Year {
    raw.and_then(|s| s.trim().parse::<Year>().ok())
        .filter(|y| (1900..=2199).contains(y))
        .unwrap_or_else(current_year)
}

/// Resolve a raw country parameter: default `"US"`, uppercased.
pub fn resolve_country(raw: Option<&str>) -> String {
    let country = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("US");
    country.to_uppercase()
}

/// Normalize the query and compute the holiday set.
///
/// The only error is [`UnsupportedCountry`](sc_core::Error::UnsupportedCountry),
/// which the HTTP layer maps to a client-error status with the error's
/// display message as the body.
pub fn holidays_for_query(query: &HolidaysQuery) -> Result<HolidaySet> {
    let year = resolve_year(query.year.as_deref());
    let country = resolve_country(query.country.as_deref());
    compute_holidays(year, &country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::Error;

    #[test]
    fn year_parses() {
        assert_eq!(resolve_year(Some("2023")), 2023);
        assert_eq!(resolve_year(Some(" 2024 ")), 2024);
    }

    #[test]
    fn year_falls_back_to_current() {
        let now = current_year();
        assert_eq!(resolve_year(None), now);
        assert_eq!(resolve_year(Some("")), now);
        assert_eq!(resolve_year(Some("banana")), now);
        assert_eq!(resolve_year(Some("-5")), now);
        // Outside the supported date range
        assert_eq!(resolve_year(Some("1899")), now);
        assert_eq!(resolve_year(Some("50000")), now);
    }

    #[test]
    fn country_defaults_and_uppercases() {
        assert_eq!(resolve_country(None), "US");
        assert_eq!(resolve_country(Some("")), "US");
        assert_eq!(resolve_country(Some("us")), "US");
        assert_eq!(resolve_country(Some("fr")), "FR");
    }

    #[test]
    fn query_happy_path() {
        let query = HolidaysQuery {
            year: Some("2024".into()),
            country: Some("us".into()),
        };
        let set = holidays_for_query(&query).unwrap();
        assert_eq!(set.year, 2024);
        assert_eq!(set.country, "US");
        assert_eq!(set.holidays.len(), 11);
    }

    #[test]
    fn query_unsupported_country() {
        let query = HolidaysQuery {
            year: Some("2023".into()),
            country: Some("fr".into()),
        };
        let err = holidays_for_query(&query).unwrap_err();
        assert_eq!(err, Error::UnsupportedCountry("FR".into()));
    }

    #[test]
    fn query_deserializes_from_json() {
        let query: HolidaysQuery =
            serde_json::from_str(r#"{ "year": "2023", "country": "US" }"#).unwrap();
        assert_eq!(query.year.as_deref(), Some("2023"));
        let query: HolidaysQuery = serde_json::from_str("{}").unwrap();
        assert!(query.year.is_none() && query.country.is_none());
    }

    #[test]
    fn response_body_shape() {
        let set = compute_holidays(2021, "US").unwrap();
        let body = serde_json::to_value(&set).unwrap();
        assert_eq!(body["year"], 2021);
        assert_eq!(body["country"], "US");
        assert_eq!(body["holidays"].as_array().unwrap().len(), 11);

        // Christmas 2021 fell on a Saturday: observed Friday, actual kept
        let christmas = &body["holidays"][10];
        assert_eq!(christmas["name"], "Christmas Day");
        assert_eq!(christmas["date"], "2021-12-24");
        assert_eq!(christmas["actualDate"], "2021-12-25");

        // Unshifted holidays omit actualDate entirely
        let thanksgiving = &body["holidays"][9];
        assert_eq!(thanksgiving["name"], "Thanksgiving Day");
        assert_eq!(thanksgiving["date"], "2021-11-25");
        assert!(thanksgiving.get("actualDate").is_none());
    }
}
