//! Holiday output entities and the per-country orchestration.

use crate::calendars::united_states;
use crate::rule::{observance, Observance};
use sc_core::errors::{Error, Result};
use sc_core::Year;
use sc_time::Date;
use serde::Serialize;

/// A computed holiday.
///
/// `date` is the observed date; `actual_date` is present exactly when the
/// weekend-observance shift moved the holiday off its literal calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Display name.
    pub name: String,
    /// Observed date.
    pub date: Date,
    /// The literal calendar date, present only when it differs from `date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<Date>,
}

/// The full holiday set for one year and country, in fixed rule-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaySet {
    /// The requested year.
    pub year: Year,
    /// The country code, e.g. `"US"`.
    pub country: String,
    /// The holidays in rule-table order (not chronological).
    pub holidays: Vec<Holiday>,
}

/// Compute the holiday set for a year and country code.
///
/// The computation is pure and stateless: every call evaluates the rule
/// table from scratch. Only `"US"` is supported; any other code yields
/// [`Error::UnsupportedCountry`], surfaced at the boundary as a
/// client-input error rather than an empty or partial set.
pub fn compute_holidays(year: Year, country: &str) -> Result<HolidaySet> {
    if country != "US" {
        return Err(Error::UnsupportedCountry(country.to_string()));
    }
    let mut holidays = Vec::with_capacity(united_states::FEDERAL_HOLIDAYS.len());
    for def in &united_states::FEDERAL_HOLIDAYS {
        let raw = def.rule.resolve(year)?;
        let holiday = if def.observed {
            let Observance { observed, actual } = observance(raw);
            Holiday {
                name: def.name.to_string(),
                date: observed,
                actual_date: (observed != actual).then_some(actual),
            }
        } else {
            Holiday {
                name: def.name.to_string(),
                date: raw,
                actual_date: None,
            }
        };
        holidays.push(holiday);
    }
    Ok(HolidaySet {
        year,
        country: country.to_string(),
        holidays,
    })
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn holiday_set_invariants(year in 1900u16..=2199) {
            let set = compute_holidays(year, "US").unwrap();
            prop_assert_eq!(set.holidays.len(), 11);
            for h in &set.holidays {
                if let Some(actual) = h.actual_date {
                    // Shift is exactly one day, off a weekend
                    prop_assert!(actual.weekday().is_weekend());
                    prop_assert_eq!((h.date - actual).abs(), 1);
                    prop_assert_eq!(actual.year(), year);
                } else {
                    prop_assert_eq!(h.date.year(), year);
                }
            }
        }
    }
}
