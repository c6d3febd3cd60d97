//! Holiday rules and the weekend-observance shift.
//!
//! A holiday is defined by one of three declarative rule variants, all
//! evaluated by [`HolidayRule::resolve`]. Fixed-date holidays additionally
//! carry an observance flag: when the raw date lands on a weekend, the
//! observed date shifts to the nearest weekday (Saturday → the preceding
//! Friday, Sunday → the following Monday).

use sc_core::errors::Result;
use sc_core::Year;
use sc_time::{Date, Month, Weekday};

/// A named holiday-date computation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// A fixed calendar date, e.g. Independence Day = July 4.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The n-th occurrence of a weekday in a month, e.g. the 3rd Monday of
    /// January.
    NthWeekday {
        /// Month of the holiday.
        month: Month,
        /// Target weekday.
        weekday: Weekday,
        /// Which occurrence (1-based).
        nth: u8,
    },
    /// The last occurrence of a weekday in a month, e.g. the last Monday of
    /// May.
    LastWeekday {
        /// Month of the holiday.
        month: Month,
        /// Target weekday.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// Evaluate the rule for the given year.
    ///
    /// # Errors
    /// Fails only on caller-contract violations: a fixed day that does not
    /// exist in the month, or an nth occurrence that does not exist. The
    /// built-in rule tables only contain rules valid in every year.
    pub fn resolve(&self, year: Year) -> Result<Date> {
        match *self {
            HolidayRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day),
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => Date::nth_weekday(nth, weekday, year, month.number()),
            HolidayRule::LastWeekday { month, weekday } => {
                Date::last_weekday(weekday, year, month.number())
            }
        }
    }
}

/// One row of a country's holiday table: a display name, the date rule, and
/// whether the weekend-observance shift applies.
#[derive(Debug, Clone, Copy)]
pub struct HolidayDef {
    /// Display name, e.g. `"Memorial Day"`.
    pub name: &'static str,
    /// The date computation rule.
    pub rule: HolidayRule,
    /// Whether the observed date shifts off weekends.
    ///
    /// Set only on fixed-date holidays; floating-weekday holidays always
    /// fall on the target weekday and never need shifting.
    pub observed: bool,
}

/// Result of the weekend-observance shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observance {
    /// The date the holiday is recognized on (shifted off weekends).
    pub observed: Date,
    /// The unmodified input date.
    pub actual: Date,
}

/// Apply the US federal weekend-observance rule.
///
/// Saturday shifts to the preceding Friday, Sunday to the following Monday,
/// weekdays are unchanged. The shift is raw day arithmetic with no
/// year-boundary special-casing: Jan 1 on a Saturday is observed on Dec 31
/// of the previous year, matching federal practice.
pub fn observance(date: Date) -> Observance {
    let observed = match date.weekday() {
        Weekday::Saturday => date - 1,
        Weekday::Sunday => date + 1,
        _ => date,
    };
    Observance {
        observed,
        actual: date,
    }
}
