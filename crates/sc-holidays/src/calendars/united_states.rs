//! United States federal holiday table.
//!
//! The eleven federal holidays, in the fixed order the boundary contract
//! returns them (table order, not chronological):
//! * New Year's Day (Jan 1; if Sat → Fri; if Sun → Mon)
//! * Martin Luther King Jr. Day (3rd Mon in Jan)
//! * Presidents' Day (3rd Mon in Feb)
//! * Memorial Day (last Mon in May)
//! * Juneteenth (Jun 19; if Sat → Fri; if Sun → Mon)
//! * Independence Day (Jul 4; if Sat → Fri; if Sun → Mon)
//! * Labor Day (1st Mon in Sep)
//! * Columbus Day (2nd Mon in Oct)
//! * Veterans Day (Nov 11; if Sat → Fri; if Sun → Mon)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25; if Sat → Fri; if Sun → Mon)
//!
//! The observance shift applies only to the fixed-date holidays; the
//! floating-weekday holidays fall on their target weekday by construction.

use crate::rule::{HolidayDef, HolidayRule};
use sc_time::{Month, Weekday};

/// The eleven US federal holidays in fixed table order.
pub const FEDERAL_HOLIDAYS: [HolidayDef; 11] = [
    HolidayDef {
        name: "New Year's Day",
        rule: HolidayRule::Fixed {
            month: Month::January,
            day: 1,
        },
        observed: true,
    },
    HolidayDef {
        name: "Martin Luther King Jr. Day",
        rule: HolidayRule::NthWeekday {
            month: Month::January,
            weekday: Weekday::Monday,
            nth: 3,
        },
        observed: false,
    },
    HolidayDef {
        name: "Presidents' Day",
        rule: HolidayRule::NthWeekday {
            month: Month::February,
            weekday: Weekday::Monday,
            nth: 3,
        },
        observed: false,
    },
    HolidayDef {
        name: "Memorial Day",
        rule: HolidayRule::LastWeekday {
            month: Month::May,
            weekday: Weekday::Monday,
        },
        observed: false,
    },
    HolidayDef {
        name: "Juneteenth National Independence Day",
        rule: HolidayRule::Fixed {
            month: Month::June,
            day: 19,
        },
        observed: true,
    },
    HolidayDef {
        name: "Independence Day",
        rule: HolidayRule::Fixed {
            month: Month::July,
            day: 4,
        },
        observed: true,
    },
    HolidayDef {
        name: "Labor Day",
        rule: HolidayRule::NthWeekday {
            month: Month::September,
            weekday: Weekday::Monday,
            nth: 1,
        },
        observed: false,
    },
    HolidayDef {
        name: "Columbus Day",
        rule: HolidayRule::NthWeekday {
            month: Month::October,
            weekday: Weekday::Monday,
            nth: 2,
        },
        observed: false,
    },
    HolidayDef {
        name: "Veterans Day",
        rule: HolidayRule::Fixed {
            month: Month::November,
            day: 11,
        },
        observed: true,
    },
    HolidayDef {
        name: "Thanksgiving Day",
        rule: HolidayRule::NthWeekday {
            month: Month::November,
            weekday: Weekday::Thursday,
            nth: 4,
        },
        observed: false,
    },
    HolidayDef {
        name: "Christmas Day",
        rule: HolidayRule::Fixed {
            month: Month::December,
            day: 25,
        },
        observed: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::compute_holidays;
    use sc_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holiday(year: u16, name: &str) -> crate::holiday::Holiday {
        compute_holidays(year, "US")
            .unwrap()
            .holidays
            .into_iter()
            .find(|h| h.name == name)
            .unwrap_or_else(|| panic!("{name} missing for {year}"))
    }

    #[test]
    fn observed_only_on_fixed_date_rules() {
        for def in &FEDERAL_HOLIDAYS {
            match def.rule {
                HolidayRule::Fixed { .. } => assert!(def.observed, "{}", def.name),
                _ => assert!(!def.observed, "{}", def.name),
            }
        }
    }

    #[test]
    fn independence_day_2023_no_shift() {
        // July 4, 2023 is a Tuesday
        let h = holiday(2023, "Independence Day");
        assert_eq!(h.date, date(2023, 7, 4));
        assert_eq!(h.actual_date, None);
    }

    #[test]
    fn christmas_2021_saturday_observed_friday() {
        let h = holiday(2021, "Christmas Day");
        assert_eq!(h.date, date(2021, 12, 24));
        assert_eq!(h.actual_date, Some(date(2021, 12, 25)));
    }

    #[test]
    fn new_years_2022_observed_in_previous_year() {
        // Jan 1, 2022 is a Saturday: the observed date falls on Dec 31,
        // 2021, outside the requested year. Deliberate — matches federal
        // observance practice.
        let h = holiday(2022, "New Year's Day");
        assert_eq!(h.date, date(2021, 12, 31));
        assert_eq!(h.actual_date, Some(date(2022, 1, 1)));
    }

    #[test]
    fn juneteenth_2022_sunday_observed_monday() {
        // June 19, 2022 is a Sunday
        let h = holiday(2022, "Juneteenth National Independence Day");
        assert_eq!(h.date, date(2022, 6, 20));
        assert_eq!(h.actual_date, Some(date(2022, 6, 19)));
    }

    #[test]
    fn memorial_day_2024() {
        let h = holiday(2024, "Memorial Day");
        assert_eq!(h.date, date(2024, 5, 27));
        assert_eq!(h.actual_date, None);
    }

    #[test]
    fn thanksgiving_2024() {
        let h = holiday(2024, "Thanksgiving Day");
        assert_eq!(h.date, date(2024, 11, 28));
    }

    #[test]
    fn labor_day_2025() {
        let h = holiday(2025, "Labor Day");
        assert_eq!(h.date, date(2025, 9, 1));
    }

    #[test]
    fn mlk_day_2024() {
        let h = holiday(2024, "Martin Luther King Jr. Day");
        assert_eq!(h.date, date(2024, 1, 15));
    }

    #[test]
    fn veterans_day_2023_saturday_observed_friday() {
        // Nov 11, 2023 is a Saturday
        let h = holiday(2023, "Veterans Day");
        assert_eq!(h.date, date(2023, 11, 10));
        assert_eq!(h.actual_date, Some(date(2023, 11, 11)));
    }
}
