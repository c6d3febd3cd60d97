//! # sc-holidays
//!
//! The holiday-date computation engine: declarative holiday rules, the
//! weekend-observance shift, the US federal holiday table, and the typed
//! boundary contracts the HTTP and UI layers consume.
//!
//! The engine is a stateless pure-function library: every call to
//! [`compute_holidays`] evaluates the rule table from scratch, so it may be
//! invoked concurrently with no synchronization.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Boundary contract for the HTTP layer (query normalization, response shape).
pub mod api;

/// Country-specific holiday tables.
pub mod calendars;

/// Calendar-event types shared with the UI boundary.
pub mod events;

/// Holiday output entities and per-country orchestration.
pub mod holiday;

/// Holiday rule variants and the weekend-observance shift.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use api::{holidays_for_query, HolidaysQuery};
pub use events::{holiday_event, CalendarEvent, EventType};
pub use holiday::{compute_holidays, Holiday, HolidaySet};
pub use rule::{observance, HolidayDef, HolidayRule, Observance};
