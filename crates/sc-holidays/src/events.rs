//! Calendar-event types shared with the UI boundary.
//!
//! The UI keeps user events in browser-local storage and merges the
//! computed holidays into that list as read-only entries. These are the
//! shared shapes: the event kinds the form offers, the stored event record
//! (camelCase JSON), and the holiday-to-event conversion keyed
//! `"holiday-" + date`.

use crate::holiday::Holiday;
use sc_time::Date;
use serde::{Deserialize, Serialize};

/// Kind of calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A birthday.
    Birthday,
    /// Homework to complete.
    Homework,
    /// A graded assignment.
    Assignment,
    /// A test or exam.
    Test,
    /// A due date.
    Due,
    /// An appointment.
    Appointment,
    /// A computed national holiday (read-only, non-deletable).
    Holiday,
}

/// One calendar event as the UI stores it.
///
/// All-day events carry only a civil date; `time` is an optional `"HH:mm"`
/// start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique id; holiday entries use `"holiday-" + date`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Civil date of the event.
    pub date: Date,
    /// Optional `"HH:mm"` start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Event kind.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Optional custom color override in hex, e.g. `"#FFAA00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    /// `true` for merged holiday entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<bool>,
}

/// Convert a computed holiday into the read-only event entry the UI merges
/// into its list, keyed by the observed date.
pub fn holiday_event(holiday: &Holiday) -> CalendarEvent {
    CalendarEvent {
        id: format!("holiday-{}", holiday.date),
        title: holiday.name.clone(),
        date: holiday.date,
        time: None,
        event_type: EventType::Holiday,
        notes: None,
        color_hex: None,
        is_holiday: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::compute_holidays;

    #[test]
    fn holiday_event_key_and_flags() {
        let set = compute_holidays(2024, "US").unwrap();
        let memorial = &set.holidays[3];
        let event = holiday_event(memorial);
        assert_eq!(event.id, "holiday-2024-05-27");
        assert_eq!(event.title, "Memorial Day");
        assert_eq!(event.event_type, EventType::Holiday);
        assert_eq!(event.is_holiday, Some(true));
        assert_eq!(event.time, None);
    }

    #[test]
    fn event_json_is_camel_case() {
        let event = CalendarEvent {
            id: "abc123".into(),
            title: "Math quiz".into(),
            date: Date::from_ymd(2025, 3, 14).unwrap(),
            time: Some("09:30".into()),
            event_type: EventType::Test,
            notes: None,
            color_hex: Some("#FFAA00".into()),
            is_holiday: None,
        };
        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(body["date"], "2025-03-14");
        assert_eq!(body["type"], "test");
        assert_eq!(body["colorHex"], "#FFAA00");
        assert!(body.get("notes").is_none());
        assert!(body.get("isHoliday").is_none());
    }

    #[test]
    fn event_deserializes_with_optional_fields_absent() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{ "id": "e1", "title": "Gran's birthday", "date": "2025-06-02", "type": "birthday" }"#,
        )
        .unwrap();
        assert_eq!(event.event_type, EventType::Birthday);
        assert_eq!(event.date, Date::from_ymd(2025, 6, 2).unwrap());
        assert!(event.notes.is_none());
    }
}
