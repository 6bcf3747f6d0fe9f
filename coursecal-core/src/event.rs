//! Scheduled events.
//!
//! Events are stored in their persisted form: `date` as `YYYY-MM-DD` and `time` in the
//! 12-hour display form (see [`crate::time`]). The serialized field names match the
//! dashboard data (`courseId`, `type`).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CourseCalError, CourseCalResult};
use crate::time::{self, ClockTime};

/// Format of a persisted event date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Meeting,
    Deadline,
    Lecture,
}

impl EventType {
    /// In the order the event form offers them.
    pub const ALL: [EventType; 3] = [EventType::Meeting, EventType::Lecture, EventType::Deadline];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Deadline => "deadline",
            EventType::Lecture => "lecture",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meeting",
            EventType::Deadline => "Deadline",
            EventType::Lecture => "Lecture",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = CourseCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "meeting" => Ok(EventType::Meeting),
            "deadline" => Ok(EventType::Deadline),
            "lecture" => Ok(EventType::Lecture),
            other => Err(CourseCalError::Validation(format!(
                "Unknown event type '{}'. Expected meeting, deadline or lecture",
                other
            ))),
        }
    }
}

/// A scheduled event in its persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: String,
    /// May reference a course that no longer exists.
    pub course_id: String,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `H:MM AM/PM`
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl ScheduleEvent {
    /// Chronological key for the event's time, if it parses.
    pub fn clock_time(&self) -> Option<ClockTime> {
        time::sort_key(&self.time)
    }

    pub fn naive_date(&self) -> CourseCalResult<NaiveDate> {
        parse_date_key(&self.date)
    }
}

impl fmt::Display for ScheduleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// An event that hasn't been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub course_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl EventDraft {
    pub fn with_id(self, id: String) -> ScheduleEvent {
        ScheduleEvent {
            id,
            course_id: self.course_id,
            title: self.title,
            date: self.date,
            time: self.time,
            event_type: self.event_type,
        }
    }
}

/// Format a date as an event date key (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse an event date key.
pub fn parse_date_key(s: &str) -> CourseCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CourseCalError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScheduleEvent {
        ScheduleEvent {
            id: "e1".to_string(),
            course_id: "1".to_string(),
            title: "Quantum Physics Lecture".to_string(),
            date: "2024-03-03".to_string(),
            time: "10:00 AM".to_string(),
            event_type: EventType::Lecture,
        }
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["courseId"], "1");
        assert_eq!(json["type"], "lecture");
        assert_eq!(json["time"], "10:00 AM");
    }

    #[test]
    fn deserializes_dashboard_json() {
        let json = r#"{"id":"e2","courseId":"2","title":"Algebra Problem Set Due",
            "date":"2024-03-05","time":"11:59 PM","type":"deadline"}"#;
        let event: ScheduleEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Deadline);
        assert_eq!(event.clock_time(), ClockTime::new(23, 59));
    }

    #[test]
    fn event_type_parses_case_insensitively() {
        assert_eq!("Lecture".parse::<EventType>().unwrap(), EventType::Lecture);
        assert_eq!("meeting".parse::<EventType>().unwrap(), EventType::Meeting);
        assert!("party".parse::<EventType>().is_err());
    }

    #[test]
    fn date_keys_are_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date_key(d), "2024-03-05");
        assert_eq!(parse_date_key("2024-03-05").unwrap(), d);
        assert!(parse_date_key("2024-3-5x").is_err());
        assert!(parse_date_key("2023-02-29").is_err());
    }
}
