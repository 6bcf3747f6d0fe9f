//! Wall-clock time conversion between the two forms an event time takes.
//!
//! - **edit form**: 24-hour `HH:MM` (`"00:00"`..`"23:59"`), what a time picker produces.
//! - **display form**: 12-hour `H:MM AM/PM` (`"12:00 AM"`..`"11:59 PM"`), what gets stored
//!   on a [`ScheduleEvent`](crate::event::ScheduleEvent) and shown to the user.
//!
//! Display strings do not sort chronologically (`"10:30 AM" < "9:00 AM"`), so ordering
//! always goes through [`ClockTime`].

use std::fmt;
use std::str::FromStr;

use crate::error::{CourseCalError, CourseCalResult};

/// Time picked by default when a new event form opens.
pub const DEFAULT_EDIT_TIME: &str = "12:00";

/// A time of day with minute resolution. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(ClockTime { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Parse the 24-hour edit form (`"09:00"`, `"23:59"`).
    pub fn from_edit(s: &str) -> CourseCalResult<Self> {
        let invalid = || CourseCalError::InvalidTime(s.to_string());

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let hour = parse_field(hours, 2..=2).filter(|h| *h <= 23).ok_or_else(invalid)?;
        let minute = parse_minutes(minutes).ok_or_else(invalid)?;

        Ok(ClockTime { hour, minute })
    }

    /// Parse the 12-hour display form (`"9:00 AM"`, `"11:59 PM"`).
    ///
    /// A zero-padded hour (`"02:00 PM"`) is accepted as well.
    pub fn from_display(s: &str) -> CourseCalResult<Self> {
        let invalid = || CourseCalError::InvalidTime(s.to_string());

        let (time_part, meridiem) = s.split_once(' ').ok_or_else(invalid)?;
        let (hours, minutes) = time_part.split_once(':').ok_or_else(invalid)?;
        let hour12 = parse_field(hours, 1..=2)
            .filter(|h| (1..=12).contains(h))
            .ok_or_else(invalid)?;
        let minute = parse_minutes(minutes).ok_or_else(invalid)?;

        let hour = match (meridiem, hour12) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            _ => return Err(invalid()),
        };

        Ok(ClockTime { hour, minute })
    }

    /// Format as the 24-hour edit form.
    pub fn to_edit(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Format as the 12-hour display form.
    pub fn to_display(&self) -> String {
        let meridiem = if self.hour >= 12 { "PM" } else { "AM" };
        let hour12 = (self.hour + 11) % 12 + 1;
        format!("{}:{:02} {}", hour12, self.minute, meridiem)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display())
    }
}

impl FromStr for ClockTime {
    type Err = CourseCalError;

    /// Accepts either form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(' ') {
            ClockTime::from_display(s)
        } else {
            ClockTime::from_edit(s)
        }
    }
}

/// Convert an edit-form time (`"09:00"`) to display form (`"9:00 AM"`).
pub fn encode(edit: &str) -> CourseCalResult<String> {
    Ok(ClockTime::from_edit(edit)?.to_display())
}

/// Convert a display-form time (`"9:00 AM"`) back to edit form (`"09:00"`).
pub fn decode(display: &str) -> CourseCalResult<String> {
    Ok(ClockTime::from_display(display)?.to_edit())
}

/// Chronological sort key for a display-form time. `None` if it doesn't parse.
pub fn sort_key(display: &str) -> Option<ClockTime> {
    ClockTime::from_display(display).ok()
}

fn parse_field(s: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u8> {
    if !digits.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_minutes(s: &str) -> Option<u8> {
    parse_field(s, 2..=2).filter(|m| *m <= 59)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_times() -> impl Iterator<Item = ClockTime> {
        (0..24u8).flat_map(|h| (0..60u8).map(move |m| ClockTime::new(h, m).unwrap()))
    }

    #[test]
    fn encode_maps_hours_onto_twelve_hour_clock() {
        assert_eq!(encode("00:00").unwrap(), "12:00 AM");
        assert_eq!(encode("00:30").unwrap(), "12:30 AM");
        assert_eq!(encode("01:05").unwrap(), "1:05 AM");
        assert_eq!(encode("09:00").unwrap(), "9:00 AM");
        assert_eq!(encode("11:59").unwrap(), "11:59 AM");
        assert_eq!(encode("12:00").unwrap(), "12:00 PM");
        assert_eq!(encode("13:05").unwrap(), "1:05 PM");
        assert_eq!(encode("23:59").unwrap(), "11:59 PM");
    }

    #[test]
    fn decode_maps_back_to_twenty_four_hours() {
        assert_eq!(decode("12:00 AM").unwrap(), "00:00");
        assert_eq!(decode("12:45 AM").unwrap(), "00:45");
        assert_eq!(decode("9:00 AM").unwrap(), "09:00");
        assert_eq!(decode("12:00 PM").unwrap(), "12:00");
        assert_eq!(decode("1:05 PM").unwrap(), "13:05");
        assert_eq!(decode("11:59 PM").unwrap(), "23:59");
    }

    #[test]
    fn decode_accepts_padded_hour() {
        assert_eq!(decode("02:00 PM").unwrap(), "14:00");
        assert_eq!(decode("01:00 PM").unwrap(), "13:00");
    }

    #[test]
    fn display_form_round_trips_for_every_minute() {
        for t in all_times() {
            let display = t.to_display();
            assert_eq!(encode(&decode(&display).unwrap()).unwrap(), display);
        }
    }

    #[test]
    fn edit_form_round_trips_for_every_minute() {
        for t in all_times() {
            let edit = t.to_edit();
            assert_eq!(decode(&encode(&edit).unwrap()).unwrap(), edit);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "9", "9:00", "24:00", "12:60", "1:5", "ab:cd", "-1:00"] {
            assert!(encode(bad).is_err(), "encode accepted {bad:?}");
        }
        for bad in ["", "9:00", "13:00 PM", "0:30 AM", "9:00 am", "9:00 XM", "9:0 AM", "9:00  AM"] {
            assert!(decode(bad).is_err(), "decode accepted {bad:?}");
        }
    }

    #[test]
    fn sort_key_is_chronological() {
        // "10:30 AM" < "9:00 AM" as strings
        assert!("10:30 AM" < "9:00 AM");
        assert!(sort_key("9:00 AM") < sort_key("10:30 AM"));
        assert!(sort_key("11:59 AM") < sort_key("12:00 PM"));
        assert!(sort_key("12:00 AM") < sort_key("1:00 AM"));
        assert_eq!(sort_key("nonsense"), None);
    }

    #[test]
    fn from_str_accepts_either_form() {
        assert_eq!("14:30".parse::<ClockTime>().unwrap(), ClockTime::new(14, 30).unwrap());
        assert_eq!("2:30 PM".parse::<ClockTime>().unwrap(), ClockTime::new(14, 30).unwrap());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(ClockTime::new(23, 59).is_some());
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
    }
}
