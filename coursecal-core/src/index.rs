//! Per-day event lookup.

use std::collections::HashMap;

use crate::event::{EventType, ScheduleEvent};

/// Events grouped by their date key, in collection order.
///
/// Cheap to build; rebuild it whenever the event collection changes instead of
/// keeping it in sync.
#[derive(Debug, Default)]
pub struct EventIndex<'a> {
    by_date: HashMap<&'a str, Vec<&'a ScheduleEvent>>,
}

impl<'a> EventIndex<'a> {
    pub fn build(events: &'a [ScheduleEvent]) -> Self {
        let mut by_date: HashMap<&'a str, Vec<&'a ScheduleEvent>> = HashMap::new();
        for event in events {
            by_date.entry(event.date.as_str()).or_default().push(event);
        }
        EventIndex { by_date }
    }

    /// Events on `date` (`YYYY-MM-DD`) in collection order. Empty if there are none.
    pub fn events_on(&self, date: &str) -> &[&'a ScheduleEvent] {
        self.by_date.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events on `date` ordered by time of day, for the day detail panel.
    ///
    /// Events at the same time keep their collection order. Events whose time doesn't
    /// parse go last.
    pub fn day_view(&self, date: &str) -> Vec<&'a ScheduleEvent> {
        let mut events = self.events_on(date).to_vec();
        events.sort_by_key(|e| (e.clock_time().is_none(), e.clock_time()));
        events
    }

    /// Meetings on `date` in collection order.
    pub fn meetings_on(&self, date: &str) -> Vec<&'a ScheduleEvent> {
        self.events_on(date)
            .iter()
            .copied()
            .filter(|e| e.event_type == EventType::Meeting)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: &str, time: &str, event_type: EventType) -> ScheduleEvent {
        ScheduleEvent {
            id: id.to_string(),
            course_id: "1".to_string(),
            title: format!("Event {id}"),
            date: date.to_string(),
            time: time.to_string(),
            event_type,
        }
    }

    fn ids(events: &[&ScheduleEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn empty_collection_has_no_events() {
        let index = EventIndex::build(&[]);
        for key in ["2024-03-05", "1999-12-31", "", "garbage"] {
            assert!(index.events_on(key).is_empty());
            assert!(index.day_view(key).is_empty());
        }
    }

    #[test]
    fn events_on_keeps_source_order() {
        let events = vec![
            event("a", "2024-03-05", "3:00 PM", EventType::Meeting),
            event("b", "2024-03-06", "9:00 AM", EventType::Lecture),
            event("c", "2024-03-05", "8:00 AM", EventType::Deadline),
        ];
        let index = EventIndex::build(&events);
        assert_eq!(ids(index.events_on("2024-03-05")), ["a", "c"]);
        assert_eq!(ids(index.events_on("2024-03-06")), ["b"]);
        assert!(index.events_on("2024-03-07").is_empty());
    }

    #[test]
    fn day_view_sorts_chronologically_not_lexically() {
        let events = vec![
            event("late", "2024-03-05", "10:30 AM", EventType::Meeting),
            event("early", "2024-03-05", "9:00 AM", EventType::Meeting),
        ];
        let index = EventIndex::build(&events);
        assert_eq!(ids(&index.day_view("2024-03-05")), ["early", "late"]);
    }

    #[test]
    fn day_view_orders_midnight_noon_and_padded_times() {
        let events = vec![
            event("pm", "2024-03-05", "02:00 PM", EventType::Meeting),
            event("noon", "2024-03-05", "12:00 PM", EventType::Meeting),
            event("midnight", "2024-03-05", "12:00 AM", EventType::Meeting),
            event("bad", "2024-03-05", "whenever", EventType::Meeting),
            event("eleven", "2024-03-05", "11:59 AM", EventType::Meeting),
        ];
        let index = EventIndex::build(&events);
        assert_eq!(
            ids(&index.day_view("2024-03-05")),
            ["midnight", "eleven", "noon", "pm", "bad"]
        );
    }

    #[test]
    fn day_view_is_stable_for_equal_times() {
        let events = vec![
            event("first", "2024-03-05", "9:00 AM", EventType::Meeting),
            event("second", "2024-03-05", "9:00 AM", EventType::Lecture),
        ];
        let index = EventIndex::build(&events);
        assert_eq!(ids(&index.day_view("2024-03-05")), ["first", "second"]);
    }

    #[test]
    fn meetings_filter_by_type() {
        let events = vec![
            event("m", "2024-03-05", "9:00 AM", EventType::Meeting),
            event("d", "2024-03-05", "11:59 PM", EventType::Deadline),
            event("other-day", "2024-03-06", "9:00 AM", EventType::Meeting),
        ];
        let index = EventIndex::build(&events);
        assert_eq!(ids(&index.meetings_on("2024-03-05")), ["m"]);
    }
}
