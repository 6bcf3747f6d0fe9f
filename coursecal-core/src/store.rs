//! The event collection and its mutations.
//!
//! Invariants kept here:
//! - ids are unique within the collection
//! - after every `add`, the collection is ordered by date (stable, so events on the same
//!   day keep their insertion order)
//!
//! `update` and `delete` don't re-sort unless the store was built with
//! `resort_on_edit`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{EventDraft, ScheduleEvent};

/// How new ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<prefix>-<unix millis>`, bumped so it always increases within a session.
    #[default]
    Timestamp,
    /// `<prefix>-<uuid v4>`
    Uuid,
}

#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    strategy: IdStrategy,
    last_millis: i64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str, strategy: IdStrategy) -> Self {
        IdGenerator {
            prefix,
            strategy,
            last_millis: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        match self.strategy {
            IdStrategy::Timestamp => {
                let millis = Utc::now().timestamp_millis().max(self.last_millis + 1);
                self.last_millis = millis;
                format!("{}-{}", self.prefix, millis)
            }
            IdStrategy::Uuid => format!("{}-{}", self.prefix, uuid::Uuid::new_v4()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    pub id_strategy: IdStrategy,
    /// Re-sort by date after `update` too, not only after `add`.
    pub resort_on_edit: bool,
}

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<ScheduleEvent>,
    ids: IdGenerator,
    resort_on_edit: bool,
}

impl Default for EventStore {
    fn default() -> Self {
        EventStore::new(StoreOptions::default())
    }
}

impl EventStore {
    pub fn new(options: StoreOptions) -> Self {
        EventStore::with_events(Vec::new(), options)
    }

    /// Wrap an existing collection. Its order is kept as-is.
    pub fn with_events(events: Vec<ScheduleEvent>, options: StoreOptions) -> Self {
        EventStore {
            events,
            ids: IdGenerator::new("evt", options.id_strategy),
            resort_on_edit: options.resort_on_edit,
        }
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Insert a new event and return its id.
    pub fn add(&mut self, draft: EventDraft) -> String {
        let id = self.fresh_id();
        debug!(id = %id, date = %draft.date, time = %draft.time, "adding event");

        self.events.push(draft.with_id(id.clone()));
        self.sort_by_date();
        id
    }

    /// Replace the event with the same id. Returns false (and changes nothing) if there is
    /// no such event.
    pub fn update(&mut self, event: ScheduleEvent) -> bool {
        let Some(slot) = self.events.iter_mut().find(|e| e.id == event.id) else {
            debug!(id = %event.id, "update of unknown event ignored");
            return false;
        };

        debug!(id = %event.id, date = %event.date, time = %event.time, "updating event");
        *slot = event;

        if self.resort_on_edit {
            self.sort_by_date();
        }
        true
    }

    /// Remove the event with this id. Returns false if there was none.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);

        let removed = self.events.len() != before;
        if removed {
            debug!(id = %id, "deleted event");
        } else {
            debug!(id = %id, "delete of unknown event ignored");
        }
        removed
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn sort_by_date(&mut self) {
        self.events.sort_by(|a, b| a.date.cmp(&b.date));
    }
}
