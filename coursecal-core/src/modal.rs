//! The event form and its open/save/delete/cancel lifecycle.
//!
//! ```text
//! Closed ──open_for_create──▶ Open(Create) ──save ok / cancel──▶ Closed
//!        ──open_for_edit────▶ Open(Edit)   ──save ok / delete / cancel──▶ Closed
//! ```
//!
//! A save that fails validation leaves the modal open with an error message and
//! doesn't touch the store.

use tracing::debug;

use crate::course::CourseDirectory;
use crate::error::{CourseCalError, CourseCalResult};
use crate::event::{EventDraft, EventType, ScheduleEvent};
use crate::store::EventStore;
use crate::time::{self, DEFAULT_EDIT_TIME};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and course are required.";

/// Contents of the event form. `time` is in edit form (`HH:MM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub course_id: String,
    pub date: String,
    pub time: String,
    pub event_type: EventType,
}

impl EventForm {
    /// Blank form for a new event on `date`, preselecting the first course.
    pub fn for_new(courses: &CourseDirectory, date: &str) -> Self {
        EventForm {
            title: String::new(),
            course_id: courses.first().map(|c| c.id.clone()).unwrap_or_default(),
            date: date.to_string(),
            time: DEFAULT_EDIT_TIME.to_string(),
            event_type: EventType::default(),
        }
    }

    /// Form prefilled from a stored event.
    pub fn from_event(event: &ScheduleEvent) -> CourseCalResult<Self> {
        Ok(EventForm {
            title: event.title.clone(),
            course_id: event.course_id.clone(),
            date: event.date.clone(),
            time: time::decode(&event.time)?,
            event_type: event.event_type,
        })
    }

    pub fn validate(&self) -> CourseCalResult<()> {
        if self.title.trim().is_empty() || self.course_id.is_empty() {
            return Err(CourseCalError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Validate and convert to the persisted form.
    pub fn to_draft(&self) -> CourseCalResult<EventDraft> {
        self.validate()?;
        Ok(EventDraft {
            course_id: self.course_id.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
            time: time::encode(&self.time)?,
            event_type: self.event_type,
        })
    }
}

/// Write a submitted form to the store: update `editing` if set, add otherwise.
///
/// Returns the id of the saved event, or `EventNotFound` if the edited event is gone.
pub fn save_form(store: &mut EventStore, form: &EventForm, editing: Option<&str>) -> CourseCalResult<String> {
    let draft = form.to_draft()?;

    match editing {
        Some(id) => {
            if !store.update(draft.with_id(id.to_string())) {
                return Err(CourseCalError::EventNotFound(id.to_string()));
            }
            Ok(id.to_string())
        }
        None => Ok(store.add(draft)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit { event_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventModal {
    #[default]
    Closed,
    Open {
        mode: ModalMode,
        form: EventForm,
        error: Option<String>,
    },
}

impl EventModal {
    pub fn is_open(&self) -> bool {
        matches!(self, EventModal::Open { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EventModal::Open { mode: ModalMode::Edit { .. }, .. })
    }

    pub fn open_for_create(&mut self, courses: &CourseDirectory, date: &str) {
        debug!(date = %date, "opening event form");
        *self = EventModal::Open {
            mode: ModalMode::Create,
            form: EventForm::for_new(courses, date),
            error: None,
        };
    }

    pub fn open_for_edit(&mut self, event: &ScheduleEvent) -> CourseCalResult<()> {
        debug!(id = %event.id, "opening event form for edit");
        *self = EventModal::Open {
            mode: ModalMode::Edit {
                event_id: event.id.clone(),
            },
            form: EventForm::from_event(event)?,
            error: None,
        };
        Ok(())
    }

    pub fn form(&self) -> Option<&EventForm> {
        match self {
            EventModal::Open { form, .. } => Some(form),
            EventModal::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        match self {
            EventModal::Open { form, .. } => Some(form),
            EventModal::Closed => None,
        }
    }

    /// Validation message from the last failed save.
    pub fn error(&self) -> Option<&str> {
        match self {
            EventModal::Open { error, .. } => error.as_deref(),
            EventModal::Closed => None,
        }
    }

    /// Save the form and close. Does nothing and returns `Ok(None)` if closed.
    pub fn save(&mut self, store: &mut EventStore) -> CourseCalResult<Option<String>> {
        let EventModal::Open { mode, form, error } = self else {
            return Ok(None);
        };

        let editing = match mode {
            ModalMode::Edit { event_id } => Some(event_id.as_str()),
            ModalMode::Create => None,
        };

        match save_form(store, form, editing) {
            Ok(id) => {
                *self = EventModal::Closed;
                Ok(Some(id))
            }
            Err(e) => {
                if e.is_validation() {
                    debug!(reason = %e, "event form rejected");
                    *error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Delete the event being edited and close. Returns false unless in edit mode.
    pub fn delete(&mut self, store: &mut EventStore) -> bool {
        let EventModal::Open {
            mode: ModalMode::Edit { event_id },
            ..
        } = self
        else {
            return false;
        };

        let deleted = store.delete(event_id);
        *self = EventModal::Closed;
        deleted
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("event form cancelled");
        }
        *self = EventModal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{Course, CourseColor};

    fn courses() -> Vec<Course> {
        vec![Course {
            id: "1".to_string(),
            title: "Quantum Physics".to_string(),
            instructor: "Dr. Evelyn Reed".to_string(),
            progress: 75,
            color: CourseColor::Blue,
            quiz_topic: "Quantum Mechanics".to_string(),
        }]
    }

    fn sync_form() -> EventForm {
        EventForm {
            title: "Sync".to_string(),
            course_id: "1".to_string(),
            date: "2024-03-05".to_string(),
            time: "09:00".to_string(),
            event_type: EventType::Meeting,
        }
    }

    #[test]
    fn new_form_defaults() {
        let courses = courses();
        let form = EventForm::for_new(&CourseDirectory::new(&courses), "2024-03-05");
        assert_eq!(form.course_id, "1");
        assert_eq!(form.time, "12:00");
        assert_eq!(form.event_type, EventType::Meeting);
        assert_eq!(form.date, "2024-03-05");
        assert!(form.title.is_empty());
    }

    #[test]
    fn new_form_without_courses_has_no_course() {
        let form = EventForm::for_new(&CourseDirectory::new(&[]), "2024-03-05");
        assert!(form.course_id.is_empty());
        assert!(form.validate().is_err());
    }

    #[test]
    fn save_then_edit_round_trips_time() {
        let mut store = EventStore::default();
        let id = save_form(&mut store, &sync_form(), None).unwrap();

        let stored = store.get(&id).unwrap();
        assert_eq!(stored.time, "9:00 AM");

        let form = EventForm::from_event(stored).unwrap();
        assert_eq!(form.time, "09:00");
        assert_eq!(form, sync_form());
    }

    #[test]
    fn validation_rejects_missing_title_or_course() {
        let mut store = EventStore::default();

        let mut form = sync_form();
        form.title = "   ".to_string();
        let err = save_form(&mut store, &form, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);

        let mut form = sync_form();
        form.course_id.clear();
        assert!(save_form(&mut store, &form, None).is_err());

        assert!(store.is_empty());
    }

    #[test]
    fn create_lifecycle() {
        let courses = courses();
        let mut store = EventStore::default();
        let mut modal = EventModal::default();
        assert!(!modal.is_open());

        modal.open_for_create(&CourseDirectory::new(&courses), "2024-03-05");
        assert!(modal.is_open() && !modal.is_editing());

        // empty title: stays open with message
        assert!(modal.save(&mut store).is_err());
        assert!(modal.is_open());
        assert_eq!(modal.error(), Some(REQUIRED_FIELDS_MESSAGE));
        assert!(store.is_empty());

        modal.form_mut().unwrap().title = "Sync".to_string();
        let id = modal.save(&mut store).unwrap().unwrap();
        assert!(!modal.is_open());
        assert_eq!(store.get(&id).unwrap().time, "12:00 PM");
    }

    #[test]
    fn edit_lifecycle_updates_in_place() {
        let mut store = EventStore::default();
        let id = save_form(&mut store, &sync_form(), None).unwrap();
        let mut modal = EventModal::default();

        modal.open_for_edit(store.get(&id).unwrap()).unwrap();
        assert!(modal.is_editing());
        assert_eq!(modal.form().unwrap().time, "09:00");

        modal.form_mut().unwrap().time = "14:30".to_string();
        assert_eq!(modal.save(&mut store).unwrap(), Some(id.clone()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().time, "2:30 PM");
    }

    #[test]
    fn saving_an_edit_of_a_removed_event_fails() {
        let mut store = EventStore::default();
        let id = save_form(&mut store, &sync_form(), None).unwrap();

        let mut modal = EventModal::default();
        modal.open_for_edit(store.get(&id).unwrap()).unwrap();
        assert!(store.delete(&id));

        let err = modal.save(&mut store).unwrap_err();
        assert!(matches!(err, CourseCalError::EventNotFound(ref missing) if *missing == id));
        assert!(store.is_empty());

        let err = save_form(&mut store, &sync_form(), Some("gone")).unwrap_err();
        assert!(matches!(err, CourseCalError::EventNotFound(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn cancel_discards_edits() {
        let mut store = EventStore::default();
        let id = save_form(&mut store, &sync_form(), None).unwrap();
        let before = store.events().to_vec();

        let mut modal = EventModal::default();
        modal.open_for_edit(store.get(&id).unwrap()).unwrap();
        modal.form_mut().unwrap().title = "Changed".to_string();
        modal.cancel();

        assert!(!modal.is_open());
        assert_eq!(store.events(), before.as_slice());
        assert_eq!(modal.save(&mut store).unwrap(), None);
    }

    #[test]
    fn delete_only_in_edit_mode() {
        let courses = courses();
        let mut store = EventStore::default();
        let id = save_form(&mut store, &sync_form(), None).unwrap();

        let mut modal = EventModal::default();
        modal.open_for_create(&CourseDirectory::new(&courses), "2024-03-05");
        assert!(!modal.delete(&mut store));
        assert_eq!(store.len(), 1);

        modal.open_for_edit(store.get(&id).unwrap()).unwrap();
        assert!(modal.delete(&mut store));
        assert!(store.is_empty());
        assert!(!modal.is_open());
    }
}
