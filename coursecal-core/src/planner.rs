//! Top-level controller owning the session: courses, events, selection and the event form.
//!
//! Views read through the planner and every mutation goes through it, so the store's
//! ordering and id invariants are maintained in one place.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::course::{Course, CourseDirectory, NewCourse};
use crate::error::{CourseCalError, CourseCalResult};
use crate::event::ScheduleEvent;
use crate::grid::{CalendarCell, MonthView, YearMonth};
use crate::index::EventIndex;
use crate::modal::{EventForm, EventModal};
use crate::seed;
use crate::selection::Selection;
use crate::snapshot::Snapshot;
use crate::store::{EventStore, IdGenerator, StoreOptions};

pub struct Planner {
    courses: Vec<Course>,
    store: EventStore,
    selection: Selection,
    modal: EventModal,
    today: NaiveDate,
    course_ids: IdGenerator,
}

impl Planner {
    pub fn new(
        courses: Vec<Course>,
        events: Vec<ScheduleEvent>,
        options: StoreOptions,
        today: NaiveDate,
    ) -> Self {
        Planner {
            courses,
            store: EventStore::with_events(events, options),
            selection: Selection::new(today),
            modal: EventModal::Closed,
            today,
            course_ids: IdGenerator::new("course", options.id_strategy),
        }
    }

    /// A fresh session with the sample courses and this month's sample events.
    pub fn seeded(options: StoreOptions, today: NaiveDate) -> Self {
        info!("starting from sample schedule");
        Planner::new(seed::courses(), seed::events(YearMonth::of(today)), options, today)
    }

    /// Restore from a snapshot, or seed if there is none.
    pub fn from_snapshot(snapshot: Option<Snapshot>, options: StoreOptions, today: NaiveDate) -> Self {
        match snapshot {
            Some(s) => Planner::new(s.courses, s.events, options, today),
            None => Planner::seeded(options, today),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            courses: self.courses.clone(),
            events: self.store.events().to_vec(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // COURSES:

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn directory(&self) -> CourseDirectory<'_> {
        CourseDirectory::new(&self.courses)
    }

    /// Create a course and return its id.
    pub fn add_course(&mut self, new_course: NewCourse) -> CourseCalResult<String> {
        let course = new_course.into_course(self.course_ids.next_id())?;
        info!(id = %course.id, title = %course.title, "added course");
        let id = course.id.clone();
        self.courses.push(course);
        Ok(id)
    }

    // EVENTS (read side, rebuilt on every call):

    pub fn events(&self) -> &[ScheduleEvent] {
        self.store.events()
    }

    pub fn event(&self, id: &str) -> Option<&ScheduleEvent> {
        self.store.get(id)
    }

    pub fn index(&self) -> EventIndex<'_> {
        EventIndex::build(self.store.events())
    }

    /// Week rows of the displayed month; `None` for leading blanks.
    pub fn month_weeks(&self) -> Vec<Vec<Option<CalendarCell<'_>>>> {
        let view = MonthView::new(self.selection.displayed_month());
        view.weeks(&self.index(), self.today, self.selection.selected_date())
    }

    /// Events of the selected day, in time order.
    pub fn selected_day_events(&self) -> Vec<&ScheduleEvent> {
        self.index().day_view(&self.selection.selected_key())
    }

    pub fn meetings_on(&self, date: NaiveDate) -> Vec<&ScheduleEvent> {
        self.index().meetings_on(&crate::event::date_key(date))
    }

    // NAVIGATION:

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn prev_month(&mut self) -> YearMonth {
        self.selection.prev_month()
    }

    pub fn next_month(&mut self) -> YearMonth {
        self.selection.next_month()
    }

    pub fn show_month(&mut self, month: YearMonth) -> YearMonth {
        self.selection.show_month(month)
    }

    pub fn select_day(&mut self, day: u32) -> Option<NaiveDate> {
        self.selection.select_day(day)
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selection.select_date(date)
    }

    // EVENT FORM:

    pub fn modal(&self) -> &EventModal {
        &self.modal
    }

    /// Open a blank form for the selected day.
    pub fn open_create(&mut self) {
        let date = self.selection.selected_key();
        self.modal.open_for_create(&CourseDirectory::new(&self.courses), &date);
    }

    pub fn open_edit(&mut self, id: &str) -> CourseCalResult<()> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| CourseCalError::EventNotFound(id.to_string()))?;
        self.modal.open_for_edit(event)
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        self.modal.form_mut()
    }

    /// Save the open form. On validation failure the form stays open with its message.
    pub fn submit(&mut self) -> CourseCalResult<Option<String>> {
        let editing = self.modal.is_editing();
        let saved = self.modal.save(&mut self.store)?;
        if let Some(id) = &saved {
            debug!(id = %id, editing, total = self.store.len(), "event saved");
        }
        Ok(saved)
    }

    /// Delete the event open for editing.
    pub fn delete_editing(&mut self) -> bool {
        self.modal.delete(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.modal.cancel()
    }
}
