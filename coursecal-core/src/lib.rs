//! Scheduling engine for coursecal.
//!
//! - [`grid`]: month layout and navigation
//! - [`index`]: events grouped by day
//! - [`time`]: 24-hour edit form ⇄ 12-hour display form
//! - [`store`]: the event collection and its add/update/delete operations
//! - [`modal`]: the event form lifecycle
//! - [`planner`]: the controller tying them together

pub mod config;
pub mod course;
pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod modal;
pub mod planner;
pub mod seed;
pub mod selection;
pub mod snapshot;
pub mod store;
pub mod time;

pub use course::{Course, CourseColor};
pub use error::{CourseCalError, CourseCalResult};
pub use event::{EventDraft, EventType, ScheduleEvent};
pub use planner::Planner;
