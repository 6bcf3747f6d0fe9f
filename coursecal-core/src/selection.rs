//! Which month is on screen and which day is selected.
//!
//! Session state only; never persisted.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::event::date_key;
use crate::grid::YearMonth;

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    displayed: YearMonth,
    selected: NaiveDate,
}

impl Selection {
    /// Start on `today`, showing its month.
    pub fn new(today: NaiveDate) -> Self {
        Selection {
            displayed: YearMonth::of(today),
            selected: today,
        }
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    /// Selected date as an event date key.
    pub fn selected_key(&self) -> String {
        date_key(self.selected)
    }

    /// Navigating doesn't move the selected day.
    pub fn prev_month(&mut self) -> YearMonth {
        self.show_month(self.displayed.prev())
    }

    pub fn next_month(&mut self) -> YearMonth {
        self.show_month(self.displayed.next())
    }

    pub fn show_month(&mut self, month: YearMonth) -> YearMonth {
        debug!(month = %month, "showing month");
        self.displayed = month;
        month
    }

    /// Select a day of the displayed month. Days that don't exist in it are ignored.
    pub fn select_day(&mut self, day: u32) -> Option<NaiveDate> {
        let date = self.displayed.date(day)?;
        self.selected = date;
        Some(date)
    }

    /// Select any date, bringing its month on screen.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = date;
        self.displayed = YearMonth::of(date);
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(today())
    }
}
