//! Month grid generation.
//!
//! All computation is on calendar dates in the proleptic Gregorian calendar; no instants
//! and no timezones are involved. Months are zero-based (0 = January) throughout this
//! module, with weeks starting on Sunday.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::ScheduleEvent;
use crate::index::EventIndex;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers of the grid, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a zero-based month. Out-of-range months roll over into
/// neighbouring years.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    YearMonth::new(year, month).days_in_month()
}

/// Weekday of the 1st of a zero-based month, 0 = Sunday.
pub fn first_weekday(year: i32, month: i32) -> u32 {
    YearMonth::new(year, month).first_weekday()
}

/// A displayed month. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Any month index is accepted: -1 is December of the previous year, 12 is January of
    /// the next one.
    pub fn new(year: i32, month: i32) -> Self {
        let total = year as i64 * 12 + month as i64;
        YearMonth {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month.
    pub fn month0(&self) -> u32 {
        self.month
    }

    /// One-based month, as written in dates.
    pub fn month1(&self) -> u32 {
        self.month + 1
    }

    pub fn next(&self) -> Self {
        YearMonth::new(self.year, self.month as i32 + 1)
    }

    pub fn prev(&self) -> Self {
        YearMonth::new(self.year, self.month as i32 - 1)
    }

    pub fn offset(&self, months: i32) -> Self {
        YearMonth::new(self.year, self.month as i32 + months)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
            3 | 5 | 8 | 10 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Weekday of the 1st, 0 = Sunday (Sakamoto's method).
    pub fn first_weekday(&self) -> u32 {
        const T: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if self.month < 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let raw = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + T[self.month as usize] + 1;
        raw.rem_euclid(7) as u32
    }

    /// The date of `day` in this month, if it exists and chrono can represent it.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month1(), day)
    }

    /// Event date key (`YYYY-MM-DD`) of `day` in this month.
    pub fn date_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month1(), day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        YearMonth::of(date) == *self
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Leading blanks followed by one slot per day.
    pub fn layout(&self) -> Vec<Option<u32>> {
        let blanks = self.first_weekday() as usize;
        std::iter::repeat_n(None, blanks)
            .chain((1..=self.days_in_month()).map(Some))
            .collect()
    }
}

impl fmt::Display for YearMonth {
    /// "March 2024"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// One day square of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell<'a> {
    pub day: u32,
    pub date: String,
    pub is_today: bool,
    pub is_selected: bool,
    pub events: Vec<&'a ScheduleEvent>,
}

/// Cells of a month, recomputed from the month and the event index on every call.
pub struct MonthView {
    month: YearMonth,
}

impl MonthView {
    pub fn new(month: YearMonth) -> Self {
        MonthView { month }
    }

    /// `None` for each leading blank, then one cell per day.
    pub fn cells<'a>(
        &self,
        index: &EventIndex<'a>,
        today: NaiveDate,
        selected: NaiveDate,
    ) -> Vec<Option<CalendarCell<'a>>> {
        let same_day = |date: NaiveDate, day: u32| self.month.contains(date) && date.day() == day;

        self.month
            .layout()
            .into_iter()
            .map(|slot| {
                slot.map(|day| {
                    let date = self.month.date_key(day);
                    CalendarCell {
                        day,
                        is_today: same_day(today, day),
                        is_selected: same_day(selected, day),
                        events: index.events_on(&date).to_vec(),
                        date,
                    }
                })
            })
            .collect()
    }

    /// The cells split into rows of seven. The last row may be short.
    pub fn weeks<'a>(
        &self,
        index: &EventIndex<'a>,
        today: NaiveDate,
        selected: NaiveDate,
    ) -> Vec<Vec<Option<CalendarCell<'a>>>> {
        let cells = self.cells(index, today, selected);
        cells.chunks(7).map(|row| row.to_vec()).collect()
    }
}
