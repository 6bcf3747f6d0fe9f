//! Terminal rendering for coursecal types.
//!
//! Extension traits adding colored output to coursecal-core types using owo_colors.

use chrono::NaiveDate;
use coursecal_core::course::{Course, CourseColor, CourseDirectory};
use coursecal_core::event::{EventType, ScheduleEvent};
use coursecal_core::grid::{CalendarCell, WEEKDAY_LABELS, YearMonth};
use owo_colors::OwoColorize;

/// Most event dots shown under a day in the month grid.
const MAX_DOTS: usize = 3;

/// Visible width of one day cell.
const CELL_WIDTH: usize = 8;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for CourseColor {
    /// A dot in the course colour.
    fn render(&self) -> String {
        paint(*self, "●")
    }
}

impl Render for EventType {
    fn render(&self) -> String {
        match self {
            EventType::Meeting => self.label().cyan().to_string(),
            EventType::Lecture => self.label().blue().to_string(),
            EventType::Deadline => self.label().red().to_string(),
        }
    }
}

impl Render for Course {
    fn render(&self) -> String {
        format!(
            "{} {} {}\n   {}  {} {}\n   quiz topic: {}",
            self.color.render(),
            self.title.bold(),
            format!("({})", self.id).dimmed(),
            self.instructor,
            progress_bar(self.progress, self.color),
            format!("{}% complete", self.progress).dimmed(),
            self.quiz_topic.dimmed(),
        )
    }
}

pub fn paint(color: CourseColor, text: &str) -> String {
    match color {
        CourseColor::Blue => text.blue().to_string(),
        CourseColor::Purple => text.magenta().to_string(),
        CourseColor::Green => text.green().to_string(),
        CourseColor::Orange => text.truecolor(255, 165, 0).to_string(),
        CourseColor::Red => text.red().to_string(),
        CourseColor::Pink => text.bright_magenta().to_string(),
        CourseColor::Gray => text.bright_black().to_string(),
    }
}

fn progress_bar(progress: u8, color: CourseColor) -> String {
    const WIDTH: usize = 20;
    let filled = (progress.min(100) as usize * WIDTH) / 100;
    format!(
        "{}{}",
        paint(color, &"█".repeat(filled)),
        "░".repeat(WIDTH - filled).dimmed()
    )
}

/// One line of the day panel: time, title, course and type.
pub fn render_event_line(event: &ScheduleEvent, courses: &CourseDirectory) -> String {
    let color = courses.color_for(&event.course_id);
    format!(
        "  {} {:>8}  {}  {}  {}",
        paint(color, "▌"),
        event.time,
        event.title.bold(),
        courses.label_for(&event.course_id).dimmed(),
        event.event_type.render(),
    )
}

/// A line of the flat event list, with id so it can be edited.
pub fn render_event_row(event: &ScheduleEvent, courses: &CourseDirectory) -> String {
    format!(
        "{} {}",
        render_event_line(event, courses),
        format!("[{}]", event.id).dimmed()
    )
}

/// Day panel heading, e.g. "Tuesday, March 5".
pub fn render_day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string().bold().to_string()
}

/// The month grid: title, weekday header, then one line per week row.
///
/// Today's number is highlighted, the selected day is bracketed, and each day shows up
/// to three dots coloured by course.
pub fn render_month(
    month: YearMonth,
    weeks: &[Vec<Option<CalendarCell>>],
    courses: &CourseDirectory,
) -> String {
    let width = CELL_WIDTH * 7;
    let mut lines = vec![
        format!("{:^width$}", month.to_string()).bold().to_string(),
        WEEKDAY_LABELS
            .iter()
            .map(|d| format!("{:^CELL_WIDTH$}", d))
            .collect::<String>()
            .dimmed()
            .to_string(),
    ];

    for week in weeks {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => render_cell(cell, courses),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn render_cell(cell: &CalendarCell, courses: &CourseDirectory) -> String {
    let number = format!("{:>2}", cell.day);
    let number = if cell.is_today {
        number.reversed().bold().to_string()
    } else {
        number
    };
    let (open, close) = if cell.is_selected { ("[", "]") } else { (" ", " ") };

    let dots: String = cell
        .events
        .iter()
        .take(MAX_DOTS)
        .map(|e| courses.color_for(&e.course_id).render())
        .collect();
    let padding = " ".repeat(MAX_DOTS - cell.events.len().min(MAX_DOTS));

    // bracket, two digits, bracket, three dot columns, gap
    format!("{open}{number}{close}{dots}{padding} ")
}
