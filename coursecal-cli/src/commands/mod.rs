pub mod add;
pub mod course_add;
pub mod courses;
pub mod day;
pub mod delete;
pub mod edit;
pub mod events;
pub mod meetings;
pub mod month;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use coursecal_core::Planner;
use coursecal_core::course::CourseDirectory;
use coursecal_core::event::{EventType, date_key, parse_date_key};
use coursecal_core::time::ClockTime;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::session::Session;

/// Event form fields given on the command line.
pub struct FormArgs {
    pub title: Option<String>,
    pub course: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub event_type: Option<String>,
}

impl FormArgs {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.course.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.event_type.is_none()
    }
}

/// Parse a date argument: `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_date_arg(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input.map(str::trim) {
        None | Some("today") => Ok(today),
        Some("tomorrow") => Ok(today + Duration::days(1)),
        Some("yesterday") => Ok(today - Duration::days(1)),
        Some(s) => Ok(parse_date_key(s)?),
    }
}

/// Fill the open event form from arguments, prompting for the rest when `interactive`.
pub fn fill_form(planner: &mut Planner, args: FormArgs, interactive: bool) -> Result<()> {
    let courses = planner.courses().to_vec();
    let today = planner.today();
    let form = planner.form_mut().context("No event form is open")?;

    // --- Title ---
    if let Some(title) = args.title {
        form.title = title;
    } else if interactive {
        let mut input = Input::<String>::new().with_prompt("  Title");
        if !form.title.is_empty() {
            input = input.default(form.title.clone());
        }
        form.title = input.interact_text()?;
    }

    // --- Course ---
    if let Some(course) = args.course {
        if !CourseDirectory::new(&courses).contains(&course) {
            tracing::warn!(course = %course, "Unknown course id, event will show as General");
        }
        form.course_id = course;
    } else if interactive && !courses.is_empty() {
        let labels: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        let current = courses.iter().position(|c| c.id == form.course_id).unwrap_or(0);
        let picked = Select::new()
            .with_prompt("  Course")
            .items(&labels)
            .default(current)
            .interact()?;
        form.course_id = courses[picked].id.clone();
    }

    // --- Date ---
    if let Some(date) = args.date {
        form.date = date_key(parse_date_arg(Some(&date), today)?);
    } else if interactive {
        form.date = prompt_with_retry("  Date (YYYY-MM-DD)", &form.date, |s| {
            Ok(date_key(parse_date_arg(Some(s), today)?))
        })?;
    }

    // --- Time ---
    if let Some(time) = args.time {
        form.time = time;
    } else if interactive {
        form.time = prompt_with_retry("  Time (HH:MM)", &form.time, |s| {
            Ok(ClockTime::from_edit(s)?.to_edit())
        })?;
    }

    // --- Type ---
    if let Some(event_type) = args.event_type {
        form.event_type = event_type.parse()?;
    } else if interactive {
        let labels: Vec<&str> = EventType::ALL.iter().map(|t| t.label()).collect();
        let current = EventType::ALL
            .iter()
            .position(|t| *t == form.event_type)
            .unwrap_or(0);
        let picked = Select::new()
            .with_prompt("  Type")
            .items(&labels)
            .default(current)
            .interact()?;
        form.event_type = EventType::ALL[picked];
    }

    Ok(())
}

/// Save the open form and write the session to disk. Returns the event id.
pub fn submit(session: &mut Session) -> Result<String> {
    let id = session
        .planner
        .submit()?
        .context("No event form is open")?;
    session.save()?;
    Ok(id)
}

/// Prompt until `parse` accepts the input.
fn prompt_with_retry<F>(prompt: &str, default: &str, parse: F) -> Result<String>
where
    F: Fn(&str) -> Result<String>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
