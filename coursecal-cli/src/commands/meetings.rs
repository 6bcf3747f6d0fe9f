use anyhow::Result;
use owo_colors::OwoColorize;

use super::parse_date_arg;
use crate::render::{render_day_heading, render_event_row};
use crate::session::Session;

pub fn run(session: &Session, date: Option<String>) -> Result<()> {
    let planner = &session.planner;
    let date = parse_date_arg(date.as_deref(), planner.today())?;

    println!("{}", render_day_heading(date));

    let meetings = planner.meetings_on(date);
    if meetings.is_empty() {
        println!("  {}", "No meetings scheduled.".dimmed());
        return Ok(());
    }

    let directory = planner.directory();
    for event in meetings {
        println!("{}", render_event_row(event, &directory));
    }

    Ok(())
}
