use anyhow::Result;
use owo_colors::OwoColorize;

use super::parse_date_arg;
use crate::render::{render_day_heading, render_event_row};
use crate::session::Session;

pub fn run(session: &mut Session, date: Option<String>) -> Result<()> {
    let planner = &mut session.planner;
    let date = parse_date_arg(date.as_deref(), planner.today())?;
    planner.select_date(date);

    println!("{}", render_day_heading(date));

    let events = planner.selected_day_events();
    if events.is_empty() {
        println!("  {}", "No events scheduled for this day.".dimmed());
        return Ok(());
    }

    let directory = planner.directory();
    for event in events {
        println!("{}", render_event_row(event, &directory));
    }

    Ok(())
}
