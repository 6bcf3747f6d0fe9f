use anyhow::Result;
use coursecal_core::event::parse_date_key;
use owo_colors::OwoColorize;

use crate::render::{render_day_heading, render_event_row};
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let planner = &session.planner;
    let events = planner.events();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let directory = planner.directory();

    // Group consecutive events by day
    let mut current_date: Option<&str> = None;

    for event in events {
        if current_date != Some(event.date.as_str()) {
            if current_date.is_some() {
                println!();
            }
            match parse_date_key(&event.date) {
                Ok(date) => println!("{}", render_day_heading(date)),
                Err(_) => println!("{}", event.date.bold()),
            }
            current_date = Some(&event.date);
        }

        println!("{}", render_event_row(event, &directory));
    }

    Ok(())
}
