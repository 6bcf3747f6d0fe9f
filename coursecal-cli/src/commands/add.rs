use anyhow::Result;
use owo_colors::OwoColorize;

use super::{FormArgs, fill_form, parse_date_arg, submit};
use crate::session::Session;

pub fn run(session: &mut Session, args: FormArgs) -> Result<()> {
    let interactive = args.title.is_none();
    let planner = &mut session.planner;

    let date = parse_date_arg(args.date.as_deref(), planner.today())?;
    planner.select_date(date);
    planner.open_create();

    fill_form(planner, args, interactive)?;
    let id = submit(session)?;

    if interactive {
        println!();
    }
    if let Some(event) = session.planner.event(&id) {
        println!(
            "{} {}",
            format!("  Scheduled: {} on {} at {}", event.title, event.date, event.time).green(),
            format!("[{}]", id).dimmed()
        );
    }

    Ok(())
}
