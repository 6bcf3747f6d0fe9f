use anyhow::Result;
use owo_colors::OwoColorize;

use super::{FormArgs, fill_form, submit};
use crate::session::Session;

pub fn run(session: &mut Session, id: &str, args: FormArgs) -> Result<()> {
    let interactive = args.is_empty();
    session.planner.open_edit(id)?;

    fill_form(&mut session.planner, args, interactive)?;
    let id = submit(session)?;

    if let Some(event) = session.planner.event(&id) {
        println!(
            "{}",
            format!("  Updated: {} on {} at {}", event.title, event.date, event.time).yellow()
        );
    }

    Ok(())
}
