use anyhow::{Context, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &mut Session, id: &str, yes: bool) -> Result<()> {
    let planner = &mut session.planner;
    planner.open_edit(id)?;

    let title = planner
        .modal()
        .form()
        .map(|f| f.title.clone())
        .context("No event form is open")?;

    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!("Are you sure you want to delete \"{}\"?", title))
            .default(false)
            .interact()?;

    if !confirmed {
        planner.cancel();
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    planner.delete_editing();
    session.save()?;

    println!("{}", format!("  Deleted: {}", title).red());
    Ok(())
}
