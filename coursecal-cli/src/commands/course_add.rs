use anyhow::Result;
use coursecal_core::course::{CourseColor, NewCourse};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::render::paint;
use crate::session::Session;

pub fn run(
    session: &mut Session,
    title: Option<String>,
    instructor: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || instructor.is_none();

    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Course title")
            .interact_text()?,
    };

    let instructor = match instructor {
        Some(i) => i,
        None => Input::<String>::new()
            .with_prompt("  Instructor")
            .interact_text()?,
    };

    let color = match color {
        Some(c) => c.parse()?,
        None if interactive => {
            let labels: Vec<String> = CourseColor::PALETTE
                .iter()
                .map(|c| paint(*c, c.as_str()))
                .collect();
            let picked = Select::new()
                .with_prompt("  Color")
                .items(&labels)
                .default(0)
                .interact()?;
            CourseColor::PALETTE[picked]
        }
        None => CourseColor::PALETTE[0],
    };

    let id = session.planner.add_course(NewCourse {
        title: title.clone(),
        instructor,
        color,
    })?;
    println!(
        "{} {}",
        format!("  Created course: {}", title).green(),
        format!("({})", id).dimmed()
    );

    session.save()?;
    Ok(())
}
