use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let courses = session.planner.courses();

    if courses.is_empty() {
        println!("{}", "No courses yet. Create one with `coursecal course-add`".dimmed());
        return Ok(());
    }

    for (i, course) in courses.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", course.render());
    }

    Ok(())
}
