use anyhow::Result;
use coursecal_core::grid::YearMonth;

use super::parse_date_arg;
use crate::render::{Render, render_month};
use crate::session::Session;

pub fn run(
    session: &mut Session,
    year: Option<i32>,
    month: Option<i32>,
    offset: i32,
    select: Option<String>,
) -> Result<()> {
    let planner = &mut session.planner;

    if let Some(date) = select {
        let date = parse_date_arg(Some(&date), planner.today())?;
        planner.select_date(date);
    }

    if year.is_some() || month.is_some() {
        let shown = planner.selection().displayed_month();
        planner.show_month(YearMonth::new(
            year.unwrap_or(shown.year()),
            month.map(|m| m - 1).unwrap_or(shown.month0() as i32),
        ));
    }

    if offset != 0 {
        let target = planner.selection().displayed_month().offset(offset);
        planner.show_month(target);
    }

    let directory = planner.directory();
    let weeks = planner.month_weeks();
    println!(
        "{}",
        render_month(planner.selection().displayed_month(), &weeks, &directory)
    );

    println!();
    for course in directory.iter() {
        println!("  {} {}", course.color.render(), course.title);
    }

    Ok(())
}
