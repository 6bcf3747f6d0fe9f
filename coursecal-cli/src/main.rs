mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::Session;

#[derive(Parser)]
#[command(name = "coursecal")]
#[command(about = "Plan lectures, meetings and deadlines for your courses")]
struct Cli {
    /// Use this schedule file instead of the one in config.toml
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        #[arg(long)]
        year: Option<i32>,

        /// Month number, 1-12
        #[arg(long)]
        month: Option<i32>,

        /// Months before (negative) or after the current one
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        offset: i32,

        /// Highlight this day (YYYY-MM-DD)
        #[arg(long)]
        select: Option<String>,
    },
    /// Show the events of a day, ordered by time
    Day {
        /// YYYY-MM-DD, defaults to today
        date: Option<String>,
    },
    /// List all events in date order
    Events,
    /// List meetings on a day
    Meetings {
        /// YYYY-MM-DD, defaults to today
        date: Option<String>,
    },
    /// Schedule a new event (prompts for anything not given)
    Add {
        #[arg(short, long)]
        title: Option<String>,

        /// Course id
        #[arg(short, long)]
        course: Option<String>,

        /// YYYY-MM-DD, defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// 24-hour HH:MM
        #[arg(long)]
        time: Option<String>,

        /// meeting, lecture or deadline
        #[arg(long = "type")]
        event_type: Option<String>,
    },
    /// Change an existing event (prompts when no field is given)
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        course: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long = "type")]
        event_type: Option<String>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// List courses
    Courses,
    /// Create a course (prompts for anything not given)
    CourseAdd {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        instructor: Option<String>,

        /// blue, purple, green, orange, red or pink
        #[arg(long)]
        color: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut session = Session::load(cli.data)?;

    match cli.command {
        Commands::Month {
            year,
            month,
            offset,
            select,
        } => commands::month::run(&mut session, year, month, offset, select),
        Commands::Day { date } => commands::day::run(&mut session, date),
        Commands::Events => commands::events::run(&session),
        Commands::Meetings { date } => commands::meetings::run(&session, date),
        Commands::Add {
            title,
            course,
            date,
            time,
            event_type,
        } => commands::add::run(
            &mut session,
            commands::FormArgs {
                title,
                course,
                date,
                time,
                event_type,
            },
        ),
        Commands::Edit {
            id,
            title,
            course,
            date,
            time,
            event_type,
        } => commands::edit::run(
            &mut session,
            &id,
            commands::FormArgs {
                title,
                course,
                date,
                time,
                event_type,
            },
        ),
        Commands::Delete { id, yes } => commands::delete::run(&mut session, &id, yes),
        Commands::Courses => commands::courses::run(&session),
        Commands::CourseAdd {
            title,
            instructor,
            color,
        } => commands::course_add::run(&mut session, title, instructor, color),
    }
}
