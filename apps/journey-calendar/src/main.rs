//! Journey Calendar - atomic-habits style tracking of daily problem solving.

mod app;

use app::{Action, App};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use journey_core::{CalendarStore, Config};
use std::path::PathBuf;

const USAGE_HINT: &str = "Unknown command. Use: mark, stats, month, or year";

/// Mark daily progress and print calendars. Without a command, prints the
/// current month and statistics.
#[derive(Debug, Parser)]
#[command(name = "journey-calendar", version)]
struct Cli {
    /// Configuration file (defaults to journey.toml, then the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository root holding stats/calendar.json.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Mark today as completed.
    Mark {
        /// Problems solved.
        #[arg(default_value_t = 1)]
        count: u32,
    },
    /// Show statistics.
    Stats,
    /// Show the current month.
    Month,
    /// Show a full year.
    Year {
        /// Year to show, defaults to the current one.
        year: Option<i32>,
    },
}

impl Cli {
    /// What to run; no command means the overview.
    fn action(&self) -> Action {
        match &self.command {
            None => Action::Overview,
            Some(Command::Mark { count }) => Action::Mark(*count),
            Some(Command::Stats) => Action::Stats,
            Some(Command::Month) => Action::Month,
            Some(Command::Year { year }) => Action::Year(*year),
        }
    }
}

/// How a failed parse is reported.
#[derive(Debug, PartialEq, Eq)]
enum ParseFailure {
    /// `--help` or `--version`: print clap's text.
    Info,
    /// Not one of the known commands: print the usage hint.
    UnknownCommand,
    /// A known command with a bad value: print clap's message.
    BadValue,
}

fn classify(kind: ErrorKind) -> ParseFailure {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseFailure::Info,
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
            ParseFailure::UnknownCommand
        }
        _ => ParseFailure::BadValue,
    }
}

fn main() -> anyhow::Result<()> {
    journey_core::logging::init();

    // Every outcome exits 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            match classify(e.kind()) {
                ParseFailure::UnknownCommand => {
                    tracing::debug!(error = %e, "unrecognised arguments");
                    println!("{USAGE_HINT}");
                }
                ParseFailure::Info | ParseFailure::BadValue => e.print()?,
            }
            return Ok(());
        }
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(root) = cli.root.clone() {
        config.paths.root = root;
    }

    let store = CalendarStore::load(config.paths.calendar_file())?;
    let mut app = App::new(store);
    print!("{}", app.run(cli.action())?);
    Ok(())
}
