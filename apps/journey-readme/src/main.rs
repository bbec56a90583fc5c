//! Journey Readme - regenerate README.md from stats, calendar, and problem files.

mod inputs;
mod render;

use chrono::Local;
use clap::Parser;
use journey_core::Config;
use std::path::PathBuf;

/// Rewrite README.md from stats/, problems/, and the calendar.
#[derive(Debug, Parser)]
#[command(name = "journey-readme", version)]
struct Cli {
    /// Configuration file (defaults to journey.toml, then the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repository root holding README.md.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    journey_core::logging::init();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        config.paths.root = root;
    }

    println!("📝 Updating README...");
    render::write_readme(&config, Local::now().naive_local())?;
    println!("✅ README updated successfully!");
    Ok(())
}
