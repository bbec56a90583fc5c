//! Journey Sync - pull recent accepted LeetCode submissions into the repository.

mod api;
mod error;
mod markdown;
mod sync;

use api::GraphQlClient;
use clap::Parser;
use journey_core::Config;
use std::path::PathBuf;
use sync::Syncer;

/// Sync recent accepted submissions into problems/ and refresh stats/progress.json.
#[derive(Debug, Parser)]
#[command(name = "journey-sync", version)]
struct Cli {
    /// Configuration file (defaults to journey.toml, then the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repository root to write into.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Number of recent submissions to fetch.
    #[arg(long)]
    limit: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    journey_core::logging::init();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        config.paths.root = root;
    }
    if let Some(limit) = cli.limit {
        config.api.submission_limit = limit;
    }

    let client = GraphQlClient::new(&config.api)?;
    let syncer = Syncer::new(client, config);

    println!("🔄 Starting LeetCode sync...");
    match syncer.run().await {
        Ok(report) => {
            println!(
                "✅ Sync completed! {} saved, {} skipped of {} submissions",
                report.saved.len(),
                report.skipped.len(),
                report.submissions
            );
        }
        Err(e) if e.is_remote() => {
            println!("❌ Failed to fetch submissions: {e}");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
