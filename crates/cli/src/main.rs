use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use photos_count_core::{count_photos, render_report};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const INVALID_PATH_MESSAGE: &str = "Invalid directory path to photos count";

#[derive(Debug, Parser)]
#[command(
    name = "photos-count",
    version,
    about = "Count photo files per directory, grouped by file type."
)]
struct Cli {
    /// Directory tree to scan.
    path: Option<PathBuf>,

    /// Emit the aggregate result as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("photos count failed: {:#}", err);
            eprintln!("{INVALID_PATH_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.path.context("missing path argument")?;
    let summary = count_photos(&path)?;

    if cli.json {
        let payload =
            serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        println!("{payload}");
    } else {
        print!("{}", render_report(&summary));
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
