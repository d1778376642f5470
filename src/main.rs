//! du-harvest main entry point
//!
//! Running with no arguments harvests the three DU sites with the built-in
//! configuration and writes JSON files under `./results`.

use anyhow::Context;
use clap::Parser;
use du_harvest::config::{load_config_with_hash, Config};
use du_harvest::Harvester;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// du-harvest: extract DU bulletin, athletics and calendar data as JSON
#[derive(Parser, Debug)]
#[command(name = "du-harvest")]
#[command(version)]
#[command(about = "Extract DU bulletin, athletics and calendar data as JSON", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in targets are used otherwise
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write JSON files here instead of the configured directory
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir;
    }

    tracing::info!(output = %config.output.directory, "Starting harvest");

    let harvester = Harvester::from_config(&config).context("failed to initialise harvester")?;
    harvester.run_all().await;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("du_harvest=info,warn"),
            1 => EnvFilter::new("du_harvest=debug,info"),
            2 => EnvFilter::new("du_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
