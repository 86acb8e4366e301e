use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connectz::config::{AppConfig, LogConfig};

/// Replay a Connect-Z game file and print its outcome code.
#[derive(Parser)]
#[command(name = "connectz", version, about = "Replay a Connect-Z game file and print its outcome code")]
struct Cli {
    /// Game file: an `X Y Z` line followed by one column number per line
    input: PathBuf,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connectz.toml")]
    config: PathBuf,

    /// Describe the outcome on stderr as well
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Wrong argument counts stop here with a usage message and exit status 2.
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.verbose {
        app_config.report.verbose = true;
    }

    init_logging(&app_config.log)?;

    let outcome = connectz::run_file(&cli.input);
    println!("{}", outcome.code());
    if app_config.report.verbose {
        eprintln!("{}: {}", cli.input.display(), outcome.description());
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log.level)
            .with_context(|| format!("invalid log level '{}'", log.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(log.ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}
