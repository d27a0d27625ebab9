//! # elpx CLI entry point
//!
//! Parses command-line arguments, loads the optional config file,
//! initialises tracing, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use elpx_cli::config::{CliConfig, LogFormat};
use elpx_cli::detect::{run_detect, DetectArgs};
use elpx_cli::route::{run_route, RouteArgs};

/// eXeLearning package tools.
///
/// Classifies packaged projects as legacy object-graph dumps or standard
/// content, and selects the import route each one should take.
#[derive(Parser, Debug)]
#[command(name = "elpx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify packages as legacy or standard format.
    Detect(DetectArgs),

    /// Select the import route for a package.
    Route(RouteArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.verbose, config.log_format);
    tracing::debug!(?config, "elpx CLI starting");

    let result = match &cli.command {
        Commands::Detect(args) => run_detect(args, &config).await,
        Commands::Route(args) => run_route(args, &config).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Map `-v` count to a filter; `RUST_LOG` wins when set.
fn verbosity_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(verbosity_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
