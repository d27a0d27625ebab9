//! # Route Subcommand
//!
//! Detects one package and prints the import route it should take.
//! Exits with [`EXIT_ROUTE_UNAVAILABLE`] when the package is legacy and
//! server conversion is disabled.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use elpx_detect::{FormatVerdict, ImportPlanner, ImportRoute, LegacyFormatDetector, RouteError};

use crate::config::CliConfig;
use crate::{EXIT_OK, EXIT_ROUTE_UNAVAILABLE};

/// Arguments for the route subcommand.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Package file to route.
    pub file: PathBuf,

    /// Treat the legacy conversion endpoint as unavailable.
    #[arg(long)]
    pub no_server_conversion: bool,
}

impl RouteArgs {
    /// Build the planner from the config file and flag.
    pub fn planner(&self, config: &CliConfig) -> ImportPlanner {
        ImportPlanner::new(config.server_conversion && !self.no_server_conversion)
    }
}

/// Execute the route subcommand.
pub async fn run_route(args: &RouteArgs, config: &CliConfig) -> Result<u8> {
    let report = LegacyFormatDetector::new()
        .inspect(&args.file)
        .await
        .with_context(|| format!("cannot route {}", args.file.display()))?;

    let (line, code) = describe(
        &report.source,
        report.verdict,
        args.planner(config).plan(report.verdict),
    );
    println!("{line}");
    Ok(code)
}

fn describe(
    source: &str,
    verdict: FormatVerdict,
    planned: Result<ImportRoute, RouteError>,
) -> (String, u8) {
    match planned {
        Ok(route) => {
            tracing::info!(source = %source, %verdict, %route, "import route selected");
            (format!("{source}: {verdict} -> {route}"), EXIT_OK)
        }
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "no import route available");
            (format!("{source}: {verdict} -> unavailable ({e})"), EXIT_ROUTE_UNAVAILABLE)
        }
    }
}
