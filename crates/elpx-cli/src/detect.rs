//! # Detect Subcommand
//!
//! Classifies one or more packages and prints a verdict per package.
//!
//! ```bash
//! $ elpx detect course.elp unit.elpx notes.txt
//! course.elp: legacy
//! unit.elpx: standard
//! notes.txt: standard (archive_decode: invalid Zip archive: ...)
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use elpx_detect::{DetectError, DetectionReport, LegacyFormatDetector};

use crate::config::{CliConfig, OutputFormat};
use crate::{EXIT_OK, EXIT_UNREADABLE};

/// Arguments for the detect subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Package files to classify.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format. Defaults to the config file's `output_format`.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the detect subcommand, writing results to stdout.
pub async fn run_detect(args: &DetectArgs, config: &CliConfig) -> Result<u8> {
    let format = args.format.unwrap_or(config.output_format);
    let results = LegacyFormatDetector::new()
        .inspect_all(args.files.clone())
        .await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&results, format, &mut out)
}

/// Write `results` in `format` and return the exit code.
pub fn render(
    results: &[(String, Result<DetectionReport, DetectError>)],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let mut code = EXIT_OK;
    for (label, result) in results {
        if let Err(e) = result {
            tracing::error!(source = %label, error = %e, "package could not be read");
            code = EXIT_UNREADABLE;
        }
    }

    match format {
        OutputFormat::Text => {
            for (label, result) in results {
                match result {
                    Ok(report) => match &report.fallback {
                        Some(fallback) => writeln!(out, "{label}: {} ({fallback})", report.verdict)?,
                        None => writeln!(out, "{label}: {}", report.verdict)?,
                    },
                    Err(e) => writeln!(out, "{label}: unreadable ({e})")?,
                }
            }
        }
        OutputFormat::Json => {
            let entries = results
                .iter()
                .map(|(label, result)| match result {
                    Ok(report) => serde_json::to_value(report),
                    Err(e) => Ok(serde_json::json!({
                        "source": label,
                        "error": e.to_string(),
                    })),
                })
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(code)
}
