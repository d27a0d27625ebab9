//! # elpx-cli — Command-Line Interface for eXeLearning Packages
//!
//! Provides the `elpx` binary.
//!
//! ## Subcommands
//!
//! - `elpx detect` — classify packages as legacy or standard.
//! - `elpx route` — select the import route for one package.
//!
//! ```bash
//! elpx detect course.elp unit.elpx
//! elpx detect --format json exports/*.elp
//! elpx --config elpx.yaml route course.elp --no-server-conversion
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers.
//! - Handlers delegate to `elpx-detect`; no detection logic here.
//! - Handlers return the process exit code; errors bubble up as `anyhow`.

pub mod config;
pub mod detect;
pub mod route;

pub use config::{CliConfig, LogFormat, OutputFormat};

/// Exit code when every input was processed.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one input could not be read.
pub const EXIT_UNREADABLE: u8 = 1;
/// Exit code when the selected import route is unavailable.
pub const EXIT_ROUTE_UNAVAILABLE: u8 = 2;
