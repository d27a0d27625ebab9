//! # Import Routing
//!
//! Maps a verdict to the import strategy the caller should run. Server-side
//! conversion is an optional platform capability (a deployment may run
//! without the conversion endpoint); [`ImportPlanner`] takes that capability
//! once at construction instead of probing for it on every import.

use serde::{Deserialize, Serialize};

use elpx_core::FormatVerdict;

use crate::error::RouteError;

/// How a package should be imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportRoute {
    /// Parse the package in-process with the standard importer.
    ClientSide,
    /// Upload the package to the server for legacy conversion.
    ServerConversion,
}

impl ImportRoute {
    /// The route a verdict calls for, ignoring capability.
    pub fn for_verdict(verdict: FormatVerdict) -> Self {
        match verdict {
            FormatVerdict::Legacy => Self::ServerConversion,
            FormatVerdict::Standard => Self::ClientSide,
        }
    }

    /// Returns the route identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientSide => "client_side",
            Self::ServerConversion => "server_conversion",
        }
    }
}

impl std::fmt::Display for ImportRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chooses import routes under a fixed set of platform capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportPlanner {
    server_conversion: bool,
}

impl Default for ImportPlanner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ImportPlanner {
    /// Create a planner; `server_conversion` says whether the conversion
    /// endpoint is reachable in this deployment.
    pub fn new(server_conversion: bool) -> Self {
        Self { server_conversion }
    }

    /// Whether legacy packages can be imported at all.
    pub fn supports_server_conversion(&self) -> bool {
        self.server_conversion
    }

    /// Select the route for `verdict`.
    pub fn plan(&self, verdict: FormatVerdict) -> Result<ImportRoute, RouteError> {
        match ImportRoute::for_verdict(verdict) {
            ImportRoute::ServerConversion if !self.server_conversion => {
                Err(RouteError::ConversionUnavailable { verdict })
            }
            route => Ok(route),
        }
    }
}
