//! # Format Verdict
//!
//! The binary classification consumed by import routing: a package is either
//! a legacy object-graph dump or standard content.

use serde::{Deserialize, Serialize};

/// Outcome of legacy format detection for one package.
///
/// Derived per call and never persisted. `Standard` is the fail-open default:
/// every internal failure of the detector maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatVerdict {
    /// The manifest is a serialized object graph that needs server conversion.
    Legacy,
    /// Anything else, including packages the detector could not inspect.
    #[default]
    Standard,
}

impl FormatVerdict {
    /// Returns the verdict identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Standard => "standard",
        }
    }

    /// Whether the package must go through legacy conversion.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy)
    }
}

impl std::fmt::Display for FormatVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
