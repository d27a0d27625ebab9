//! # Detection Reports
//!
//! The verdict for one package together with what the detector saw on the
//! way. Serialised as JSON by the CLI.

use serde::{Deserialize, Serialize};

use elpx_core::{FormatVerdict, ManifestKind, PackageDigest};

/// Why the detector fell back to a `Standard` verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    /// The package is not a readable zip archive.
    ArchiveDecode {
        /// Error reported by the archive reader.
        message: String,
    },
    /// `contentv3.xml` exists but is not well-formed XML.
    ManifestXmlParse {
        /// Error reported by the manifest parser.
        message: String,
    },
    /// The classification task panicked or was cancelled.
    Interrupted {
        /// Error reported by the runtime.
        message: String,
    },
}

impl Fallback {
    /// Short identifier of the fallback class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArchiveDecode { .. } => "archive_decode",
            Self::ManifestXmlParse { .. } => "manifest_xml_parse",
            Self::Interrupted { .. } => "interrupted",
        }
    }

    /// The underlying error message.
    pub fn message(&self) -> &str {
        match self {
            Self::ArchiveDecode { message }
            | Self::ManifestXmlParse { message }
            | Self::Interrupted { message } => message,
        }
    }
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

/// Outcome of inspecting one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Source label (path or upload name).
    pub source: String,
    /// Size of the package in bytes.
    pub size_bytes: u64,
    /// SHA-256 of the raw package bytes. Absent only when classification
    /// was interrupted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<PackageDigest>,
    /// The classification.
    pub verdict: FormatVerdict,
    /// Reserved manifest entries found, when the archive could be opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ManifestKind>,
    /// Root element of `contentv3.xml`, when it was parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_tag: Option<String>,
    /// Set when the verdict is a fail-open default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
}
