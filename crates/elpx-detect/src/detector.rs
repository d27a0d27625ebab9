//! # Legacy Format Detector
//!
//! Classifies a packaged project as legacy or standard before import.
//!
//! ## Algorithm
//!
//! 1. Read the full package bytes from the source.
//! 2. Open them as a zip archive. Not a zip → `Standard`.
//! 3. Look up `contentv3.xml` by exact name. Absent → `Standard`.
//! 4. Parse the entry as UTF-8 XML. Malformed → `Standard`.
//! 5. Root element exactly `instance` or `dictionary` → `Legacy`;
//!    anything else → `Standard`.
//!
//! ## Fail-Open Policy
//!
//! Every failure in steps 2-4 is logged at `warn` and mapped to `Standard`.
//! The standard importer raises an explicit, user-visible parse error for
//! data it cannot read, whereas routing a package to legacy conversion by
//! mistake fails silently. [`LegacyFormatDetector::detect`] therefore never
//! returns an error, and [`LegacyFormatDetector::inspect`] only errors when
//! the source itself cannot be read.

use tokio::task::JoinHandle;

use elpx_core::{
    is_legacy_root, sha256_digest, ArchiveError, ElpxError, FormatVerdict, ManifestKind,
    PackageArchive, LEGACY_MANIFEST_NAME, STANDARD_MANIFEST_NAME,
};

use crate::error::DetectError;
use crate::report::{DetectionReport, Fallback};
use crate::source::PackageSource;

/// Decides whether a package's manifest is a legacy object-graph dump.
///
/// Stateless; cheap to copy into spawned tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormatDetector;

/// What classification found, before it is wrapped into a report.
#[derive(Debug, Default)]
struct Findings {
    verdict: FormatVerdict,
    manifest: Option<ManifestKind>,
    root_tag: Option<String>,
    fallback: Option<Fallback>,
}

impl LegacyFormatDetector {
    /// Create a detector.
    pub fn new() -> Self {
        Self
    }

    /// Classify a package held in memory. Pure and synchronous.
    pub fn classify_bytes(&self, bytes: &[u8]) -> FormatVerdict {
        classify(bytes, "<memory>").verdict
    }

    /// Classify the package behind `source`.
    ///
    /// Always resolves to a verdict. Read failures, archive failures and
    /// manifest failures all yield [`FormatVerdict::Standard`].
    pub async fn detect<S>(&self, source: &S) -> FormatVerdict
    where
        S: PackageSource + ?Sized,
    {
        match self.inspect(source).await {
            Ok(report) => report.verdict,
            Err(e) => {
                tracing::warn!(error = %e, "package unreadable, assuming standard format");
                FormatVerdict::Standard
            }
        }
    }

    /// Classify the package behind `source` and report what was found.
    ///
    /// Zip and XML parsing run on the blocking pool. The verdict in the
    /// report is always the one [`detect`](Self::detect) returns.
    pub async fn inspect<S>(&self, source: &S) -> Result<DetectionReport, DetectError>
    where
        S: PackageSource + ?Sized,
    {
        let label = source.label();
        let bytes = source
            .read_bytes()
            .await
            .map_err(|error| DetectError::Read {
                source_label: label.clone(),
                error,
            })?;
        let size_bytes = bytes.len() as u64;

        let task_label = label.clone();
        let handle = tokio::task::spawn_blocking(move || build_report(task_label, &bytes));
        match handle.await {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::warn!(
                    source = %label,
                    error = %e,
                    "classification task failed, assuming standard format"
                );
                Ok(DetectionReport {
                    source: label,
                    size_bytes,
                    digest: None,
                    verdict: FormatVerdict::Standard,
                    manifest: None,
                    root_tag: None,
                    fallback: Some(Fallback::Interrupted {
                        message: e.to_string(),
                    }),
                })
            }
        }
    }

    /// Inspect several packages concurrently, one task each.
    ///
    /// Results come back in input order, paired with each source's label.
    pub async fn inspect_all<S>(
        &self,
        sources: Vec<S>,
    ) -> Vec<(String, Result<DetectionReport, DetectError>)>
    where
        S: PackageSource + 'static,
    {
        let handles: Vec<(String, JoinHandle<Result<DetectionReport, DetectError>>)> = sources
            .into_iter()
            .map(|source| {
                let detector = *self;
                let label = source.label();
                let handle = tokio::spawn(async move { detector.inspect(&source).await });
                (label, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (label, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(source = %label, error = %e, "inspection task failed");
                    Ok(DetectionReport {
                        source: label.clone(),
                        size_bytes: 0,
                        digest: None,
                        verdict: FormatVerdict::Standard,
                        manifest: None,
                        root_tag: None,
                        fallback: Some(Fallback::Interrupted {
                            message: e.to_string(),
                        }),
                    })
                }
            };
            results.push((label, result));
        }
        results
    }
}

fn build_report(source: String, bytes: &[u8]) -> DetectionReport {
    let findings = classify(bytes, &source);
    tracing::debug!(
        source = %source,
        verdict = %findings.verdict,
        root_tag = findings.root_tag.as_deref().unwrap_or(""),
        "package classified"
    );
    DetectionReport {
        source,
        size_bytes: bytes.len() as u64,
        digest: Some(sha256_digest(bytes)),
        verdict: findings.verdict,
        manifest: findings.manifest,
        root_tag: findings.root_tag,
        fallback: findings.fallback,
    }
}

fn classify(bytes: &[u8], source: &str) -> Findings {
    let mut archive = match PackageArchive::from_bytes(bytes) {
        Ok(archive) => archive,
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "package is not a zip archive, assuming standard format");
            return archive_fallback(e, None);
        }
    };

    let manifest = ManifestKind::from_presence(
        archive.contains(LEGACY_MANIFEST_NAME),
        archive.contains(STANDARD_MANIFEST_NAME),
    );

    let root_tag = match archive.legacy_manifest_root() {
        Ok(Some(tag)) => tag,
        Ok(None) => {
            return Findings {
                manifest: Some(manifest),
                ..Findings::default()
            }
        }
        Err(ElpxError::Archive(e)) => {
            tracing::warn!(source = %source, error = %e, "legacy manifest unreadable, assuming standard format");
            return archive_fallback(e, Some(manifest));
        }
        Err(ElpxError::Manifest(e)) => {
            tracing::warn!(source = %source, error = %e, "legacy manifest is not well-formed XML, assuming standard format");
            return Findings {
                manifest: Some(manifest),
                fallback: Some(Fallback::ManifestXmlParse {
                    message: e.to_string(),
                }),
                ..Findings::default()
            };
        }
    };

    let verdict = if is_legacy_root(&root_tag) {
        FormatVerdict::Legacy
    } else {
        FormatVerdict::Standard
    };
    Findings {
        verdict,
        manifest: Some(manifest),
        root_tag: Some(root_tag),
        fallback: None,
    }
}

fn archive_fallback(e: ArchiveError, manifest: Option<ManifestKind>) -> Findings {
    Findings {
        manifest,
        fallback: Some(Fallback::ArchiveDecode {
            message: e.to_string(),
        }),
        ..Findings::default()
    }
}
