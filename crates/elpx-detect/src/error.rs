//! Errors surfaced by detection tooling.
//!
//! Archive and manifest failures never appear here: the detector absorbs
//! them into a `Standard` verdict with a recorded [`Fallback`](crate::Fallback).

use thiserror::Error;

use elpx_core::FormatVerdict;

/// Failure to obtain a report for a package.
#[derive(Error, Debug)]
pub enum DetectError {
    /// The package bytes could not be read from their source.
    #[error("failed to read package {source_label}: {error}")]
    Read {
        /// Label of the source (path or upload name).
        source_label: String,
        /// Underlying IO failure.
        #[source]
        error: std::io::Error,
    },
}

/// Failure to select an import route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A legacy package needs server conversion but it is disabled.
    #[error("{verdict} package requires server conversion, which is not available")]
    ConversionUnavailable {
        /// Verdict that demanded the unavailable route.
        verdict: FormatVerdict,
    },
}
