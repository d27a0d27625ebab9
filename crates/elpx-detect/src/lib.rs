//! # elpx-detect — Legacy Package Format Detection
//!
//! Decides, before any import work starts, whether a packaged project is a
//! legacy object-graph dump (routed to server-side conversion) or standard
//! content (imported client-side).
//!
//! - **Detector** (`detector.rs`): reads the package, opens it as a zip,
//!   and inspects the root element of `contentv3.xml`. Never fails: every
//!   internal failure degrades to [`FormatVerdict::Standard`] and is logged.
//!
//! - **Sources** (`source.rs`): the [`PackageSource`] abstraction over
//!   files on disk and in-memory uploads.
//!
//! - **Reports** (`report.rs`): the verdict plus diagnostics (size, digest,
//!   manifest kind, root tag, fallback reason) for tooling and logs.
//!
//! - **Routing** (`routing.rs`): maps a verdict to an [`ImportRoute`], with
//!   server conversion modelled as a capability resolved once.
//!
//! ## Crate Policy
//!
//! - Depends only on `elpx-core` internally.
//! - Detection is a pure function of the package bytes.

pub mod detector;
pub mod error;
pub mod report;
pub mod routing;
pub mod source;

pub use detector::LegacyFormatDetector;
pub use elpx_core::FormatVerdict;
pub use error::{DetectError, RouteError};
pub use report::{DetectionReport, Fallback};
pub use routing::{ImportPlanner, ImportRoute};
pub use source::{InMemoryPackage, PackageSource};
