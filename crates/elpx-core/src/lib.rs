//! # elpx-core — Foundational Types for eXeLearning Package Tooling
//!
//! Defines the primitives shared by every other crate in the workspace:
//! the two-valued [`FormatVerdict`], the read-only [`PackageArchive`] over a
//! zip container, root-element extraction for content manifests, and the
//! SHA-256 [`PackageDigest`] used to label packages in reports.
//!
//! ## Package Layout
//!
//! ```text
//! project.elpx (zip)
//! ├── content.xml       standard manifest (current format)
//! ├── contentv3.xml     legacy manifest (object-graph dump, older packages)
//! └── ...               assets, themes, iDevice resources
//! ```
//!
//! ## Crate Policy
//!
//! - No dependencies on other `elpx-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod archive;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod verdict;

// Re-export primary types for ergonomic imports.
pub use archive::PackageArchive;
pub use digest::{sha256_digest, PackageDigest};
pub use error::{ArchiveError, ElpxError, ManifestError};
pub use manifest::{
    is_legacy_root, root_element_name, ManifestKind, LEGACY_MANIFEST_NAME, LEGACY_ROOT_TAGS,
    STANDARD_MANIFEST_NAME,
};
pub use verdict::FormatVerdict;
