//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Archive errors cover everything that prevents reading the zip container
//!   or one of its entries.
//! - Manifest errors cover everything that prevents extracting a root element
//!   from the manifest entry: bad encoding and any XML well-formedness or
//!   namespace violation.
//! - The detector recovers from both classes locally; they exist as types so
//!   the recovery can be logged and reported precisely.

use thiserror::Error;

/// Top-level error type for package tooling.
#[derive(Error, Debug)]
pub enum ElpxError {
    /// The package is not a readable zip archive.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// The content manifest is not well-formed XML.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Error reading a package as a zip archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The bytes do not form a valid zip structure.
    #[error("not a valid zip archive: {0}")]
    Decode(#[from] zip::result::ZipError),

    /// An entry exists but its content could not be decompressed.
    #[error("failed to read entry {name}: {source}")]
    EntryRead {
        /// Entry path inside the archive.
        name: String,
        /// Underlying IO failure from the decompressor.
        source: std::io::Error,
    },
}

/// Error extracting the root element of a manifest document.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest bytes are not valid UTF-8.
    #[error("manifest is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The document is not well-formed namespace-aware XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// An `<?xml ...?>` declaration appears after the start of the document.
    #[error("XML declaration at byte {0} is not at the start of the document")]
    MisplacedDeclaration(usize),
}
