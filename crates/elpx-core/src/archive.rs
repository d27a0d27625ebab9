//! # Package Archive — Read-Only Zip Container
//!
//! Wraps a zip archive held in memory. Opening parses only the central
//! directory; entry bytes are decompressed when requested. Entry lookup is
//! by exact path, the same way the project packaging system names its
//! reserved entries.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{ArchiveError, ElpxError};
use crate::manifest::{root_element_name, LEGACY_MANIFEST_NAME};

/// A read-only view of a packaged project.
///
/// Borrowed from the caller's buffer; no entry is copied until
/// [`read_entry`](Self::read_entry) is called.
pub struct PackageArchive<'a> {
    zip: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> PackageArchive<'a> {
    /// Parse `bytes` as a zip archive.
    ///
    /// Fails with [`ArchiveError::Decode`] when the bytes carry no valid
    /// end-of-central-directory record or the directory itself is corrupt.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ArchiveError> {
        let zip = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self { zip })
    }

    /// Number of entries in the central directory.
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    /// Whether the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Whether an entry with exactly this path exists.
    pub fn contains(&self, name: &str) -> bool {
        self.zip.file_names().any(|n| n == name)
    }

    /// Decompress the entry at exactly `name`.
    ///
    /// Returns `Ok(None)` when no such entry exists.
    pub fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>, ArchiveError> {
        let mut file = match self.zip.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(ArchiveError::Decode(e)),
        };
        let mut buf = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
        file.read_to_end(&mut buf)
            .map_err(|source| ArchiveError::EntryRead {
                name: name.to_string(),
                source,
            })?;
        Ok(Some(buf))
    }

    /// Root element name of the legacy manifest, if the package has one.
    ///
    /// `Ok(None)` means there is no `contentv3.xml` entry at the archive
    /// root. An entry that cannot be decompressed surfaces as
    /// [`ElpxError::Archive`]; one that is not well-formed XML as
    /// [`ElpxError::Manifest`].
    pub fn legacy_manifest_root(&mut self) -> Result<Option<String>, ElpxError> {
        let Some(entry) = self.read_entry(LEGACY_MANIFEST_NAME)? else {
            return Ok(None);
        };
        Ok(Some(root_element_name(&entry)?))
    }
}

impl std::fmt::Debug for PackageArchive<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageArchive")
            .field("entries", &self.zip.len())
            .finish()
    }
}
