//! # Package Sources
//!
//! The binary-file-read primitive the detector consumes. A source knows how
//! to label itself for logs and how to produce its full byte content.

use std::future::Future;
use std::path::{Path, PathBuf};

/// Something that can hand over a package's full bytes.
pub trait PackageSource: Send + Sync {
    /// Human-readable label for logs and reports.
    fn label(&self) -> String;

    /// Read the entire package into memory.
    fn read_bytes(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

impl PackageSource for Path {
    fn label(&self) -> String {
        self.display().to_string()
    }

    fn read_bytes(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        tokio::fs::read(self.to_path_buf())
    }
}

impl PackageSource for PathBuf {
    fn label(&self) -> String {
        self.as_path().label()
    }

    fn read_bytes(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        tokio::fs::read(self.clone())
    }
}

/// A package already held in memory, e.g. an upload body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryPackage {
    name: String,
    bytes: Vec<u8>,
}

impl InMemoryPackage {
    /// Wrap `bytes` under a display `name`.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// The package bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PackageSource for InMemoryPackage {
    fn label(&self) -> String {
        self.name.clone()
    }

    fn read_bytes(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        let bytes = self.bytes.clone();
        async move { Ok(bytes) }
    }
}
