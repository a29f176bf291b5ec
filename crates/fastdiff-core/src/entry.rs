//! Lightweight per-entry metadata used for comparison.

use std::fmt;
use std::fs::Metadata;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// File type as far as the comparison is concerned.
///
/// Regular files, devices, sockets and pipes are all `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    File,
    Link,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Link => "link",
        })
    }
}

/// Type and size of one entry, captured by a single metadata probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub entry_type: EntryType,
    pub size: u64,
}

impl EntryStat {
    /// Probe `path`, following symbolic links only when `follow` is set.
    pub fn probe(path: &Path, follow: bool) -> Result<Self, CompareError> {
        let metadata = if follow {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        };
        metadata
            .map(|m| Self::from_metadata(&m))
            .map_err(|e| CompareError::io(path, e))
    }

    /// Build from already fetched metadata.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let entry_type = if metadata.file_type().is_symlink() {
            EntryType::Link
        } else {
            EntryType::File
        };
        Self {
            entry_type,
            size: metadata.len(),
        }
    }

    pub fn is_link(&self) -> bool {
        self.entry_type == EntryType::Link
    }
}
