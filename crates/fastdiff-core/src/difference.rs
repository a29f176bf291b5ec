//! Difference records emitted by a comparison run.
//!
//! The `Display` form of a [`Difference`] is the line printed to the user.
//! Those strings are the stable, testable output of the tool.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entry::EntryType;

/// One of the two trees being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A single detected difference, labeled with its path relative to both roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difference {
    /// The entry exists only below `root`.
    OnlyIn { root: PathBuf, path: PathBuf },

    /// One side is a symbolic link, the other is not.
    FileType {
        left: EntryType,
        right: EntryType,
        path: PathBuf,
    },

    /// Both entries have the same type but different byte sizes.
    FileSize { left: u64, right: u64, path: PathBuf },

    /// Metadata for the entry could not be read on at least one side.
    Error { message: String, path: PathBuf },
}

impl Difference {
    /// Create an "only in" difference for an entry present on one side.
    pub fn only_in(root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self::OnlyIn {
            root: root.into(),
            path: path.into(),
        }
    }

    /// Create an error record for an entry whose comparison failed.
    pub fn error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Error {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Path of the entry, relative to the comparison roots.
    pub fn path(&self) -> &Path {
        match self {
            Self::OnlyIn { path, .. }
            | Self::FileType { path, .. }
            | Self::FileSize { path, .. }
            | Self::Error { path, .. } => path,
        }
    }

    /// Check if this record is a failed comparison rather than a difference.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnlyIn { root, path } => {
                write!(f, "Only in {}: {}", root.display(), path.display())
            }
            Self::FileType { left, right, path } => write!(
                f,
                "different file type: {left} | {right}: {}",
                path.display()
            ),
            Self::FileSize { left, right, path } => write!(
                f,
                "different file size: {left} | {right}: {}",
                path.display()
            ),
            Self::Error { message, path } => {
                write!(f, "Error: {message}: {}", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_in_display() {
        let diff = Difference::only_in("/tmp/dir1", Path::new("a").join("only1"));
        assert_eq!(
            diff.to_string(),
            format!("Only in /tmp/dir1: {}", Path::new("a").join("only1").display())
        );
    }

    #[test]
    fn test_file_type_display() {
        let diff = Difference::FileType {
            left: EntryType::File,
            right: EntryType::Link,
            path: PathBuf::from("file-link.txt"),
        };
        assert_eq!(diff.to_string(), "different file type: file | link: file-link.txt");
    }

    #[test]
    fn test_file_size_display() {
        let diff = Difference::FileSize {
            left: 1,
            right: 3,
            path: PathBuf::from("file-a.txt"),
        };
        assert_eq!(diff.to_string(), "different file size: 1 | 3: file-a.txt");
        assert_eq!(diff.path(), Path::new("file-a.txt"));
        assert!(!diff.is_error());
    }

    #[test]
    fn test_error_display() {
        let diff = Difference::error("Path not found: /x/link", "link");
        assert_eq!(diff.to_string(), "Error: Path not found: /x/link: link");
        assert!(diff.is_error());
    }
}
