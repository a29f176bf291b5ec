//! Error types for comparison runs.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while comparing two trees.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Path does not exist.
    #[error("{path} does not exist")]
    NotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Differences could not be written out.
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl CompareError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Check that a comparison root exists and is a directory.
pub fn check_root(path: &Path) -> Result<(), CompareError> {
    // Follows symlinks, so a link to a directory is a valid root.
    let metadata = std::fs::metadata(path).map_err(|e| CompareError::io(path, e))?;
    if !metadata.is_dir() {
        return Err(CompareError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
