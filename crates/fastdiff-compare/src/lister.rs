//! Single-level directory listing.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;

use fastdiff_core::CompareError;
use tracing::debug;

/// Immediate children of one directory, split by directory-ness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Children that are directories, or symlinks resolving to directories.
    pub dirs: BTreeSet<OsString>,
    /// Every other child: files, symlinks, devices, sockets, pipes.
    pub others: BTreeSet<OsString>,
}

impl Listing {
    /// Check if the listing has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.others.is_empty()
    }
}

/// List the immediate children of `path`.
///
/// A path that does not exist, or that is not a directory, lists as empty.
/// This lets the reconciler descend into a directory that exists on one side
/// only without special casing it.
pub fn list_dir(path: &Path) -> Result<Listing, CompareError> {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            debug!("{}: missing or not a directory, listing as empty", path.display());
            return Ok(Listing::default());
        }
        Err(err) => return Err(CompareError::io(path, err)),
    };

    let mut listing = Listing::default();
    for entry in entries {
        let entry = entry.map_err(|e| CompareError::io(path, e))?;
        let file_type = entry.file_type().map_err(|e| CompareError::io(entry.path(), e))?;

        // Directory-ness follows symlinks; everything else is compared by metadata.
        let is_dir = file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir());
        if is_dir {
            listing.dirs.insert(entry.file_name());
        } else {
            listing.others.insert(entry.file_name());
        }
    }

    debug!(
        "{}: {} dirs + {} others",
        path.display(),
        listing.dirs.len(),
        listing.others.len()
    );
    Ok(listing)
}
