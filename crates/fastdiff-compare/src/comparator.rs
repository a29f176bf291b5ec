//! Metadata comparison of two same-named entries.
//!
//! Two passes, each reporting at most the first mismatch (type, then size):
//! 1. Stat both entries without following symbolic links
//! 2. If both are links and dereferencing is enabled, stat the link targets
//!
//! Contents are never read.

use std::path::Path;

use fastdiff_core::{CompareConfig, CompareError, Difference, EntryStat, Side};
use tracing::debug;

/// Compares common non-directory entries of the two roots.
#[derive(Debug, Clone, Copy)]
pub struct EntryComparator<'a> {
    config: &'a CompareConfig,
}

/// Result of one comparison pass.
#[derive(Debug, PartialEq, Eq)]
enum PassOutcome {
    Differs(Difference),
    BothLinks,
    Same,
}

impl<'a> EntryComparator<'a> {
    /// Create a comparator for the roots in `config`.
    pub fn new(config: &'a CompareConfig) -> Self {
        Self { config }
    }

    /// Compare the entry at `rel_path` on both sides.
    ///
    /// Metadata failures do not propagate; they come back as a
    /// [`Difference::Error`] scoped to `rel_path`.
    pub fn compare(&self, rel_path: &Path) -> Option<Difference> {
        if self.config.names_only {
            return None;
        }

        match self.try_compare(rel_path) {
            Ok(diff) => diff,
            Err(err) => {
                debug!("Comparison failed for {}: {err:?}", rel_path.display());
                Some(Difference::error(err.to_string(), rel_path))
            }
        }
    }

    fn try_compare(&self, rel_path: &Path) -> Result<Option<Difference>, CompareError> {
        let left = self.config.root(Side::Left).join(rel_path);
        let right = self.config.root(Side::Right).join(rel_path);

        match compare_pass(&left, &right, rel_path, false)? {
            PassOutcome::Differs(diff) => Ok(Some(diff)),
            PassOutcome::BothLinks if self.config.dereference() => {
                match compare_pass(&left, &right, rel_path, true)? {
                    PassOutcome::Differs(diff) => Ok(Some(diff)),
                    PassOutcome::BothLinks | PassOutcome::Same => Ok(None),
                }
            }
            PassOutcome::BothLinks | PassOutcome::Same => Ok(None),
        }
    }
}

fn compare_pass(
    left: &Path,
    right: &Path,
    rel_path: &Path,
    follow: bool,
) -> Result<PassOutcome, CompareError> {
    let left = EntryStat::probe(left, follow)?;
    let right = EntryStat::probe(right, follow)?;
    Ok(compare_stats(left, right, rel_path))
}

fn compare_stats(left: EntryStat, right: EntryStat, rel_path: &Path) -> PassOutcome {
    if left.entry_type != right.entry_type {
        return PassOutcome::Differs(Difference::FileType {
            left: left.entry_type,
            right: right.entry_type,
            path: rel_path.to_path_buf(),
        });
    }

    if left.size != right.size {
        return PassOutcome::Differs(Difference::FileSize {
            left: left.size,
            right: right.size,
            path: rel_path.to_path_buf(),
        });
    }

    if left.is_link() {
        PassOutcome::BothLinks
    } else {
        PassOutcome::Same
    }
}
