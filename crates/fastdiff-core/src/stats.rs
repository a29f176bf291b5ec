//! Run statistics.

use serde::{Deserialize, Serialize};

use crate::difference::Difference;

/// Counters accumulated over one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareStats {
    /// Directory levels listed (each level lists both sides).
    pub dirs_visited: u64,
    /// Common non-directory entries compared by metadata.
    pub entries_compared: u64,
    /// Differences reported, excluding errors.
    pub differences: u64,
    /// Entries whose comparison failed.
    pub errors: u64,
}

impl CompareStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one directory level.
    pub fn record_dir(&mut self) {
        self.dirs_visited += 1;
    }

    /// Record one metadata comparison.
    pub fn record_compare(&mut self) {
        self.entries_compared += 1;
    }

    /// Record an emitted difference.
    pub fn record_difference(&mut self, diff: &Difference) {
        if diff.is_error() {
            self.errors += 1;
        } else {
            self.differences += 1;
        }
    }

    /// Check if the trees matched with no failed comparisons.
    pub fn is_clean(&self) -> bool {
        self.differences == 0 && self.errors == 0
    }
}
