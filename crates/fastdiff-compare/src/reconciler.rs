//! Recursive reconciliation of two directory trees.

use std::ffi::OsString;
use std::path::Path;

use fastdiff_core::{CompareConfig, CompareError, CompareStats, Difference, Side};
use itertools::{EitherOrBoth, Itertools};
use tracing::{debug, trace};

use crate::comparator::EntryComparator;
use crate::lister::list_dir;
use crate::sink::DiffSink;

/// Depth-first, pre-order walk over the union of two trees.
///
/// At every level, directories are processed in name order (each followed by
/// its subtree when recursing) before any other entry of that level.
#[derive(Debug, Clone, Copy)]
pub struct TreeReconciler<'a> {
    config: &'a CompareConfig,
    comparator: EntryComparator<'a>,
}

impl<'a> TreeReconciler<'a> {
    pub fn new(config: &'a CompareConfig) -> Self {
        Self {
            config,
            comparator: EntryComparator::new(config),
        }
    }

    /// Compare both roots, emitting every difference into `sink`.
    pub fn run<S: DiffSink + ?Sized>(&self, sink: &mut S) -> Result<CompareStats, CompareError> {
        let mut stats = CompareStats::new();
        self.reconcile(Path::new(""), sink, &mut stats)?;

        debug!(
            "Visited {} directories, compared {} entries: {} differences, {} errors",
            stats.dirs_visited, stats.entries_compared, stats.differences, stats.errors
        );
        Ok(stats)
    }

    /// Compare both roots and collect the differences in traversal order.
    pub fn differences(&self) -> Result<Vec<Difference>, CompareError> {
        let mut diffs = Vec::new();
        self.run(&mut diffs)?;
        Ok(diffs)
    }

    fn reconcile<S: DiffSink + ?Sized>(
        &self,
        rel_path: &Path,
        sink: &mut S,
        stats: &mut CompareStats,
    ) -> Result<(), CompareError> {
        let left_dir = self.config.root(Side::Left).join(rel_path);
        let right_dir = self.config.root(Side::Right).join(rel_path);
        debug!("Comparing {} and {}", left_dir.display(), right_dir.display());

        let left = list_dir(&left_dir)?;
        let right = list_dir(&right_dir)?;
        stats.record_dir();

        if !self.config.skip_folders {
            for pair in left.dirs.iter().merge_join_by(&right.dirs, |l, r| l.cmp(r)) {
                let (name, only) = presence(pair);
                let sub_path = rel_path.join(name);
                trace!("Checking folder {}...", sub_path.display());

                if let Some(side) = only {
                    self.emit(sink, stats, Difference::only_in(self.config.root(side), &sub_path))?;
                }

                // Safe for one-sided folders: the missing side lists as empty.
                if self.config.recursive {
                    self.reconcile(&sub_path, sink, stats)?;
                }
            }
        }

        for pair in left.others.iter().merge_join_by(&right.others, |l, r| l.cmp(r)) {
            let (name, only) = presence(pair);
            let sub_path = rel_path.join(name);
            trace!("Checking file {}...", sub_path.display());

            match only {
                Some(side) => {
                    self.emit(sink, stats, Difference::only_in(self.config.root(side), &sub_path))?;
                }
                None if self.config.names_only => {}
                None => {
                    stats.record_compare();
                    if let Some(diff) = self.comparator.compare(&sub_path) {
                        self.emit(sink, stats, diff)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn emit<S: DiffSink + ?Sized>(
        &self,
        sink: &mut S,
        stats: &mut CompareStats,
        diff: Difference,
    ) -> Result<(), CompareError> {
        stats.record_difference(&diff);
        sink.emit(diff)
    }
}

/// Name of a merged entry and the side it is exclusive to, if any.
fn presence<'n>(pair: EitherOrBoth<&'n OsString, &'n OsString>) -> (&'n OsString, Option<Side>) {
    match pair {
        EitherOrBoth::Both(name, _) => (name, None),
        EitherOrBoth::Left(name) => (name, Some(Side::Left)),
        EitherOrBoth::Right(name) => (name, Some(Side::Right)),
    }
}
