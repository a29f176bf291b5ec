//! Directory tree reconciliation engine for fastdiff.
//!
//! Compares two directory trees by structure and lightweight metadata only.
//! File contents are never read, so files of equal size with different
//! bytes are reported as identical.
//!
//! # Overview
//!
//! - **Lister** - lists the immediate children of a directory, split into
//!   directories and everything else
//! - **Comparator** - compares two same-named entries by file type and size,
//!   optionally following symbolic links for a second pass
//! - **Reconciler** - walks both trees depth-first, reporting entries found on
//!   one side only and delegating common entries to the comparator
//!
//! Output is deterministic: at each level, directories are handled in name
//! order (with their subtrees) before any file at that level.
//!
//! # Example
//!
//! ```rust,no_run
//! use fastdiff_compare::{CompareConfig, TreeReconciler, WriterSink};
//!
//! let config = CompareConfig::builder()
//!     .left_root("/backup/old")
//!     .right_root("/backup/new")
//!     .recursive(true)
//!     .build()
//!     .unwrap();
//!
//! let mut sink = WriterSink::new(std::io::stdout().lock());
//! let stats = TreeReconciler::new(&config).run(&mut sink).unwrap();
//! eprintln!("{} differences", stats.differences);
//! ```

mod comparator;
mod lister;
mod reconciler;
mod sink;

pub use comparator::EntryComparator;
pub use lister::{Listing, list_dir};
pub use reconciler::TreeReconciler;
pub use sink::{DiffSink, WriterSink};

// Re-export core types for convenience
pub use fastdiff_core::{
    CompareConfig, CompareError, CompareStats, Difference, EntryStat, EntryType, Side,
};
