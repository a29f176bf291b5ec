//! Core types for fastdiff.
//!
//! This crate provides the data structures shared by the comparison engine
//! and the command line front end: the run configuration, the error type,
//! the typed difference records and the per-entry metadata snapshot.

mod config;
mod difference;
mod entry;
mod error;
mod stats;

pub use config::{CompareConfig, CompareConfigBuilder, CompareConfigBuilderError};
pub use difference::{Difference, Side};
pub use entry::{EntryStat, EntryType};
pub use error::{CompareError, check_root};
pub use stats::CompareStats;
