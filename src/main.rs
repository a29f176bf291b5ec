//! fastdiff - Fast comparison of two directory trees.
//!
//! Usage:
//!   fastdiff DIR1 DIR2                 Compare the top level of both directories
//!   fastdiff -r DIR1 DIR2              Compare recursively
//!   fastdiff --names-only -r DIR1 DIR2 Only report entries missing on one side
//!   fastdiff --help                    Show help
//!
//! Files are compared by type (file or symbolic link) and size only; their
//! contents are never read. Differences are printed one per line to stdout.
//! The exit status is 0 whether or not differences were found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::Level;

use fastdiff_compare::{CompareConfig, TreeReconciler, WriterSink};
use fastdiff_core::check_root;

#[derive(Parser)]
#[command(
    name = "fastdiff",
    version,
    about = "Compares two directories to determine if they contain the same files",
    long_about = "Compares two directories to determine if they contain the same files.\n\n\
                  Files are only compared by type and size to ensure fast execution; \
                  their contents are never read."
)]
struct Cli {
    /// The first directory to compare
    dir1: PathBuf,

    /// The second directory to compare
    dir2: PathBuf,

    /// Perform the comparison recursively
    #[arg(short, long)]
    recursive: bool,

    /// Skip folders: only compare the files of each visited level
    #[arg(long)]
    skip_folders: bool,

    /// Only compare names, ignoring file type and size
    #[arg(long)]
    names_only: bool,

    /// Don't follow symbolic links
    #[arg(long)]
    no_dereference: bool,

    /// Activate debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug = cli.debug;

    init_logging(debug);

    if let Err(err) = color_eyre::install() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            if debug {
                eprintln!("{report:?}");
            } else {
                eprintln!("{report:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Validate both roots and run the comparison, printing differences to stdout.
fn run(cli: Cli) -> Result<()> {
    check_root(&cli.dir1)?;
    check_root(&cli.dir2)?;

    let config = CompareConfig::builder()
        .left_root(cli.dir1)
        .right_root(cli.dir2)
        .recursive(cli.recursive)
        .skip_folders(cli.skip_folders)
        .names_only(cli.names_only)
        .no_dereference(cli.no_dereference)
        .build()
        .map_err(fastdiff_core::CompareError::from)?;

    let mut sink = WriterSink::new(std::io::stdout().lock());
    let stats = TreeReconciler::new(&config)
        .run(&mut sink)
        .wrap_err("Comparison aborted")?;
    let _stdout = sink.into_inner()?;

    tracing::debug!("Comparison finished: {stats:?}");
    Ok(())
}
