//! Text rendering for collected history
//!
//! - [`summary`]: console summary per branch
//! - [`markdown`]: Markdown changelog per branch
//! - [`writer`]: changelog files on disk
//! - [`report`]: console output and exit status for a whole run

pub mod markdown;
pub mod report;
pub mod summary;
pub mod writer;

pub use markdown::render_changelog;
pub use report::{print_report, print_report_to_console};
pub use summary::render_summary;
pub use writer::{changelog_file_name, write_changelog};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when writing output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write to console: {0}")]
    Console(io::Error),
}
