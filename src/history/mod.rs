//! Commit history extraction and aggregation
//!
//! Raw records flow through [`normalizer`] and [`classifier`] into
//! [`aggregator`], which builds the per-branch [`ChangelogModel`].
//! [`collect`] drives the whole pipeline against a repository.
//!
//! [`ChangelogModel`]: crate::model::ChangelogModel

pub mod aggregator;
pub mod classifier;
pub mod collect;
pub mod normalizer;

pub use aggregator::{aggregate, aggregate_branches};
pub use classifier::{Classified, classify, classify_changes};
pub use collect::{
    BranchFailure, BranchHistory, HistoryReport, HistoryRequest, build_branch_history,
    collect_history,
};
pub use normalizer::{normalize, parse_timestamp};

use thiserror::Error;

/// Per-record errors, recovered locally by skipping the record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Malformed commit record {id}: {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("Unknown change kind {status:?} for path {path:?}")]
    UnknownChangeKind { status: String, path: String },
}
