//! git command execution layer
//!
//! This module runs git commands and parses their output into raw commit
//! records. It is the only place that knows git's text formats.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

use crate::model::RawCommit;

/// Errors that can occur when querying a repository
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    RepositoryNotFound,

    #[error("Branch not found: {branch}")]
    BranchNotFound { branch: String },

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// Read access to a repository's branches and commit history
pub trait RepositoryQuery {
    /// Names of the local branches
    fn list_branches(&self) -> Result<Vec<String>, GitError>;

    /// Raw commit records reachable from `branch`, newest first
    fn commits_for(&self, branch: &str) -> Result<Vec<RawCommit>, GitError>;
}
