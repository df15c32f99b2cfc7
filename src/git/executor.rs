//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::constants::{self, commands, errors, flags};
use super::parser::{Parser, parse_branch_list};
use super::template::Templates;
use super::{GitError, RepositoryQuery};
use crate::model::RawCommit;

/// Executor for git commands
///
/// Holds the per-invocation repository context. Nothing is cached between
/// calls.
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically disables path quoting so non-ASCII paths parse verbatim.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::CONFIG).arg(flags::NO_QUOTE_PATH);
        cmd.args(args);

        debug!(?args, repo = ?self.repo_path, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) || stderr.contains(errors::CANNOT_CHANGE_DIR) {
                return Err(GitError::RepositoryNotFound);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git branch` listing short names of local branches
    pub fn branches_raw(&self) -> Result<String, GitError> {
        self.run(&[commands::BRANCH, flags::BRANCH_FORMAT])
    }

    /// Check that `branch` names a commit
    pub fn verify_branch(&self, branch: &str) -> Result<(), GitError> {
        let rev = format!("{}{}", branch, constants::PEEL_TO_COMMIT);
        match self.run(&[commands::REV_PARSE, flags::VERIFY, flags::QUIET, &rev]) {
            Ok(_) => Ok(()),
            Err(GitError::CommandFailed { .. }) => Err(GitError::BranchNotFound {
                branch: branch.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Run `git log` for `branch` with the parseable format and name-status
    pub fn log_raw(&self, branch: &str) -> Result<String, GitError> {
        self.run(&[
            commands::LOG,
            flags::NO_COLOR,
            Templates::log(),
            flags::NAME_STATUS,
            flags::FIND_RENAMES,
            branch,
            flags::END_OF_REVISIONS,
        ])
    }
}

impl RepositoryQuery for GitExecutor {
    fn list_branches(&self) -> Result<Vec<String>, GitError> {
        let output = self.branches_raw()?;
        Ok(parse_branch_list(&output))
    }

    fn commits_for(&self, branch: &str) -> Result<Vec<RawCommit>, GitError> {
        self.verify_branch(branch)?;
        let output = self.log_raw(branch)?;
        Ok(Parser::parse_log(&output))
    }
}
