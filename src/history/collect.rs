//! History collection
//!
//! Drives a [`RepositoryQuery`] through normalization, classification and
//! aggregation for one branch or every branch, applying the failure policy:
//! bad commits and file changes are skipped and counted, a failing branch
//! is fatal on its own but only recorded when every branch was requested.

use tracing::{debug, warn};

use super::{aggregate, classify_changes, normalize};
use crate::git::{GitError, RepositoryQuery};
use crate::model::{ChangelogModel, Commit, RawCommit, SkipTally};

/// Which branches to collect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRequest {
    /// A single named branch; failures are fatal
    Branch(String),
    /// Every local branch; per-branch failures are recorded and skipped
    AllBranches,
}

impl HistoryRequest {
    /// `Some(name)` selects one branch, `None` selects all branches
    pub fn from_branch(branch: Option<String>) -> Self {
        match branch {
            Some(name) => HistoryRequest::Branch(name),
            None => HistoryRequest::AllBranches,
        }
    }
}

/// One branch's changelog model plus what was dropped building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHistory {
    pub model: ChangelogModel,
    pub skipped: SkipTally,
}

/// A branch that could not be read in all-branches mode
#[derive(Debug)]
pub struct BranchFailure {
    pub branch: String,
    pub error: GitError,
}

/// Everything collected for one invocation
#[derive(Debug, Default)]
pub struct HistoryReport {
    /// Successfully collected branches (by branch name in all-branches mode)
    pub branches: Vec<BranchHistory>,

    /// Branches that failed in all-branches mode
    pub failures: Vec<BranchFailure>,
}

impl HistoryReport {
    /// True when no branch failed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collect history for `request` from `query`
pub fn collect_history(
    query: &impl RepositoryQuery,
    request: &HistoryRequest,
) -> Result<HistoryReport, GitError> {
    match request {
        HistoryRequest::Branch(branch) => {
            let raw = query.commits_for(branch)?;
            Ok(HistoryReport {
                branches: vec![build_branch_history(branch, raw)],
                failures: Vec::new(),
            })
        }
        HistoryRequest::AllBranches => {
            let mut branches = query.list_branches()?;
            branches.sort();
            branches.dedup();
            debug!(count = branches.len(), "collecting all branches");

            let mut report = HistoryReport::default();
            for branch in branches {
                match query.commits_for(&branch) {
                    Ok(raw) => report.branches.push(build_branch_history(&branch, raw)),
                    Err(error) => {
                        warn!(%branch, %error, "skipping branch");
                        report.failures.push(BranchFailure { branch, error });
                    }
                }
            }
            Ok(report)
        }
    }
}

/// Normalize, classify and aggregate the raw records of one branch
///
/// Malformed records and unclassifiable file changes are logged, counted
/// in the returned [`SkipTally`], and left out.
pub fn build_branch_history(branch: &str, raw: Vec<RawCommit>) -> BranchHistory {
    let mut skipped = SkipTally::default();
    let mut commits: Vec<Commit> = Vec::with_capacity(raw.len());

    for record in raw {
        let mut commit = match normalize(&record, branch) {
            Ok(commit) => commit,
            Err(error) => {
                warn!(%branch, %error, "skipping commit");
                skipped.malformed_records += 1;
                continue;
            }
        };

        let classified = classify_changes(&record.changes);
        for error in &classified.rejected {
            warn!(%branch, commit = %commit.id, %error, "skipping file change");
        }
        skipped.unknown_changes += classified.rejected.len();
        commit.changed_files = classified.changes;

        commits.push(commit);
    }

    BranchHistory {
        model: aggregate(branch, commits),
        skipped,
    }
}
