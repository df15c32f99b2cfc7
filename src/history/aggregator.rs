//! History aggregator
//!
//! Groups normalized commits into changelog models: one model per branch,
//! entries per calendar date (most recent first), commits per entry by
//! timestamp descending with ties broken by id ascending. The result does
//! not depend on input order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::model::{ChangelogEntry, ChangelogModel, Commit};

/// Build the changelog model for `branch`
///
/// Commits recorded under another branch are left out. An empty input
/// yields a model with no entries.
pub fn aggregate(branch: &str, commits: Vec<Commit>) -> ChangelogModel {
    let mut by_date: BTreeMap<NaiveDate, Vec<Commit>> = BTreeMap::new();

    for commit in commits {
        if commit.branch != branch {
            warn!(
                commit = %commit.id,
                commit_branch = %commit.branch,
                branch,
                "ignoring commit from another branch"
            );
            continue;
        }
        by_date.entry(commit.date).or_default().push(commit);
    }

    let entries = by_date
        .into_iter()
        .rev()
        .map(|(date, mut commits)| {
            commits.sort_by(changelog_order);
            ChangelogEntry { date, commits }
        })
        .collect();

    ChangelogModel {
        branch: branch.to_string(),
        entries,
    }
}

/// Build one model per branch present in `commits`, ordered by branch name
///
/// Commits of different branches are never merged under one date.
pub fn aggregate_branches(commits: Vec<Commit>) -> Vec<ChangelogModel> {
    let mut by_branch: BTreeMap<String, Vec<Commit>> = BTreeMap::new();
    for commit in commits {
        by_branch
            .entry(commit.branch.clone())
            .or_default()
            .push(commit);
    }

    by_branch
        .into_iter()
        .map(|(branch, commits)| aggregate(&branch, commits))
        .collect()
}

/// Most recent first, then id ascending
fn changelog_order(a: &Commit, b: &Commit) -> Ordering {
    b.timestamp
        .cmp(&a.timestamp)
        .then_with(|| a.id.cmp(&b.id))
}
