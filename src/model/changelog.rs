//! Changelog model produced by the history aggregator

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{ChangeKind, Commit};

/// Commits sharing one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub date: NaiveDate,

    /// Most recent first; equal timestamps ordered by id ascending
    pub commits: Vec<Commit>,
}

/// One branch's history grouped by date, most recent date first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogModel {
    pub branch: String,
    pub entries: Vec<ChangelogEntry>,
}

impl ChangelogModel {
    /// Create a model with no entries
    pub fn empty(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of commits across all entries
    pub fn commit_count(&self) -> usize {
        self.entries.iter().map(|e| e.commits.len()).sum()
    }

    /// Number of merge commits across all entries
    pub fn merge_count(&self) -> usize {
        self.commits().filter(|c| c.is_merge()).count()
    }

    /// Iterate commits in changelog order
    pub fn commits(&self) -> impl Iterator<Item = &Commit> {
        self.entries.iter().flat_map(|e| e.commits.iter())
    }

    /// Count, per change kind and path, how many commits touched the path
    pub fn change_summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for commit in self.commits() {
            for change in &commit.changed_files {
                *summary
                    .counts
                    .entry(change.kind)
                    .or_default()
                    .entry(change.path.clone())
                    .or_default() += 1;
            }
        }
        summary
    }
}

/// Per-path commit counts for each change kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    counts: BTreeMap<ChangeKind, BTreeMap<String, usize>>,
}

impl ChangeSummary {
    /// Paths with the given kind and their commit counts, ordered by path
    pub fn files(&self, kind: ChangeKind) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .get(&kind)
            .into_iter()
            .flat_map(|files| files.iter().map(|(path, count)| (path.as_str(), *count)))
    }

    /// Number of distinct paths with the given kind
    pub fn file_count(&self, kind: ChangeKind) -> usize {
        self.counts.get(&kind).map_or(0, BTreeMap::len)
    }
}

/// Records and file changes dropped while building a branch's history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipTally {
    /// Commits dropped as malformed
    pub malformed_records: usize,

    /// File-change entries dropped for an unrecognized status code
    pub unknown_changes: usize,
}

impl SkipTally {
    pub fn is_empty(&self) -> bool {
        self.malformed_records == 0 && self.unknown_changes == 0
    }
}
