//! Commit data model

use chrono::{DateTime, NaiveDate, Utc};

use super::{ChangeKind, FileChange};

/// Length of the abbreviated hash shown in changelogs
pub const SHORT_ID_LEN: usize = 7;

/// A normalized commit on one branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash
    pub id: String,

    /// Branch this commit was read from
    pub branch: String,

    /// Author name
    pub author: String,

    /// Author timestamp, normalized to UTC
    pub timestamp: DateTime<Utc>,

    /// Calendar day of `timestamp` in UTC
    pub date: NaiveDate,

    /// Subject line
    pub message: String,

    /// Parent hashes
    pub parents: Vec<String>,

    /// Classified file changes, in the order git listed them
    pub changed_files: Vec<FileChange>,
}

impl Commit {
    /// Abbreviated hash (first 7 characters)
    pub fn short_id(&self) -> &str {
        self.id.get(..SHORT_ID_LEN).unwrap_or(&self.id)
    }

    /// Message for display, with a placeholder for empty subjects
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            "(no message)"
        } else {
            &self.message
        }
    }

    /// Is this a merge commit (more than one parent)?
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Paths changed with the given kind, in change order
    pub fn paths_of(&self, kind: ChangeKind) -> impl Iterator<Item = &str> {
        self.changed_files
            .iter()
            .filter(move |f| f.kind == kind)
            .map(|f| f.path.as_str())
    }
}
