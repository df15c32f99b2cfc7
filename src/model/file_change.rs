//! File change data model

use std::fmt;

/// A classified change to one path within a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// File path (destination path for renames)
    pub path: String,

    /// Kind of change
    pub kind: ChangeKind,
}

impl FileChange {
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// The three kinds of change a changelog distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeKind {
    /// File was added (or copied into place)
    Added,

    /// File content, type, or name changed
    Modified,

    /// File was deleted
    Deleted,
}

impl ChangeKind {
    /// All kinds, in display order
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Added, ChangeKind::Modified, ChangeKind::Deleted];

    /// Label used in rendered output ("Added", "Modified", "Deleted")
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Added => "Added",
            ChangeKind::Modified => "Modified",
            ChangeKind::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
