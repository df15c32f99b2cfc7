//! Raw commit records as read from `git log`
//!
//! These carry text exactly as git printed it. Validation happens in
//! [`crate::history::normalizer`].

/// One commit record from `git log`, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCommit {
    /// Full commit hash (may be empty if the record was truncated)
    pub id: String,

    /// Author name
    pub author: String,

    /// Author date, strict ISO 8601 (e.g. `2024-01-02T10:00:00+09:00`)
    pub timestamp: String,

    /// Subject line
    pub message: String,

    /// Parent hashes (empty for a root commit, two or more for a merge)
    pub parents: Vec<String>,

    /// Name-status entries listed under the commit
    pub changes: Vec<RawFileChange>,
}

/// One `--name-status` line
///
/// Formats:
/// - `M\tsrc/lib.rs`
/// - `R087\told/path.rs\tnew/path.rs`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFileChange {
    /// Status code including any similarity score (e.g. `A`, `R100`)
    pub status: String,

    /// Affected path (destination path for renames and copies)
    pub path: String,

    /// Source path for renames and copies
    pub source_path: Option<String>,
}

impl RawFileChange {
    /// Create a token for a single-path status line
    pub fn new(status: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            path: path.into(),
            source_path: None,
        }
    }

    /// Create a token for a rename/copy line
    pub fn with_source(
        status: impl Into<String>,
        source: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            path: path.into(),
            source_path: Some(source.into()),
        }
    }
}
