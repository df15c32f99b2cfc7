//! Change classifier
//!
//! Maps git name-status codes onto the three [`ChangeKind`]s.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::HistoryError;
use crate::model::{ChangeKind, FileChange, RawFileChange};

/// Regex for a name-status code: one status letter plus an optional
/// similarity score (e.g. `M`, `R100`, `C075`)
///
/// Groups:
/// 1. status letter
static STATUS_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])\d{0,3}$").expect("Invalid status code regex"));

/// Classify one name-status token
///
/// | code    | kind     |
/// |---------|----------|
/// | A, C    | Added    |
/// | M, T, R | Modified |
/// | D       | Deleted  |
///
/// Any other code fails with [`HistoryError::UnknownChangeKind`], as does a
/// token without a path.
pub fn classify(token: &RawFileChange) -> Result<FileChange, HistoryError> {
    let unknown = || HistoryError::UnknownChangeKind {
        status: token.status.clone(),
        path: token.path.clone(),
    };

    if token.path.is_empty() {
        return Err(unknown());
    }

    let letter = STATUS_CODE_REGEX
        .captures(&token.status)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(unknown)?;

    let kind = match letter {
        'A' | 'C' => ChangeKind::Added,
        'M' | 'T' | 'R' => ChangeKind::Modified,
        'D' => ChangeKind::Deleted,
        _ => return Err(unknown()),
    };

    Ok(FileChange::new(token.path.as_str(), kind))
}

/// Result of classifying one commit's tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Classified changes, at most one per path, in token order
    pub changes: Vec<FileChange>,

    /// Tokens that could not be classified
    pub rejected: Vec<HistoryError>,
}

/// Classify all tokens of one commit
///
/// If a path occurs more than once, the first classified occurrence wins.
pub fn classify_changes(tokens: &[RawFileChange]) -> Classified {
    let mut classified = Classified::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in tokens {
        match classify(token) {
            Ok(change) => {
                if seen.insert(token.path.as_str()) {
                    classified.changes.push(change);
                } else {
                    debug!(path = %token.path, status = %token.status, "dropping repeated path");
                }
            }
            Err(e) => classified.rejected.push(e),
        }
    }

    classified
}
