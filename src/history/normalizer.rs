//! Commit normalizer
//!
//! Turns a [`RawCommit`] into a [`Commit`] with a UTC timestamp and the
//! calendar date derived from it. File changes are classified separately.

use chrono::{DateTime, Utc};

use super::HistoryError;
use crate::model::{Commit, RawCommit};

/// git's `--date=iso` layout, e.g. `2024-01-02 10:00:00 +0900`
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Placeholder id used in diagnostics when the record has none
const MISSING_ID: &str = "(no id)";

/// Normalize one raw record read from `branch`
///
/// Fails with [`HistoryError::MalformedRecord`] if the id or timestamp is
/// missing, or the timestamp cannot be parsed. The returned commit has no
/// file changes yet.
pub fn normalize(raw: &RawCommit, branch: &str) -> Result<Commit, HistoryError> {
    let id = raw.id.trim();
    if id.is_empty() {
        return Err(malformed(MISSING_ID, "missing commit id"));
    }

    let text = raw.timestamp.trim();
    if text.is_empty() {
        return Err(malformed(id, "missing timestamp"));
    }
    let timestamp = parse_timestamp(text)
        .ok_or_else(|| malformed(id, &format!("unparseable timestamp {:?}", text)))?;

    Ok(Commit {
        id: id.to_string(),
        branch: branch.to_string(),
        author: raw.author.trim().to_string(),
        timestamp,
        // Derived after UTC conversion so grouping ignores the local zone
        date: timestamp.date_naive(),
        message: raw.message.trim().to_string(),
        parents: raw.parents.clone(),
        changed_files: Vec::new(),
    })
}

/// Parse a strict ISO 8601 / RFC 3339 or git `iso` timestamp into UTC
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_str(text, GIT_ISO_FORMAT))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn malformed(id: &str, reason: &str) -> HistoryError {
    HistoryError::MalformedRecord {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
