//! Console summary renderer

use crate::history::BranchHistory;
use crate::model::ChangeKind;

/// Render the summary of one branch
///
/// Lists every added, modified and deleted path with the number of commits
/// that touched it that way, followed by a note about skipped records.
pub fn render_summary(history: &BranchHistory) -> String {
    let model = &history.model;
    let mut lines = Vec::new();

    if model.is_empty() {
        lines.push(format!("Branch '{}': No commits found.", model.branch));
    } else {
        let merges = model.merge_count();
        if merges == 0 {
            lines.push(format!(
                "Branch '{}': {} commits",
                model.branch,
                model.commit_count()
            ));
        } else {
            lines.push(format!(
                "Branch '{}': {} commits ({} merges)",
                model.branch,
                model.commit_count(),
                merges
            ));
        }

        let summary = model.change_summary();
        for kind in ChangeKind::ALL {
            if summary.file_count(kind) == 0 {
                continue;
            }
            lines.push(String::new());
            lines.push(format!("{} files:", kind.label()));
            for (path, count) in summary.files(kind) {
                lines.push(format!("  - {} (in {} commits)", path, count));
            }
        }
    }

    if !history.skipped.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Skipped: {} malformed commits, {} unrecognized file changes",
            history.skipped.malformed_records, history.skipped.unknown_changes
        ));
    }

    lines.join("\n")
}
