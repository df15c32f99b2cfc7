//! Markdown changelog renderer

use crate::model::{ChangeKind, ChangelogModel, Commit};

/// Render a branch's changelog as Markdown
///
/// ```text
/// # Changelog for main
///
/// ## 2024-01-02
///
/// - Add parser (Alice, 1a2b3c4)
///   - Added: src/parser.rs
///   - Modified: src/lib.rs
/// ```
///
/// Dates and commits appear in model order.
pub fn render_changelog(model: &ChangelogModel) -> String {
    let mut lines = vec![format!("# Changelog for {}", model.branch), String::new()];

    if model.is_empty() {
        lines.push("_No commits found._".to_string());
    }

    for entry in &model.entries {
        lines.push(format!("## {}", entry.date.format("%Y-%m-%d")));
        lines.push(String::new());

        for commit in &entry.commits {
            lines.extend(commit_lines(commit));
            lines.push(String::new());
        }
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Bullet for one commit plus one sub-bullet per non-empty change kind
///
/// Merge commits are tagged `merge` after the short id.
fn commit_lines(commit: &Commit) -> Vec<String> {
    let tag = if commit.is_merge() { ", merge" } else { "" };
    let mut lines = vec![format!(
        "- {} ({}, {}{})",
        commit.display_message(),
        commit.author,
        commit.short_id(),
        tag
    )];

    for kind in ChangeKind::ALL {
        let paths: Vec<&str> = commit.paths_of(kind).collect();
        if !paths.is_empty() {
            lines.push(format!("  - {}: {}", kind.label(), paths.join(", ")));
        }
    }

    lines
}
