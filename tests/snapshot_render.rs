//! Snapshot tests for rendered summaries and changelogs
//!
//! Uses insta inline snapshots over the full raw-record pipeline.

use insta::assert_snapshot;

use gitsum::history::{BranchHistory, build_branch_history};
use gitsum::model::{RawCommit, RawFileChange};
use gitsum::render::{render_changelog, render_summary};

fn raw(
    id: &str,
    author: &str,
    timestamp: &str,
    message: &str,
    changes: &[(&str, &str)],
) -> RawCommit {
    RawCommit {
        id: id.to_string(),
        author: author.to_string(),
        timestamp: timestamp.to_string(),
        message: message.to_string(),
        parents: Vec::new(),
        changes: changes
            .iter()
            .map(|(status, path)| RawFileChange::new(*status, *path))
            .collect(),
    }
}

/// Three commits over two days, one tie on timestamp, one unknown status
fn sample_history() -> BranchHistory {
    build_branch_history(
        "main",
        vec![
            raw(
                "cccccccccccc",
                "Carol",
                "2024-01-01T23:00:00Z",
                "Initial import",
                &[("A", "src/lib.rs"), ("A", "README.md")],
            ),
            raw(
                "zzzzzzzzzzzz",
                "Alice",
                "2024-01-02T10:00:00Z",
                "Drop legacy module",
                &[("D", "src/legacy.rs"), ("M", "src/lib.rs")],
            ),
            raw(
                "aaaaaaaaaaaa",
                "Bob",
                "2024-01-02T10:00:00Z",
                "Rename parser",
                &[("R100", "src/parser.rs"), ("U", "conflict.txt")],
            ),
            raw(
                "bbbbbbbbbbbb",
                "Bob",
                "2024-01-02T18:00:00+09:00",
                "Tweak docs",
                &[("M", "README.md")],
            ),
        ],
    )
}

#[test]
fn test_changelog_snapshot() {
    let history = sample_history();
    assert_snapshot!(render_changelog(&history.model), @r"
    # Changelog for main

    ## 2024-01-02

    - Rename parser (Bob, aaaaaaa)
      - Modified: src/parser.rs

    - Drop legacy module (Alice, zzzzzzz)
      - Modified: src/lib.rs
      - Deleted: src/legacy.rs

    - Tweak docs (Bob, bbbbbbb)
      - Modified: README.md

    ## 2024-01-01

    - Initial import (Carol, ccccccc)
      - Added: src/lib.rs, README.md
    ");
}

#[test]
fn test_summary_snapshot() {
    let history = sample_history();
    assert_snapshot!(render_summary(&history), @r"
    Branch 'main': 4 commits

    Added files:
      - README.md (in 1 commits)
      - src/lib.rs (in 1 commits)

    Modified files:
      - README.md (in 1 commits)
      - src/lib.rs (in 1 commits)
      - src/parser.rs (in 1 commits)

    Deleted files:
      - src/legacy.rs (in 1 commits)

    Skipped: 0 malformed commits, 1 unrecognized file changes
    ");
}

#[test]
fn test_empty_branch_snapshot() {
    let history = build_branch_history("release", Vec::new());
    assert_snapshot!(render_summary(&history), @"Branch 'release': No commits found.");
    assert_snapshot!(render_changelog(&history.model), @r"
    # Changelog for release

    _No commits found._
    ");
}
