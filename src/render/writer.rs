//! Changelog file writer

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{OutputError, render_changelog};
use crate::model::ChangelogModel;

/// File name for a branch's changelog: `changelog_<branch>.md`
///
/// `%`, `/` and `\` in the branch name are percent-encoded
/// (`feature/x` becomes `changelog_feature%2Fx.md`), so every changelog
/// lands directly in the output directory and distinct branches never
/// share a file.
pub fn changelog_file_name(branch: &str) -> String {
    let mut safe = String::with_capacity(branch.len());
    for c in branch.chars() {
        match c {
            '%' => safe.push_str("%25"),
            '/' => safe.push_str("%2F"),
            '\\' => safe.push_str("%5C"),
            _ => safe.push(c),
        }
    }
    format!("changelog_{}.md", safe)
}

/// Render `model` and write it into `dir`, creating `dir` if needed
///
/// Returns the path of the written file.
pub fn write_changelog(dir: &Path, model: &ChangelogModel) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::WriteFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(changelog_file_name(&model.branch));
    fs::write(&path, render_changelog(model)).map_err(|source| OutputError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "changelog written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::build_branch_history;
    use crate::model::RawCommit;
    use tempfile::TempDir;

    fn raw(id: &str, message: &str) -> RawCommit {
        RawCommit {
            id: id.to_string(),
            author: "Alice".to_string(),
            timestamp: "2024-01-02T10:00:00Z".to_string(),
            message: message.to_string(),
            parents: Vec::new(),
            changes: Vec::new(),
        }
    }

    #[test]
    fn test_changelog_file_name() {
        assert_eq!(changelog_file_name("main"), "changelog_main.md");
        assert_eq!(
            changelog_file_name("feature/login"),
            "changelog_feature%2Flogin.md"
        );
        assert_eq!(changelog_file_name("a\\b"), "changelog_a%5Cb.md");
        assert_eq!(changelog_file_name("100%"), "changelog_100%25.md");
    }

    #[test]
    fn test_changelog_file_name_distinguishes_similar_branches() {
        let names = [
            changelog_file_name("feature/x"),
            changelog_file_name("feature_x"),
            changelog_file_name("feature%2Fx"),
            changelog_file_name("feature\\x"),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_write_changelog_similar_branches_get_separate_files() {
        let dir = TempDir::new().unwrap();
        let slash = build_branch_history("feature/x", vec![raw("aaaaaaa", "From slash branch")]);
        let underscore =
            build_branch_history("feature_x", vec![raw("bbbbbbb", "From underscore branch")]);

        let slash_path = write_changelog(dir.path(), &slash.model).unwrap();
        let underscore_path = write_changelog(dir.path(), &underscore.model).unwrap();

        assert_ne!(slash_path, underscore_path);
        let slash_content = fs::read_to_string(&slash_path).unwrap();
        assert!(slash_content.contains("From slash branch"));
        assert!(!slash_content.contains("From underscore branch"));
        let underscore_content = fs::read_to_string(&underscore_path).unwrap();
        assert!(underscore_content.contains("From underscore branch"));
    }

    #[test]
    fn test_write_changelog_creates_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("out");

        let path = write_changelog(&out, &ChangelogModel::empty("main")).unwrap();

        assert_eq!(path, out.join("changelog_main.md"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Changelog for main"));
    }

    #[test]
    fn test_write_changelog_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("changelog_main.md");
        fs::write(&target, "stale").unwrap();

        write_changelog(dir.path(), &ChangelogModel::empty("main")).unwrap();

        assert_ne!(fs::read_to_string(&target).unwrap(), "stale");
    }

    #[test]
    fn test_write_changelog_reports_target_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let err = write_changelog(&blocker, &ChangelogModel::empty("main")).unwrap_err();
        let OutputError::WriteFailed { path, .. } = err else {
            panic!("expected OutputError::WriteFailed");
        };
        assert_eq!(path, blocker);
    }
}
