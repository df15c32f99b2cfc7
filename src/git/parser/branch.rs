//! Parser for `git branch --format=%(refname:short)` output

/// Parse one branch name per line
///
/// Skips blank lines and the `(HEAD detached at ...)` pseudo-entry git
/// prints for a detached HEAD.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('('))
        .map(str::to_string)
        .collect()
}
