//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and error patterns.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const BRANCH: &str = "branch";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Set a config value for this invocation (global flag)
    pub const CONFIG: &str = "-c";
    /// Print non-ASCII paths verbatim instead of quoting them
    pub const NO_QUOTE_PATH: &str = "core.quotePath=false";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// List changed paths with a status code
    pub const NAME_STATUS: &str = "--name-status";
    /// Report renames as `R<score>` regardless of `diff.renames`
    pub const FIND_RENAMES: &str = "--find-renames";
    /// `git branch` output format: short ref name only
    pub const BRANCH_FORMAT: &str = "--format=%(refname:short)";
    /// `git rev-parse`: require exactly one valid object name
    pub const VERIFY: &str = "--verify";
    /// `git rev-parse`: no error output for invalid names
    pub const QUIET: &str = "--quiet";
    /// Separates revisions from paths
    pub const END_OF_REVISIONS: &str = "--";
}

/// Suffix peeling a revision to the commit it names
pub const PEEL_TO_COMMIT: &str = "^{commit}";

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating the directory is not inside a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// Pattern indicating `-C <path>` points at a missing directory
    pub const CANNOT_CHANGE_DIR: &str = "cannot change to";
}
