//! git pretty-format definitions for stable output parsing
//!
//! These formats keep `git log` output parseable regardless of user
//! configuration such as `format.pretty` or `log.date`.

/// Separator printed before every commit record (ASCII record separator)
pub const RECORD_SEPARATOR: char = '\x1e';

/// Separator between header fields (ASCII unit separator)
pub const FIELD_SEPARATOR: char = '\x1f';

/// Separator between fields of a `--name-status` line
pub const STATUS_SEPARATOR: char = '\t';

/// Formats for git commands
pub struct Templates;

impl Templates {
    /// `--pretty` argument for `git log`
    ///
    /// Header fields (separated by 0x1F, record prefixed by 0x1E):
    /// 1. full hash (`%H`)
    /// 2. author name (`%an`)
    /// 3. author date, strict ISO 8601 (`%aI`)
    /// 4. parent hashes, space separated (`%P`)
    /// 5. subject (`%s`)
    ///
    /// `--name-status` lines follow the header.
    pub fn log() -> &'static str {
        "--pretty=format:%x1e%H%x1f%an%x1f%aI%x1f%P%x1f%s"
    }
}
