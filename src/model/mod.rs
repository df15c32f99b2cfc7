//! Data models for gitsum
//!
//! Raw records as read from git, the normalized commit representation,
//! and the changelog model handed to renderers.

mod changelog;
mod commit;
mod file_change;
mod raw;

pub use changelog::{ChangeSummary, ChangelogEntry, ChangelogModel, SkipTally};
pub use commit::{Commit, SHORT_ID_LEN};
pub use file_change::{ChangeKind, FileChange};
pub use raw::{RawCommit, RawFileChange};
