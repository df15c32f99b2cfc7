//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::git::GitExecutor;
use crate::history::HistoryRequest;

/// Default output directory for changelog files
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gitsum")]
#[command(about = "Summarize git branch history and generate Markdown changelogs")]
#[command(version)]
pub struct Cli {
    /// Branch to summarize (default: all local branches)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Also write a changelog_<branch>.md file per branch
    #[arg(short, long)]
    pub changelog: bool,

    /// Output directory for changelog files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Repository to inspect (default: current directory)
    #[arg(short = 'C', long = "repo")]
    pub repo: Option<PathBuf>,
}

impl Cli {
    /// Which branches to collect
    pub fn request(&self) -> HistoryRequest {
        HistoryRequest::from_branch(self.branch.clone())
    }

    /// Executor bound to the selected repository
    pub fn executor(&self) -> GitExecutor {
        match &self.repo {
            Some(path) => GitExecutor::with_repo_path(path.clone()),
            None => GitExecutor::new(),
        }
    }
}
