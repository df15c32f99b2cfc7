//! gitsum - git history summaries and changelogs
//!
//! Reads a repository's commit history per branch and renders it as a
//! console summary or a Markdown changelog grouped by date.
//!
//! This library provides:
//! - [`cli`]: Command-line arguments
//! - [`git`]: git command execution and parsing
//! - [`history`]: Normalization, classification and aggregation of commits
//! - [`model`]: Domain models
//! - [`render`]: Console and Markdown output

pub mod cli;
pub mod git;
pub mod history;
pub mod model;
pub mod render;
