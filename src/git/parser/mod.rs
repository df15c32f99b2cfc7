//! git output parser
//!
//! Parses the output from git commands into raw records. Parsing never
//! fails outright: incomplete records are returned with empty fields and
//! rejected later by the normalizer, so one bad record cannot hide the rest.

mod branch;
mod log;

pub use branch::parse_branch_list;


/// Parser for git command output
pub struct Parser;
