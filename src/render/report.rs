//! Console output for a collected [`HistoryReport`]

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crossterm::style::Stylize;

use super::{OutputError, render_summary, write_changelog};
use crate::history::HistoryReport;

/// Width of the line printed between branch summaries
const SEPARATOR_WIDTH: usize = 50;

/// Print every branch summary to `out`, write changelogs into
/// `changelog_dir` when given, and report failed branches on `err`
///
/// Failed branches are reported after all others were printed. Returns
/// [`ExitCode::FAILURE`] if any branch failed.
pub fn print_report(
    report: &HistoryReport,
    changelog_dir: Option<&Path>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode, OutputError> {
    for history in &report.branches {
        writeln!(out, "{}", render_summary(history)).map_err(OutputError::Console)?;
        writeln!(out, "\n{}\n", "-".repeat(SEPARATOR_WIDTH)).map_err(OutputError::Console)?;

        if let Some(dir) = changelog_dir {
            let path = write_changelog(dir, &history.model)?;
            writeln!(out, "Changelog generated: {}", path.display())
                .map_err(OutputError::Console)?;
        }
    }

    for failure in &report.failures {
        writeln!(
            err,
            "{} branch '{}': {}",
            "Error:".red().bold(),
            failure.branch,
            failure.error
        )
        .map_err(OutputError::Console)?;
    }

    out.flush().and_then(|_| err.flush()).map_err(OutputError::Console)?;

    if report.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// [`print_report`] to the process's stdout and stderr
pub fn print_report_to_console(
    report: &HistoryReport,
    changelog_dir: Option<&Path>,
) -> Result<ExitCode, OutputError> {
    print_report(
        report,
        changelog_dir,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
