//! gitsum - git history summaries and changelogs
//!
//! Binary entry point.

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use gitsum::cli::Cli;
use gitsum::history::collect_history;
use gitsum::render::print_report_to_console;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    run(&cli)
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Collect, print and optionally write changelogs.
///
/// Fatal errors propagate; branches that failed in all-branches mode are
/// reported after the others and turn the exit code non-zero.
fn run(cli: &Cli) -> color_eyre::Result<ExitCode> {
    let executor = cli.executor();
    let report = collect_history(&executor, &cli.request())
        .wrap_err("Failed to read repository history")?;

    let changelog_dir = cli.changelog.then_some(cli.output.as_path());
    Ok(print_report_to_console(&report, changelog_dir)?)
}
