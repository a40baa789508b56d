//! Bump command implementation
//!
//! Loads the options file, layers the command-line flags over it, bumps
//! every matched manifest and reports the result.

use crate::bump::{BumpSummary, bump_task_manifest_files};
use crate::cli::args::{Cli, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, load_config, merge_options};
use crate::config::options::RawOptions;
use crate::error::{BumpError, ConfigError};
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io;
use std::path::Path;

/// Error type specific to the bump command
#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("Failed to load options file: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bump(#[from] BumpError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Run the bump command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Any error; the message is written to stderr
pub fn run_bump(cli: &Cli) -> i32 {
    let formatter = HumanFormatter::new(cli.color.into());

    match run_bump_inner(cli, &formatter) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "bump failed");
            if formatter.print_error(&e.to_string()).is_err() {
                eprintln!("Fatal error encountered. {}", e);
            }
            EXIT_ERROR
        }
    }
}

fn run_bump_inner(cli: &Cli, formatter: &HumanFormatter) -> Result<(), CommandError> {
    let cwd = std::env::current_dir()?;
    let options = resolve_options(cli, &cwd)?;
    let quiet = options.quiet.unwrap_or(false);

    let summary = bump_task_manifest_files(&cli.files, Some(&options))?;

    if !quiet {
        report(cli.format, formatter, &summary)?;
    }

    Ok(())
}

fn resolve_options(cli: &Cli, cwd: &Path) -> Result<RawOptions, ConfigError> {
    let config = load_config(cli.config.as_deref(), cwd)?;
    Ok(merge_options(config, cli.raw_options()))
}

fn report(
    format: OutputFormat,
    formatter: &HumanFormatter,
    summary: &BumpSummary,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => formatter.print_summary(summary),
        OutputFormat::Jsonl => {
            print!("{}", JsonlFormatter::new().format(summary));
            Ok(())
        }
    }
}
