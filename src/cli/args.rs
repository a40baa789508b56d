//! CLI argument parsing using clap

use crate::config::options::{IndentValue, RawOptions};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for bump results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// azp-bump CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "azp-bump")]
#[command(about = "Bump the versions of Azure Pipelines task manifests")]
#[command(override_usage = "azp-bump <FILES>... [OPTIONS]")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Globs of task manifest files to bump
    pub files: Vec<String>,

    /// The bump version type. Allowed values: major, minor, or patch.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub release_type: Option<String>,

    /// The spacing indent to use while updating the task manifests. Allowed
    /// values: 1-10 (inclusive) OR t, tab, or '\t'.
    #[arg(short, long, value_parser = parse_indent, allow_hyphen_values = true)]
    pub indent: Option<IndentValue>,

    /// Controls the property type of the version fields. Allowed values: string, number.
    #[arg(short = 'p', long, value_name = "TYPE")]
    pub version_property_type: Option<String>,

    /// Including this flag will disable the log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Options file (defaults to azp-bump.toml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Cli {
    /// Options given on the command line; unset flags stay `None`
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            release_type: self.release_type.clone(),
            indent: self.indent.clone(),
            version_property_type: self.version_property_type.clone(),
            quiet: self.quiet.then_some(true),
        }
    }
}

/// Parses the indent flag
///
/// Tab markers (`t`, `tab`, a tab character or the escape `\t`) select a
/// tab. Anything else is read like `parseInt`: the leading decimal integer
/// (or hex after `0x`), or NaN when there is none.
pub fn parse_indent(value: &str) -> Result<IndentValue, String> {
    if matches!(value, "t" | "tab" | "\t" | "\\t") {
        return Ok(IndentValue::Text("\t".to_string()));
    }

    Ok(IndentValue::Number(parse_leading_int(value)))
}

fn parse_leading_int(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    let (digits, radix) = match digits.get(..2) {
        Some("0x" | "0X") => (&digits[2..], 16),
        _ => (digits, 10),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }

    u64::from_str_radix(&digits[..end], radix).map_or(f64::INFINITY, |n| n as f64) * sign
}
