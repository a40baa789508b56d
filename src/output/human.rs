//! Human-readable progress output
//!
//! Lines carry a local `[HH:MM:SS]` timestamp. Version numbers and counts are
//! highlighted when color is enabled.

use crate::bump::BumpSummary;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter writing to stdout (progress) and stderr (errors)
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }

    /// Prints the bump summary to stdout
    pub fn print_summary(&self, summary: &BumpSummary) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.color);
        write_summary(&mut out, summary)
    }

    /// Prints a fatal error to stderr
    pub fn print_error(&self, message: &str) -> io::Result<()> {
        let mut err = StandardStream::stderr(self.color);
        write_timestamp(&mut err)?;
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        err.set_color(&spec)?;
        write!(err, "Fatal error encountered.")?;
        err.reset()?;
        writeln!(err, " {}", message)
    }
}

/// Writes the summary line followed by one line per bumped file
pub fn write_summary<W: WriteColor>(out: &mut W, summary: &BumpSummary) -> io::Result<()> {
    write_timestamp(out)?;
    write!(out, "Bumped ")?;
    write_colored(out, Color::Blue, &summary.bumped_files.len().to_string())?;
    write!(out, " task manifest file(s) using bump type ")?;
    write_colored(out, Color::Blue, summary.release_type.as_str())?;
    writeln!(out)?;

    for file in &summary.bumped_files {
        write_timestamp(out)?;
        write!(out, "Bumped ")?;
        write_colored(out, Color::Blue, &file.initial_version)?;
        write!(out, " to ")?;
        write_colored(out, Color::Magenta, &file.bumped_version)?;
        writeln!(out, " in {}", file.file_path.display())?;
    }

    Ok(())
}

fn write_timestamp<W: WriteColor>(out: &mut W) -> io::Result<()> {
    let now = chrono::Local::now().format("%H:%M:%S");
    write!(out, "[")?;
    let mut spec = ColorSpec::new();
    spec.set_dimmed(true);
    out.set_color(&spec)?;
    write!(out, "{}", now)?;
    out.reset()?;
    write!(out, "] ")
}

fn write_colored<W: WriteColor>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{}", text)?;
    out.reset()
}
