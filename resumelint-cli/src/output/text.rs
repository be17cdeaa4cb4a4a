//! Plain text output formatter

use super::ReportFormatter;
use anyhow::Result;
use resumelint_core::Critique;
use std::io::{self, Write};

/// Plain text formatter - one paragraph per finding
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, critique: &Critique) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        writeln!(self.writer, "== {source} ==")?;
        writeln!(self.writer)?;
        for finding in &critique.findings {
            writeln!(self.writer, "{finding}")?;
            for detail in finding.details() {
                writeln!(self.writer, "  {detail}")?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{} problem(s) found", critique.problem_count())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
