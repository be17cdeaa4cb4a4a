//! Markdown output formatter

use super::ReportFormatter;
use anyhow::Result;
use resumelint_core::Critique;
use std::io::Write;

/// Markdown formatter - one section per resume, findings as a checklist
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    problem_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            problem_count: 0,
        }
    }
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, critique: &Critique) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for finding in &critique.findings {
            let mark = if finding.is_problem() { " " } else { "x" };
            writeln!(self.writer, "- [{mark}] {finding}")?;
            for detail in finding.details() {
                writeln!(self.writer, "  - {detail}")?;
            }
        }
        writeln!(self.writer)?;
        self.problem_count += critique.problem_count();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total problems: {}*", self.problem_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
