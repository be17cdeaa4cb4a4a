//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use resumelint_core::{Critique, Finding};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<ReportData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportData {
    /// Input the report was built from
    pub source: String,
    /// Number of findings that ask for a change
    pub problems: usize,
    /// Every finding, in reporting order
    pub findings: Vec<Finding>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, critique: &Critique) -> Result<()> {
        self.reports.push(ReportData {
            source: source.to_string(),
            problems: critique.problem_count(),
            findings: critique.findings.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
