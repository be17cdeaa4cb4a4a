//! Output formatting module

use anyhow::Result;
use resumelint_core::Critique;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and output the critique of one resume
    fn format_report(&mut self, source: &str, critique: &Critique) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
