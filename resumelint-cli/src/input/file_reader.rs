//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Kinds of resume input the CLI understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Annotated or extracted document JSON
    Document,
    /// PDF export of a resume
    Pdf,
    /// Plain text, one line per resume line
    Text,
}

impl InputKind {
    /// Guess the input kind from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => InputKind::Document,
            Some("pdf") => InputKind::Pdf,
            _ => InputKind::Text,
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
