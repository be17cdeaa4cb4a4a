//! Extract command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::input::extract_document;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Resume to extract (PDF or plain text)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write compact JSON
    #[arg(long)]
    pub compact: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        let document = extract_document(&self.input)?;
        let json = if self.compact {
            serde_json::to_string(&document)?
        } else {
            serde_json::to_string_pretty(&document)?
        };

        match &self.output {
            Some(path) => {
                fs::write(path, format!("{json}\n"))
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!(
                    "✓ Extracted {} line(s) and {} link(s) to {}",
                    document.lines.len(),
                    document.links.len(),
                    path.display()
                );
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
