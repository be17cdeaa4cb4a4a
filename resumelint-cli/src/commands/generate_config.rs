//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use resumelint_core::lexicon::default_lexicon_source;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Name recorded in the lexicon metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Write a CLI configuration file instead of a lexicon
    #[arg(long)]
    pub cli: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let (kind, template) = if self.cli {
            ("CLI configuration", self.generate_cli_template()?)
        } else {
            ("lexicon", self.generate_lexicon_template())
        };

        println!("Generating {kind} template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        if self.cli {
            println!("1. Edit the file to change defaults");
            println!("2. Use it for checking:");
            println!(
                "   resumelint check -i resume.json --config {}",
                self.output.display()
            );
        } else {
            println!("1. Edit the section stems, tags and phone policy");
            println!("2. Validate your lexicon:");
            println!("   resumelint validate -c {}", self.output.display());
            println!("3. Use it for checking:");
            println!(
                "   resumelint check -i resume.json --lexicon {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// The built-in lexicon, renamed
    fn generate_lexicon_template(&self) -> String {
        default_lexicon_source().replacen(
            "name = \"default\"",
            &format!("name = {:?}", self.name),
            1,
        )
    }

    fn generate_cli_template(&self) -> Result<String> {
        Ok(format!(
            "# resumelint CLI configuration\n\n{}",
            CliConfig::default().to_toml_string()?
        ))
    }
}
