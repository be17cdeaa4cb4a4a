//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use resumelint_core::default_lexicon;

pub mod check;
pub mod extract;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Critique annotated resumes
    Check(check::CheckArgs),

    /// Extract lines and links from a PDF or text resume
    Extract(extract::ExtractArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon or CLI configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the built-in section stems
    Sections,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::Extract(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn render(&self) -> String {
        match self {
            ListCommands::Formats => [
                "Available output formats:",
                "  text      - Plain text, one paragraph per finding",
                "  json      - JSON array with one report per input",
                "  markdown  - Markdown checklist",
                "",
            ]
            .join("\n"),
            ListCommands::Sections => {
                let lexicon = default_lexicon();
                format!(
                    "Metric sections (critiqued):\n  {}\nOther sections:\n  {}\n",
                    lexicon.metric_stems().join(", "),
                    lexicon.ignored_stems().join(", ")
                )
            }
        }
    }
}
