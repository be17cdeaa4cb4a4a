//! resumelint command-line entry point

use clap::Parser;
use resumelint_cli::commands::Commands;

/// Critique resumes: phone format, metrics, action verbs, pronouns, date order and links
#[derive(Debug, Parser)]
#[command(name = "resumelint", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
