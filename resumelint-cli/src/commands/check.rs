//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use resumelint_core::{
    check_links, default_lexicon, ActionVerbRule, Critique, Lexicon, LinkReport, ScanOptions,
    SentenceScanner, TaggerFailure,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::http::HttpProbe;
use crate::input::{load_document, resolve_patterns};
use crate::output::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lexicon file replacing the built-in vocabulary
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Probe every link over HTTP
    #[arg(long)]
    pub check_links: bool,

    /// Report the last section's dates too
    #[arg(long)]
    pub flush_trailing_dates: bool,

    /// Leave lines without tokens out of the report
    #[arg(long)]
    pub skip_untagged: bool,

    /// Require the first verb of a line to be past tense
    #[arg(long)]
    pub strict_action_verbs: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one paragraph per finding
    Text,
    /// JSON array with one report per input
    Json,
    /// Markdown checklist
    Markdown,
}

impl OutputFormat {
    fn from_config(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!("unknown output format {other:?}")).into()),
        }
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting resume check");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let custom_lexicon = self.load_lexicon()?;
        let lexicon = custom_lexicon.as_ref().unwrap_or_else(|| default_lexicon());
        log::info!("Using lexicon: {}", lexicon.name());

        let options = self.scan_options(&config);
        let probe = if self.check_links || config.links.enabled {
            Some(HttpProbe::new(&config.links)?)
        } else {
            None
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to check", files.len());

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.default_format)?,
        };
        let writer = self.create_writer()?;
        let mut formatter: Box<dyn ReportFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for file in &files {
            let critique = self.check_file(file, lexicon, options, probe.as_ref())?;
            formatter.format_report(&file.display().to_string(), &critique)?;
        }
        formatter.finish()?;

        log::info!("Checked {} file(s)", files.len());
        Ok(())
    }

    fn check_file(
        &self,
        path: &Path,
        lexicon: &Lexicon,
        options: ScanOptions,
        probe: Option<&HttpProbe>,
    ) -> Result<Critique> {
        let document = load_document(path)?;
        let skip_untagged = options.tagger_failure == TaggerFailure::SkipLine;
        let unannotated = document
            .lines
            .iter()
            .all(|line| line.annotation.tokens.is_empty());
        if unannotated && !skip_untagged && !document.lines.is_empty() {
            log::warn!(
                "{} has no annotations; every body line will lack metrics and action verbs \
                 (pass --skip-untagged to leave such lines out)",
                path.display()
            );
        }

        let tagger = document.tagger().require_tokens(skip_untagged);
        let scanner = SentenceScanner::with_options(lexicon, tagger, options);
        let result = scanner
            .scan(document.texts())
            .map_err(|e| CliError::ScanFailed(format!("{}: {e}", path.display())))?;

        let links = match probe {
            Some(probe) => {
                let mut progress = ProgressReporter::new(self.quiet);
                progress.init_links(document.links.len() as u64);
                let report = check_links(&document.links, probe, |index, url| {
                    progress.checking(index, url)
                });
                progress.finish();
                report
            }
            None => LinkReport::unchecked(document.links.len()),
        };

        Ok(Critique::build(&result, &links, lexicon))
    }

    fn load_lexicon(&self) -> Result<Option<Lexicon>> {
        self.lexicon
            .as_deref()
            .map(|path| {
                Lexicon::from_file(path)
                    .with_context(|| format!("Failed to load lexicon: {}", path.display()))
            })
            .transpose()
    }

    fn scan_options(&self, config: &CliConfig) -> ScanOptions {
        let skip = self.skip_untagged || config.scan.skip_untagged_lines;
        let strict = self.strict_action_verbs || config.scan.strict_action_verbs;
        ScanOptions::builder()
            .flush_trailing_dates(self.flush_trailing_dates || config.scan.flush_trailing_dates)
            .tagger_failure(if skip {
                TaggerFailure::SkipLine
            } else {
                TaggerFailure::Abort
            })
            .action_verb_rule(if strict {
                ActionVerbRule::FirstVerbIsPast
            } else {
                ActionVerbRule::TenseRun
            })
            .build()
    }

    fn create_writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
