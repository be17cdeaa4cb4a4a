//! Error types for the scanning pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::nlp::TaggerError;

/// Errors raised while loading or validating a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The TOML source could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The configuration parsed but violates a lexicon invariant
    #[error("Invalid lexicon: {0}")]
    Invalid(String),

    /// The lexicon file could not be read
    #[error("Failed to read lexicon file {}: {source}", path.display())]
    Io {
        /// Path of the lexicon file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a resume scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The tagger could not annotate a line
    #[error("tagger failed on line {line}: {source}")]
    Tagger {
        /// Zero-based index of the offending line
        line: usize,
        /// Failure reported by the tagger
        #[source]
        source: TaggerError,
    },
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
