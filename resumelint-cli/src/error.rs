//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Input that can be read but not turned into resume lines
    UnsupportedInput(String),
    /// Scanning error from core
    ScanFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnsupportedInput(msg) => write!(f, "Unsupported input: {msg}"),
            CliError::ScanFailed(msg) => write!(f, "Scan failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("resume.json".to_string());
        assert_eq!(error.to_string(), "File not found: resume.json");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `colour`".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown field `colour`"
        );
    }

    #[test]
    fn test_unsupported_input_display() {
        let error = CliError::UnsupportedInput("resume.docx".to_string());
        assert_eq!(error.to_string(), "Unsupported input: resume.docx");
    }

    #[test]
    fn test_scan_failed_display() {
        let error = CliError::ScanFailed("tagger failed on line 3".to_string());
        assert_eq!(error.to_string(), "Scan failed: tagger failed on line 3");
    }

    #[test]
    fn test_errors_convert_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("cv.pdf".to_string()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert!(error.to_string().contains("cv.pdf"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("currículum/josé 履歴書.pdf".to_string());
        assert_eq!(error.to_string(), "File not found: currículum/josé 履歴書.pdf");
    }
}
