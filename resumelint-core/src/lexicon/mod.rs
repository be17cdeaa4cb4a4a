//! Lexical classifiers
//!
//! A [`Lexicon`] holds every vocabulary the scanner consults: section stems,
//! pronoun and verb tags, entity labels, and the phone-number policy. All
//! classifiers are pure functions of the lexicon and their arguments, so one
//! lexicon can be shared freely between scans and threads.
//!
//! ```rust
//! use resumelint_core::lexicon::default_lexicon;
//!
//! let lexicon = default_lexicon();
//! assert!(lexicon.is_section_header("Work Experience").metrics_relevant);
//! assert_eq!(lexicon.is_pronoun("PRON", "I"), Some("I"));
//! ```

pub mod config;
mod loader;

pub use config::LexiconConfig;
pub use loader::{default_lexicon, default_lexicon_source};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::LexiconError;
use crate::result::PhoneCheck;
use crate::types::{EntityClass, Tense};

/// Outcome of classifying a line as a potential section header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionClass {
    /// The section that follows receives metrics critique
    pub metrics_relevant: bool,
    /// The line delimits a section
    pub is_header: bool,
}

/// Immutable vocabulary used by the lexical classifiers
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    country_code: String,
    subscriber_digits: usize,
    max_header_words: usize,
    metric_stems: Vec<String>,
    ignored_stems: Vec<String>,
    pronoun_pos: String,
    ignored_pronouns: HashSet<String>,
    base_tag: String,
    past_tag: String,
    gerund_tag: String,
    date_label: String,
    metric_labels: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from a validated configuration
    pub fn from_config(config: LexiconConfig) -> Result<Self, LexiconError> {
        config.validate()?;

        let flatten = |categories: std::collections::BTreeMap<String, Vec<String>>| {
            categories
                .into_values()
                .flatten()
                .map(|stem| stem.to_lowercase())
                .collect::<Vec<_>>()
        };

        Ok(Self {
            name: config.metadata.name,
            country_code: config.phone.country_code,
            subscriber_digits: config.phone.subscriber_digits,
            max_header_words: config.sections.max_header_words,
            metric_stems: flatten(config.sections.metric),
            ignored_stems: flatten(config.sections.ignored),
            pronoun_pos: config.pronouns.pos,
            ignored_pronouns: config
                .pronouns
                .ignored
                .iter()
                .map(|word| word.to_uppercase())
                .collect(),
            base_tag: config.tenses.base,
            past_tag: config.tenses.past,
            gerund_tag: config.tenses.gerund,
            date_label: config.entities.date,
            metric_labels: config.entities.metric.into_iter().collect(),
        })
    }

    /// Parse and validate a lexicon from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        Self::from_config(LexiconConfig::from_toml_str(source)?)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let source = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn metric_stems(&self) -> &[String] {
        &self.metric_stems
    }

    pub fn ignored_stems(&self) -> &[String] {
        &self.ignored_stems
    }

    /// Look for a phone number in a line.
    ///
    /// Every digit of the line is kept; the last `subscriber_digits` digits are
    /// the subscriber number and the country code must appear somewhere in
    /// what precedes them.
    pub fn is_phone_candidate(&self, line: &str) -> PhoneCheck {
        let digits: String = line.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return PhoneCheck::default();
        }

        let prefix = &digits[..digits.len().saturating_sub(self.subscriber_digits)];
        PhoneCheck {
            found: true,
            country_code_ok: prefix.contains(self.country_code.as_str()),
        }
    }

    /// Return the word if it is a pronoun worth reporting
    pub fn is_pronoun<'w>(&self, pos: &str, word: &'w str) -> Option<&'w str> {
        (pos == self.pronoun_pos && !self.ignored_pronouns.contains(&word.to_uppercase()))
            .then_some(word)
    }

    /// Decide whether a line is a section header, and of which kind
    pub fn is_section_header(&self, line: &str) -> SectionClass {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() > self.max_header_words {
            return SectionClass::default();
        }

        let joined = words.join(" ").to_lowercase();
        let matches = |stems: &[String]| stems.iter().any(|stem| joined.contains(stem.as_str()));

        if matches(&self.metric_stems) {
            SectionClass {
                metrics_relevant: true,
                is_header: true,
            }
        } else if matches(&self.ignored_stems) {
            SectionClass {
                metrics_relevant: false,
                is_header: true,
            }
        } else {
            SectionClass::default()
        }
    }

    pub fn has_metric_entity(&self, label: &str) -> bool {
        self.metric_labels.contains(label)
    }

    pub fn entity_class(&self, label: &str) -> EntityClass {
        if label == self.date_label {
            EntityClass::Date
        } else if self.has_metric_entity(label) {
            EntityClass::Metric
        } else {
            EntityClass::Other
        }
    }

    pub fn is_past_tense_tag(&self, tag: &str) -> bool {
        tag == self.past_tag
    }

    pub fn is_gerund_tag(&self, tag: &str) -> bool {
        tag == self.gerund_tag
    }

    pub fn is_base_verb_tag(&self, tag: &str) -> bool {
        tag == self.base_tag
    }

    /// Fold a fine-grained tag into its tense category; past wins over gerund over base
    pub fn tense_of(&self, tag: &str) -> Option<Tense> {
        if self.is_past_tense_tag(tag) {
            Some(Tense::Past)
        } else if self.is_gerund_tag(tag) {
            Some(Tense::Gerund)
        } else if self.is_base_verb_tag(tag) {
            Some(Tense::Base)
        } else {
            None
        }
    }

    /// Pull the first number with more than two digits out of a date entity
    pub fn extract_leading_digits(&self, label: &str, text: &str) -> Option<String> {
        if label != self.date_label {
            return None;
        }

        text.split_whitespace()
            .map(|word| word.chars().filter(char::is_ascii_digit).collect::<String>())
            .find(|digits| digits.len() > 2)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        default_lexicon().clone()
    }
}
