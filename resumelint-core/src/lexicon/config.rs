use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::LexiconError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    pub phone: PhoneConfig,
    pub sections: SectionsConfig,
    pub pronouns: PronounConfig,
    pub tenses: TenseConfig,
    pub entities: EntityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    pub country_code: String,
    #[serde(default = "default_subscriber_digits")]
    pub subscriber_digits: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default = "default_max_header_words")]
    pub max_header_words: usize,
    /// Stem categories whose sections receive metrics critique
    pub metric: BTreeMap<String, Vec<String>>,
    /// Stem categories recognized as headers but not critiqued
    #[serde(default)]
    pub ignored: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronounConfig {
    pub pos: String,
    #[serde(default)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenseConfig {
    pub base: String,
    pub past: String,
    pub gerund: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
    pub date: String,
    pub metric: Vec<String>,
}

fn default_subscriber_digits() -> usize {
    10
}

fn default_max_header_words() -> usize {
    3
}

impl LexiconConfig {
    /// Parse a lexicon configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        toml::from_str(source).map_err(|e| LexiconError::Configuration(e.to_string()))
    }

    /// Check the invariants the classifiers rely on
    pub fn validate(&self) -> Result<(), LexiconError> {
        if self.metadata.name.trim().is_empty() {
            return Err(LexiconError::Invalid("metadata.name must not be empty".into()));
        }

        let code = &self.phone.country_code;
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(LexiconError::Invalid(format!(
                "phone.country_code must be a non-empty digit string, got {code:?}"
            )));
        }

        if self.sections.max_header_words == 0 {
            return Err(LexiconError::Invalid(
                "sections.max_header_words must be greater than 0".into(),
            ));
        }

        if self.sections.metric.values().all(Vec::is_empty) {
            return Err(LexiconError::Invalid(
                "sections.metric must contain at least one stem".into(),
            ));
        }

        for (table, categories) in [
            ("metric", &self.sections.metric),
            ("ignored", &self.sections.ignored),
        ] {
            for (category, stems) in categories {
                if stems.iter().any(|stem| stem.trim().is_empty()) {
                    return Err(LexiconError::Invalid(format!(
                        "sections.{table}.{category} contains an empty stem"
                    )));
                }
            }
        }

        let tags = [
            ("pronouns.pos", &self.pronouns.pos),
            ("tenses.base", &self.tenses.base),
            ("tenses.past", &self.tenses.past),
            ("tenses.gerund", &self.tenses.gerund),
            ("entities.date", &self.entities.date),
        ];
        for (field, tag) in tags {
            if tag.trim().is_empty() {
                return Err(LexiconError::Invalid(format!("{field} must not be empty")));
            }
        }

        let tenses = &self.tenses;
        if tenses.base == tenses.past || tenses.base == tenses.gerund || tenses.past == tenses.gerund
        {
            return Err(LexiconError::Invalid(
                "tenses.base, tenses.past and tenses.gerund must be distinct tags".into(),
            ));
        }

        if self.entities.metric.contains(&self.entities.date) {
            return Err(LexiconError::Invalid(format!(
                "entities.metric must not contain the date label {}",
                self.entities.date
            )));
        }

        Ok(())
    }
}
