//! Closed vocabularies the scanner reasons about

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verb tense categories tracked across a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Base form ("manage")
    Base,
    /// Simple past, the expected opener of an achievement bullet ("managed")
    Past,
    /// Gerund or present participle ("managing")
    Gerund,
}

impl Tense {
    /// All categories, in reporting order
    pub const ALL: [Tense; 3] = [Tense::Base, Tense::Past, Tense::Gerund];

    /// Lowercase category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Base => "base",
            Tense::Past => "past",
            Tense::Gerund => "gerund",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a named-entity label matters to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    /// A date; its leading year is collected per section
    Date,
    /// A quantity that counts as measurable impact
    Metric,
    /// Any other label
    Other,
}
