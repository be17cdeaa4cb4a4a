//! Scan output types

use serde::{Deserialize, Serialize};

use crate::tally::TenseTally;

/// Phone number verdict for a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCheck {
    /// A line containing digits was found
    pub found: bool,
    /// The number carries the expected country code
    pub country_code_ok: bool,
}

/// Signals extracted from a single input line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// The line, verbatim
    pub text: String,
    /// The line opens a new section
    pub is_section_header: bool,
    /// The section active after this line is metrics-relevant
    pub in_metrics_section: bool,
    /// A metric entity (money, percentage, count...) appears on the line
    pub has_quantified_impact: bool,
    /// Pronouns in order of appearance, duplicates kept
    pub pronouns_found: Vec<String>,
    /// The line starts with a past-tense action verb
    pub opens_with_action_verb: bool,
}

impl SentenceRecord {
    /// A body line subject to metrics and action-verb critique
    pub fn is_critiqued_body(&self) -> bool {
        self.in_metrics_section && !self.is_section_header
    }
}

/// Everything a scan learned about a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// First phone number found in the document
    pub phone: PhoneCheck,
    /// One record per scanned line, in input order
    pub sentences: Vec<SentenceRecord>,
    /// Verb counts over every metrics-relevant body line
    pub tenses: TenseTally,
    /// Leading years of date entities, grouped by section
    pub date_groups: Vec<Vec<String>>,
}

impl ScanResult {
    /// Records for lines that opened a section
    pub fn headers(&self) -> impl Iterator<Item = &SentenceRecord> {
        self.sentences.iter().filter(|record| record.is_section_header)
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
