//! Section state machine

use log::debug;

use crate::lexicon::Lexicon;

/// What happens to dates still buffered when the document ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingDates {
    /// Drop them; the last section's dates never reach a group
    #[default]
    Discard,
    /// Emit them as a final group
    Flush,
}

/// Tracker decision for one line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionDecision {
    /// The line is a section header
    pub is_header: bool,
    /// The header opens a metrics-relevant section
    pub metrics_relevant: bool,
    /// Whether the section in force after this line is metrics-relevant
    pub active: bool,
}

/// Follows section boundaries across a stream of lines.
///
/// Dates pushed while a section is open stay pending until the next header
/// arrives, at which point a non-empty buffer becomes a finished group.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    active: bool,
    pending_dates: Vec<String>,
    groups: Vec<Vec<String>>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance over one line; must run before any extraction for that line
    pub fn observe(&mut self, line: &str, lexicon: &Lexicon) -> SectionDecision {
        let class = lexicon.is_section_header(line);

        if class.is_header {
            if !self.pending_dates.is_empty() {
                self.groups.push(std::mem::take(&mut self.pending_dates));
            }
            if self.active != class.metrics_relevant {
                debug!(
                    "section {:?} switches metrics critique {}",
                    line,
                    if class.metrics_relevant { "on" } else { "off" }
                );
            }
            self.active = class.metrics_relevant;
        }

        SectionDecision {
            is_header: class.is_header,
            metrics_relevant: class.metrics_relevant,
            active: self.active,
        }
    }

    /// Buffer a date found in the open section
    pub fn push_date(&mut self, date: String) {
        self.pending_dates.push(date);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending_dates(&self) -> &[String] {
        &self.pending_dates
    }

    /// Close the stream and hand back the finished date groups
    pub fn finish(mut self, trailing: TrailingDates) -> Vec<Vec<String>> {
        if !self.pending_dates.is_empty() {
            match trailing {
                TrailingDates::Flush => self.groups.push(self.pending_dates),
                TrailingDates::Discard => debug!(
                    "discarding {} trailing date(s) of the last section",
                    self.pending_dates.len()
                ),
            }
        }
        self.groups
    }
}
