//! Scan policies

pub use crate::section::TrailingDates;

/// What to do when the tagger cannot annotate a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaggerFailure {
    /// Abort the whole scan
    #[default]
    Abort,
    /// Drop the line's record and keep scanning; section headers on the
    /// dropped line still take effect
    SkipLine,
}

/// How `opens_with_action_verb` is decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionVerbRule {
    /// Set as soon as any token follows the first past-tense verb
    #[default]
    TenseRun,
    /// Set when the first tense-tagged token is past tense
    FirstVerbIsPast,
}

/// Policies applied by a [`SentenceScanner`](super::SentenceScanner)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub trailing_dates: TrailingDates,
    pub tagger_failure: TaggerFailure,
    pub action_verb_rule: ActionVerbRule,
}

impl ScanOptions {
    /// Create an options builder
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }
}

/// Fluent builder for [`ScanOptions`]
#[derive(Debug, Default)]
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}

impl ScanOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the end-of-document date policy
    pub fn trailing_dates(mut self, policy: TrailingDates) -> Self {
        self.options.trailing_dates = policy;
        self
    }

    /// Shorthand for [`TrailingDates::Flush`] when `flush` is true
    pub fn flush_trailing_dates(self, flush: bool) -> Self {
        self.trailing_dates(if flush {
            TrailingDates::Flush
        } else {
            TrailingDates::Discard
        })
    }

    /// Choose the tagger failure policy
    pub fn tagger_failure(mut self, policy: TaggerFailure) -> Self {
        self.options.tagger_failure = policy;
        self
    }

    /// Choose the action-verb rule
    pub fn action_verb_rule(mut self, rule: ActionVerbRule) -> Self {
        self.options.action_verb_rule = rule;
        self
    }

    pub fn build(self) -> ScanOptions {
        self.options
    }
}
