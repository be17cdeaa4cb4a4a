//! Sentence scanner
//!
//! [`SentenceScanner::scan`] folds over the lines of a resume once, left to
//! right. Each line is annotated by the [`Tagger`], checked for pronouns,
//! pushed through the [`SectionTracker`], and, inside metrics-relevant
//! sections, mined for verb tenses, dates and quantities. All mutable state
//! lives inside a single `scan` call, so a scanner can be reused and shared.

mod options;

pub use options::{ActionVerbRule, ScanOptions, ScanOptionsBuilder, TaggerFailure, TrailingDates};

use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::error::{Result, ScanError};
use crate::lexicon::Lexicon;
use crate::nlp::{Annotation, Tagger};
use crate::result::{PhoneCheck, ScanResult, SentenceRecord};
use crate::section::SectionTracker;
use crate::tally::TenseTally;
use crate::types::{EntityClass, Tense};

type Words<'a> = SmallVec<[&'a str; 4]>;

/// Scans resume lines into a [`ScanResult`]
pub struct SentenceScanner<'l, T> {
    lexicon: &'l Lexicon,
    tagger: T,
    options: ScanOptions,
}

impl<'l, T: Tagger> SentenceScanner<'l, T> {
    /// Create a scanner with default options
    pub fn new(lexicon: &'l Lexicon, tagger: T) -> Self {
        Self::with_options(lexicon, tagger, ScanOptions::default())
    }

    /// Create a scanner with explicit options
    pub fn with_options(lexicon: &'l Lexicon, tagger: T, options: ScanOptions) -> Self {
        Self {
            lexicon,
            tagger,
            options,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// Scan lines in reading order
    pub fn scan<I, S>(&self, lines: I) -> Result<ScanResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phone: Option<PhoneCheck> = None;
        let mut tracker = SectionTracker::new();
        let mut tenses = TenseTally::new();
        let mut sentences = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();

            if phone.is_none() {
                let check = self.lexicon.is_phone_candidate(line);
                if check.found {
                    debug!("phone number found on line {index}: {check:?}");
                    phone = Some(check);
                }
            }

            let annotation = match self.tagger.annotate(line) {
                Ok(annotation) => annotation,
                Err(source) => match self.options.tagger_failure {
                    TaggerFailure::Abort => {
                        return Err(ScanError::Tagger {
                            line: index,
                            source,
                        })
                    }
                    TaggerFailure::SkipLine => {
                        warn!("skipping line {index}: {source}");
                        tracker.observe(line, self.lexicon);
                        continue;
                    }
                },
            };

            let pronouns_found = annotation
                .tokens
                .iter()
                .filter_map(|token| self.lexicon.is_pronoun(&token.pos, &token.text))
                .map(str::to_string)
                .collect();

            let decision = tracker.observe(line, self.lexicon);
            let mut record = SentenceRecord {
                text: line.to_string(),
                is_section_header: decision.is_header,
                in_metrics_section: decision.active,
                pronouns_found,
                ..Default::default()
            };

            if decision.active && !decision.is_header {
                self.extract_signals(&annotation, &mut record, &mut tracker, &mut tenses);
            }

            trace!("line {index}: {record:?}");
            sentences.push(record);
        }

        Ok(ScanResult {
            phone: phone.unwrap_or_default(),
            sentences,
            tenses,
            date_groups: tracker.finish(self.options.trailing_dates),
        })
    }

    /// Tense, date and metric extraction for a body line of a metrics-relevant section
    fn extract_signals(
        &self,
        annotation: &Annotation,
        record: &mut SentenceRecord,
        tracker: &mut SectionTracker,
        tenses: &mut TenseTally,
    ) {
        let mut past = Words::new();
        let mut gerund = Words::new();
        let mut base = Words::new();
        let mut opener = ActionVerbScan::new(self.options.action_verb_rule);

        for token in &annotation.tokens {
            let tense = self.lexicon.tense_of(&token.tag);
            opener.observe(tense);

            match tense {
                Some(Tense::Past) => past.push(&token.text),
                Some(Tense::Gerund) => gerund.push(&token.text),
                Some(Tense::Base) => base.push(&token.text),
                None => {}
            }
        }
        record.opens_with_action_verb = opener.opens();

        tenses.record_all(Tense::Base, base);
        tenses.record_all(Tense::Past, past);
        tenses.record_all(Tense::Gerund, gerund);

        for entity in &annotation.entities {
            match self.lexicon.entity_class(&entity.label) {
                EntityClass::Date => {
                    if let Some(date) = self
                        .lexicon
                        .extract_leading_digits(&entity.label, &entity.text)
                    {
                        tracker.push_date(date);
                    }
                }
                EntityClass::Metric => record.has_quantified_impact = true,
                EntityClass::Other => {}
            }
        }
    }
}

/// Left-to-right decision of whether a line opens with an action verb
struct ActionVerbScan {
    rule: ActionVerbRule,
    past_seen: bool,
    decided: bool,
    opens: bool,
}

impl ActionVerbScan {
    fn new(rule: ActionVerbRule) -> Self {
        Self {
            rule,
            past_seen: false,
            decided: false,
            opens: false,
        }
    }

    fn observe(&mut self, tense: Option<Tense>) {
        if !self.decided {
            match self.rule {
                ActionVerbRule::TenseRun => {
                    let base = tense == Some(Tense::Base);
                    // a base verb after a past one, or any other token after a past one
                    if (base && self.past_seen) || (self.past_seen && !base) {
                        self.opens = true;
                        self.decided = true;
                    } else if base {
                        // a base verb ahead of every past verb settles it as false
                        self.decided = true;
                    }
                }
                ActionVerbRule::FirstVerbIsPast => {
                    if let Some(tense) = tense {
                        self.opens = tense == Tense::Past;
                        self.decided = true;
                    }
                }
            }
        }

        // only earlier tokens count as "seen"
        if tense == Some(Tense::Past) {
            self.past_seen = true;
        }
    }

    fn opens(&self) -> bool {
        self.opens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::default_lexicon;
    use crate::nlp::{Entity, TaggerError, Token};

    fn tags(tags: &[&str]) -> Vec<Option<Tense>> {
        tags.iter().map(|tag| default_lexicon().tense_of(tag)).collect()
    }

    fn run(rule: ActionVerbRule, tenses: Vec<Option<Tense>>) -> bool {
        let mut scan = ActionVerbScan::new(rule);
        for tense in tenses {
            scan.observe(tense);
        }
        scan.opens()
    }

    /// Tags each word as `word/TAG`, entities as `LABEL:text` separated by `|`
    fn slash_tagger(line: &str) -> std::result::Result<Annotation, TaggerError> {
        let (body, entities) = line.split_once(" || ").unwrap_or((line, ""));
        let tokens = body
            .split_whitespace()
            .map(|word| match word.split_once('/') {
                Some((text, "PRP")) => Token::new(text, "PRON", "PRP"),
                Some((text, tag)) => Token::new(text, "X", tag),
                None => Token::new(word, "X", "NN"),
            })
            .collect();
        let entities = entities
            .split('|')
            .filter_map(|pair| pair.split_once(':'))
            .map(|(label, text)| Entity::new(label, text))
            .collect();
        Ok(Annotation { tokens, entities })
    }

    #[test]
    fn test_tense_run_requires_token_after_past_verb() {
        assert!(run(ActionVerbRule::TenseRun, tags(&["VBD", "DT", "NN"])));
        assert!(run(ActionVerbRule::TenseRun, tags(&["VBD", "VB"])));
        assert!(!run(ActionVerbRule::TenseRun, tags(&["VBD"])));
        assert!(!run(ActionVerbRule::TenseRun, tags(&["NN", "VBG", "NN"])));
        assert!(!run(ActionVerbRule::TenseRun, Vec::new()));
    }

    #[test]
    fn test_tense_run_is_order_sensitive() {
        // a past verb late in the line still counts once something follows it
        assert!(run(ActionVerbRule::TenseRun, tags(&["NN", "VBD", "NN"])));
        assert!(run(ActionVerbRule::TenseRun, tags(&["NN", "VBG", "VBD", "VB"])));
        assert!(!run(ActionVerbRule::TenseRun, tags(&["NN", "VB", "NN", "VBD"])));
    }

    #[test]
    fn test_tense_run_stops_at_base_verb_before_past_verb() {
        assert!(!run(ActionVerbRule::TenseRun, tags(&["NN", "VB", "VBD", "NN"])));
        assert!(!run(ActionVerbRule::TenseRun, tags(&["VB", "VBD", "DT", "NN"])));
    }

    #[test]
    fn test_scan_base_verb_before_past_verb() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner
            .scan(["Projects", "Help/VB customers and resolved/VBD tickets"])
            .unwrap();

        let line = &result.sentences[1];
        assert!(!line.opens_with_action_verb);
        assert_eq!(result.tenses.count(Tense::Base, "Help"), 1);
        assert_eq!(result.tenses.count(Tense::Past, "resolved"), 1);
    }

    #[test]
    fn test_first_verb_is_past() {
        assert!(run(ActionVerbRule::FirstVerbIsPast, tags(&["VBD"])));
        assert!(run(ActionVerbRule::FirstVerbIsPast, tags(&["NN", "VBD", "VB"])));
        assert!(!run(ActionVerbRule::FirstVerbIsPast, tags(&["VB", "VBD", "NN"])));
        assert!(!run(ActionVerbRule::FirstVerbIsPast, tags(&["NN", "JJ"])));
    }

    #[test]
    fn test_scan_empty_input() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner.scan(Vec::<String>::new()).unwrap();
        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn test_phone_latches_first_line_with_digits() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner
            .scan(["Jane Doe", "Tel 5556565656", "+52 55 5656 5656"])
            .unwrap();
        assert_eq!(
            result.phone,
            PhoneCheck {
                found: true,
                country_code_ok: false
            }
        );
    }

    #[test]
    fn test_pronouns_collected_everywhere() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner
            .scan(["I/PRP like it/PRP and I/PRP code", "Skills", "my/PRP tools"])
            .unwrap();
        assert_eq!(result.sentences[0].pronouns_found, vec!["I", "I"]);
        assert!(result.sentences[1].pronouns_found.is_empty());
        assert_eq!(result.sentences[2].pronouns_found, vec!["my"]);
    }

    #[test]
    fn test_signals_only_inside_metric_sections() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner
            .scan([
                "Led/VBD a team || CARDINAL:5",
                "Projects",
                "Led/VBD a team || CARDINAL:5|DATE:May 2020",
                "Education",
                "Studied/VBD hard || DATE:2015|PERCENT:90%",
            ])
            .unwrap();

        let outside = &result.sentences[0];
        assert!(!outside.in_metrics_section);
        assert!(!outside.has_quantified_impact);
        assert!(!outside.opens_with_action_verb);

        let inside = &result.sentences[2];
        assert!(inside.in_metrics_section);
        assert!(inside.has_quantified_impact);
        assert!(inside.opens_with_action_verb);

        assert!(!result.sentences[4].has_quantified_impact);
        assert_eq!(result.tenses.count(Tense::Past, "Led"), 1);
        assert_eq!(result.tenses.count(Tense::Past, "Studied"), 0);
        assert_eq!(result.date_groups, vec![vec!["2020".to_string()]]);
    }

    #[test]
    fn test_header_lines_are_not_mined() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner.scan(["Work", "Research/VBD Projects"]).unwrap();
        let header = &result.sentences[1];
        assert!(header.is_section_header);
        assert!(header.in_metrics_section);
        assert!(!header.opens_with_action_verb);
        assert!(result.tenses.is_empty());
    }

    #[test]
    fn test_tenses_recorded_per_category() {
        let scanner = SentenceScanner::new(default_lexicon(), slash_tagger);
        let result = scanner
            .scan([
                "Experience",
                "Built/VBD tools for building/VBG apps to ship/VB fast",
                "Built/VBD dashboards",
            ])
            .unwrap();
        assert_eq!(result.tenses.count(Tense::Past, "Built"), 2);
        assert_eq!(result.tenses.count(Tense::Gerund, "building"), 1);
        assert_eq!(result.tenses.count(Tense::Base, "ship"), 1);
    }

    #[test]
    fn test_flush_trailing_dates_option() {
        let lines = ["Work", "Intern/NN || DATE:June 2019"];

        let discard = SentenceScanner::new(default_lexicon(), slash_tagger);
        assert!(discard.scan(lines).unwrap().date_groups.is_empty());

        let flush = SentenceScanner::with_options(
            default_lexicon(),
            slash_tagger,
            ScanOptions::builder().flush_trailing_dates(true).build(),
        );
        assert_eq!(
            flush.scan(lines).unwrap().date_groups,
            vec![vec!["2019".to_string()]]
        );
    }

    #[test]
    fn test_tagger_failure_aborts_by_default() {
        let tagger = |line: &str| {
            if line.contains("boom") {
                Err(TaggerError::Failed("unparsable".into()))
            } else {
                Ok(Annotation::default())
            }
        };
        let scanner = SentenceScanner::new(default_lexicon(), tagger);
        match scanner.scan(["fine", "boom", "fine"]) {
            Err(ScanError::Tagger { line, .. }) => assert_eq!(line, 1),
            other => panic!("Expected tagger error, got {other:?}"),
        }
    }

    #[test]
    fn test_tagger_failure_skip_line_keeps_section_state() {
        let tagger = |line: &str| {
            if line == "Projects" {
                Err(TaggerError::Failed("unparsable".into()))
            } else {
                slash_tagger(line)
            }
        };
        let options = ScanOptions::builder()
            .tagger_failure(TaggerFailure::SkipLine)
            .build();
        let scanner = SentenceScanner::with_options(default_lexicon(), tagger, options);
        let result = scanner
            .scan(["Projects", "Wrote/VBD a parser || MONEY:$10"])
            .unwrap();

        assert_eq!(result.sentences.len(), 1);
        assert!(result.sentences[0].in_metrics_section);
        assert!(result.sentences[0].has_quantified_impact);
    }
}
