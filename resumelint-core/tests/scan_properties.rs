//! Property tests for the scanner and its classifiers

use proptest::prelude::*;
use resumelint_core::nlp::{Annotation, Entity, TaggerError, Token};
use resumelint_core::{default_lexicon, SentenceScanner, Tense, TenseTally};

/// Words are tagged from a fixed table so every run is reproducible
fn table_tagger(line: &str) -> Result<Annotation, TaggerError> {
    let tokens = line
        .split_whitespace()
        .map(|word| match word {
            "led" | "built" | "shipped" => Token::new(word, "VERB", "VBD"),
            "leading" | "building" => Token::new(word, "VERB", "VBG"),
            "lead" | "build" => Token::new(word, "VERB", "VB"),
            "I" | "we" => Token::new(word, "PRON", "PRP"),
            _ => Token::new(word, "NOUN", "NN"),
        })
        .collect();
    let entities = line
        .split_whitespace()
        .filter(|word| word.len() == 4 && word.chars().all(|c| c.is_ascii_digit()))
        .map(|year| Entity::new("DATE", year))
        .collect();
    Ok(Annotation { tokens, entities })
}

fn resume_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Experience".to_string()),
        Just("Projects".to_string()),
        Just("Education".to_string()),
        Just("Skills".to_string()),
        prop::collection::vec(
            prop::sample::select(vec![
                "led", "built", "shipped", "leading", "building", "lead", "build", "I", "we",
                "the", "team", "api", "2019", "2021", "2017",
            ]),
            0..8,
        )
        .prop_map(|words| words.join(" ")),
    ]
}

proptest! {
    #[test]
    fn phone_requires_a_digit(line in "\\PC*") {
        let check = default_lexicon().is_phone_candidate(&line);
        let has_digit = line.chars().any(|c| c.is_ascii_digit());
        prop_assert_eq!(check.found, has_digit);
        if !check.found {
            prop_assert!(!check.country_code_ok);
        }
    }

    #[test]
    fn short_digit_runs_never_carry_a_country_code(digits in "[0-9]{1,10}") {
        let check = default_lexicon().is_phone_candidate(&digits);
        prop_assert!(check.found);
        prop_assert!(!check.country_code_ok);
    }

    #[test]
    fn prefixed_numbers_carry_the_country_code(subscriber in "[0-9]{10}") {
        let line = format!("+52 {subscriber}");
        prop_assert!(default_lexicon().is_phone_candidate(&line).country_code_ok);
    }

    #[test]
    fn scan_preserves_line_order(lines in prop::collection::vec(resume_line(), 0..20)) {
        let scanner = SentenceScanner::new(default_lexicon(), table_tagger);
        let result = scanner.scan(&lines).unwrap();
        let texts: Vec<_> = result.sentences.iter().map(|r| r.text.clone()).collect();
        prop_assert_eq!(texts, lines);
    }

    #[test]
    fn scan_is_deterministic(lines in prop::collection::vec(resume_line(), 0..20)) {
        let scanner = SentenceScanner::new(default_lexicon(), table_tagger);
        prop_assert_eq!(scanner.scan(&lines).unwrap(), scanner.scan(&lines).unwrap());
    }

    #[test]
    fn only_active_body_lines_carry_signals(lines in prop::collection::vec(resume_line(), 0..20)) {
        let scanner = SentenceScanner::new(default_lexicon(), table_tagger);
        let result = scanner.scan(&lines).unwrap();
        for record in &result.sentences {
            if record.is_section_header || !record.in_metrics_section {
                prop_assert!(!record.has_quantified_impact);
                prop_assert!(!record.opens_with_action_verb);
            }
        }
        for group in &result.date_groups {
            prop_assert!(!group.is_empty());
        }
    }

    #[test]
    fn tally_counts_only_grow(words in prop::collection::vec("[a-z]{1,6}", 1..30)) {
        let mut tally = TenseTally::new();
        for word in &words {
            let before = tally.count(Tense::Past, word);
            tally.record(Tense::Past, word);
            prop_assert_eq!(tally.count(Tense::Past, word), before + 1);
        }
        prop_assert_eq!(tally.total(Tense::Past), words.len() as u64);
    }

    #[test]
    fn above_average_words_beat_the_mean(words in prop::collection::vec("[a-c]", 0..30)) {
        let mut tally = TenseTally::new();
        tally.record_all(Tense::Gerund, words.iter().map(String::as_str));

        let distinct = tally.words(Tense::Gerund).count() as u64;
        let total = tally.total(Tense::Gerund);
        for word in tally.above_average(Tense::Gerund) {
            let count = u64::from(tally.count(Tense::Gerund, &word));
            prop_assert!(count * distinct > total);
        }
    }
}
