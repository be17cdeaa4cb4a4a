//! Turning scan results into reviewer feedback

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::lexicon::Lexicon;
use crate::links::LinkReport;
use crate::result::{PhoneCheck, ScanResult, SentenceRecord};
use crate::types::Tense;

/// One piece of feedback about a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Phone number verdict
    Phone {
        found: bool,
        country_code_ok: bool,
        country_code: String,
    },
    /// Problems with a single line
    Sentence {
        text: String,
        missing_metrics: bool,
        missing_action_verb: bool,
        pronouns: Vec<String>,
    },
    /// A section whose entries are not in reverse chronological order
    UnsortedDates { dates: Vec<String> },
    /// Verbs used noticeably more than their peers
    RepeatedWords { tense: Tense, words: Vec<String> },
    /// Links that could not be reached
    BrokenLinks { urls: Vec<String> },
    /// The document has no links at all
    NoLinks,
    /// Every probed link answered
    LinksOk { count: usize },
    /// Links exist but were not probed
    LinksUnchecked { count: usize },
}

impl Finding {
    /// Whether the finding asks the author to change something
    pub fn is_problem(&self) -> bool {
        match self {
            Finding::Phone {
                found,
                country_code_ok,
                ..
            } => !(*found && *country_code_ok),
            Finding::LinksOk { .. } | Finding::LinksUnchecked { .. } => false,
            _ => true,
        }
    }

    /// Supporting lines printed under the headline
    pub fn details(&self) -> Vec<String> {
        match self {
            Finding::Sentence {
                missing_metrics,
                missing_action_verb,
                pronouns,
                ..
            } => {
                let mut details = Vec::new();
                if *missing_metrics {
                    details.push(
                        "It has no metrics: add numbers that show the impact of your work"
                            .to_string(),
                    );
                }
                if *missing_action_verb {
                    details.push("Start the sentence with a past-tense action verb".to_string());
                }
                if !pronouns.is_empty() {
                    details.push(format!("Avoid pronouns, found: {}", pronouns.join(" ")));
                }
                details
            }
            Finding::BrokenLinks { urls } => urls.clone(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Phone { found: false, .. } => write!(f, "No phone number was found"),
            Finding::Phone {
                country_code_ok: false,
                country_code,
                ..
            } => write!(
                f,
                "The phone number doesn't have the +{country_code} country code"
            ),
            Finding::Phone { .. } => write!(f, "The phone number is in the correct format"),
            Finding::Sentence { text, .. } => {
                write!(f, "The sentence \"{text}\" has the following problems:")
            }
            Finding::UnsortedDates { dates } => write!(
                f,
                "Some entries are not in reverse chronological order, their dates are: {}",
                dates.join(" ")
            ),
            Finding::RepeatedWords { tense, words } => write!(
                f,
                "You are repeating {} verbs too often: {}",
                tense,
                words.join(" ")
            ),
            Finding::BrokenLinks { urls } => write!(f, "Found {} broken link(s):", urls.len()),
            Finding::NoLinks => write!(
                f,
                "No links found; link your projects and work so reviewers can see them"
            ),
            Finding::LinksOk { count } => write!(f, "All {count} link(s) are working"),
            Finding::LinksUnchecked { count } => {
                write!(f, "Found {count} link(s); reachability was not checked")
            }
        }
    }
}

/// Ordered feedback for a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critique {
    pub findings: Vec<Finding>,
}

impl Critique {
    /// Build feedback in reporting order: phone, sentences, dates, repetition, links
    pub fn build(scan: &ScanResult, links: &LinkReport, lexicon: &Lexicon) -> Self {
        let mut findings = vec![phone_finding(scan.phone, lexicon)];

        findings.extend(scan.sentences.iter().filter_map(sentence_finding));

        findings.extend(
            scan.date_groups
                .iter()
                .filter(|dates| !is_reverse_chronological(dates))
                .map(|dates| Finding::UnsortedDates {
                    dates: dates.clone(),
                }),
        );

        for tense in Tense::ALL {
            let words = scan.tenses.above_average(tense);
            if !words.is_empty() {
                findings.push(Finding::RepeatedWords {
                    tense,
                    words: words.into_iter().collect(),
                });
            }
        }

        findings.push(link_finding(links));

        Self { findings }
    }

    pub fn problems(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| finding.is_problem())
    }

    pub fn problem_count(&self) -> usize {
        self.problems().count()
    }
}

fn phone_finding(phone: PhoneCheck, lexicon: &Lexicon) -> Finding {
    Finding::Phone {
        found: phone.found,
        country_code_ok: phone.country_code_ok,
        country_code: lexicon.country_code().to_string(),
    }
}

fn sentence_finding(record: &SentenceRecord) -> Option<Finding> {
    let body = record.is_critiqued_body();
    let missing_metrics = body && !record.has_quantified_impact;
    let missing_action_verb = body && !record.opens_with_action_verb;

    if !missing_metrics && !missing_action_verb && record.pronouns_found.is_empty() {
        return None;
    }

    Some(Finding::Sentence {
        text: record.text.clone(),
        missing_metrics,
        missing_action_verb,
        pronouns: record.pronouns_found.clone(),
    })
}

fn link_finding(links: &LinkReport) -> Finding {
    if !links.broken.is_empty() {
        Finding::BrokenLinks {
            urls: links.broken.clone(),
        }
    } else if links.found == 0 {
        Finding::NoLinks
    } else if links.probed() > 0 {
        Finding::LinksOk {
            count: links.probed(),
        }
    } else {
        Finding::LinksUnchecked { count: links.found }
    }
}

fn compare_dates(left: &str, right: &str) -> Ordering {
    match (left.parse::<u64>(), right.parse::<u64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        _ => left.cmp(right),
    }
}

/// Newest entry first, ties allowed
pub fn is_reverse_chronological(dates: &[String]) -> bool {
    dates
        .windows(2)
        .all(|pair| compare_dates(&pair[0], &pair[1]) != Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::default_lexicon;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn body(text: &str) -> SentenceRecord {
        SentenceRecord {
            text: text.to_string(),
            in_metrics_section: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_reverse_chronological() {
        assert!(is_reverse_chronological(&strings(&["2021", "2019", "2019", "2015"])));
        assert!(is_reverse_chronological(&strings(&[])));
        assert!(is_reverse_chronological(&strings(&["2020"])));
        assert!(!is_reverse_chronological(&strings(&["2018", "2021"])));
        // numeric, not lexical
        assert!(is_reverse_chronological(&strings(&["10000", "2020"])));
    }

    #[test]
    fn test_phone_messages() {
        let missing = phone_finding(PhoneCheck::default(), default_lexicon());
        assert_eq!(missing.to_string(), "No phone number was found");
        assert!(missing.is_problem());

        let no_code = phone_finding(
            PhoneCheck {
                found: true,
                country_code_ok: false,
            },
            default_lexicon(),
        );
        assert_eq!(
            no_code.to_string(),
            "The phone number doesn't have the +52 country code"
        );

        let ok = phone_finding(
            PhoneCheck {
                found: true,
                country_code_ok: true,
            },
            default_lexicon(),
        );
        assert!(!ok.is_problem());
    }

    #[test]
    fn test_sentence_findings_only_for_critiqued_bodies() {
        let header = SentenceRecord {
            text: "Projects".into(),
            is_section_header: true,
            in_metrics_section: true,
            ..Default::default()
        };
        assert_eq!(sentence_finding(&header), None);

        let outside = SentenceRecord {
            text: "Jane Doe".into(),
            ..Default::default()
        };
        assert_eq!(sentence_finding(&outside), None);

        let weak = body("Responsible for the team");
        let finding = sentence_finding(&weak).unwrap();
        assert_eq!(finding.details().len(), 2);

        let strong = SentenceRecord {
            has_quantified_impact: true,
            opens_with_action_verb: true,
            ..body("Cut costs by 20%")
        };
        assert_eq!(sentence_finding(&strong), None);
    }

    #[test]
    fn test_pronouns_are_reported_anywhere() {
        let record = SentenceRecord {
            text: "I am a developer".into(),
            pronouns_found: vec!["I".into()],
            ..Default::default()
        };
        let finding = sentence_finding(&record).unwrap();
        assert_eq!(finding.details(), vec!["Avoid pronouns, found: I"]);
    }

    #[test]
    fn test_link_findings() {
        assert_eq!(link_finding(&LinkReport::unchecked(0)), Finding::NoLinks);
        assert_eq!(
            link_finding(&LinkReport::unchecked(2)),
            Finding::LinksUnchecked { count: 2 }
        );

        let ok = LinkReport {
            found: 2,
            checked: true,
            ..Default::default()
        };
        assert_eq!(link_finding(&ok), Finding::LinksOk { count: 2 });

        let mail_only = LinkReport {
            found: 1,
            checked: true,
            broken: Vec::new(),
            skipped: strings(&["mailto:jane@example.com"]),
        };
        assert_eq!(
            link_finding(&mail_only),
            Finding::LinksUnchecked { count: 1 }
        );

        let mixed = LinkReport {
            found: 3,
            checked: true,
            broken: Vec::new(),
            skipped: strings(&["mailto:jane@example.com"]),
        };
        assert_eq!(link_finding(&mixed), Finding::LinksOk { count: 2 });

        let broken = LinkReport {
            found: 2,
            checked: true,
            broken: strings(&["https://gone.example.com"]),
            skipped: Vec::new(),
        };
        let finding = link_finding(&broken);
        assert_eq!(finding.details(), strings(&["https://gone.example.com"]));
    }

    #[test]
    fn test_build_orders_findings() {
        let mut scan = ScanResult {
            phone: PhoneCheck {
                found: true,
                country_code_ok: true,
            },
            sentences: vec![body("Helped with stuff")],
            date_groups: vec![strings(&["2019", "2021"]), strings(&["2021", "2019"])],
            ..Default::default()
        };
        scan.tenses
            .record_all(Tense::Past, ["led", "led", "built"]);

        let critique = Critique::build(&scan, &LinkReport::unchecked(0), default_lexicon());
        let kinds: Vec<_> = critique
            .findings
            .iter()
            .map(|finding| match finding {
                Finding::Phone { .. } => "phone",
                Finding::Sentence { .. } => "sentence",
                Finding::UnsortedDates { .. } => "dates",
                Finding::RepeatedWords { .. } => "repeated",
                Finding::NoLinks => "no_links",
                _ => "other",
            })
            .collect();

        assert_eq!(kinds, vec!["phone", "sentence", "dates", "repeated", "no_links"]);
        assert_eq!(critique.problem_count(), 4);
    }

    #[test]
    fn test_finding_json_is_tagged() {
        let json = serde_json::to_value(Finding::RepeatedWords {
            tense: Tense::Gerund,
            words: vec!["leading".into()],
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "repeated_words", "tense": "gerund", "words": ["leading"] })
        );
    }
}
