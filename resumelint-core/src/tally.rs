//! Verb occurrence counts grouped by tense

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::Tense;

/// Accumulates how often each verb appears, per tense category.
///
/// A word that was never recorded has a count of zero. The tally only grows:
/// there is no way to decrement or remove a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenseTally {
    counts: BTreeMap<Tense, BTreeMap<String, u32>>,
}

impl TenseTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word` in `tense`
    pub fn record(&mut self, tense: Tense, word: &str) {
        let words = self.counts.entry(tense).or_default();
        match words.get_mut(word) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                words.insert(word.to_string(), 1);
            }
        }
    }

    /// Count one occurrence of every word in `words`
    pub fn record_all<'w>(&mut self, tense: Tense, words: impl IntoIterator<Item = &'w str>) {
        for word in words {
            self.record(tense, word);
        }
    }

    /// Add every count from `other` into this tally
    pub fn merge(&mut self, other: &TenseTally) {
        for (tense, words) in &other.counts {
            let target = self.counts.entry(*tense).or_default();
            for (word, count) in words {
                let entry = target.entry(word.clone()).or_insert(0);
                *entry = entry.saturating_add(*count);
            }
        }
    }

    /// Occurrences of `word` in `tense`
    pub fn count(&self, tense: Tense, word: &str) -> u32 {
        self.counts
            .get(&tense)
            .and_then(|words| words.get(word))
            .copied()
            .unwrap_or(0)
    }

    /// Words recorded in `tense` with their counts, in lexical order
    pub fn words(&self, tense: Tense) -> impl Iterator<Item = (&str, u32)> {
        self.counts
            .get(&tense)
            .into_iter()
            .flat_map(|words| words.iter().map(|(word, count)| (word.as_str(), *count)))
    }

    /// Total occurrences recorded in `tense`
    pub fn total(&self, tense: Tense) -> u64 {
        self.words(tense).map(|(_, count)| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(BTreeMap::is_empty)
    }

    /// Words used strictly more often than the mean count of their category.
    ///
    /// An empty category has no mean and yields an empty set.
    pub fn above_average(&self, tense: Tense) -> BTreeSet<String> {
        let Some(words) = self.counts.get(&tense).filter(|words| !words.is_empty()) else {
            return BTreeSet::new();
        };

        // count > sum / n, kept in integers
        let distinct = words.len() as u64;
        let sum = self.total(tense);
        words
            .iter()
            .filter(|(_, count)| u64::from(**count) * distinct > sum)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_inserts_then_increments() {
        let mut tally = TenseTally::new();
        assert_eq!(tally.count(Tense::Past, "managed"), 0);

        tally.record(Tense::Past, "managed");
        assert_eq!(tally.count(Tense::Past, "managed"), 1);

        tally.record(Tense::Past, "managed");
        assert_eq!(tally.count(Tense::Past, "managed"), 2);
        assert_eq!(tally.count(Tense::Base, "managed"), 0);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut tally = TenseTally::new();
        tally.record_all(Tense::Gerund, ["leading", "leading"]);
        tally.record(Tense::Base, "lead");

        assert_eq!(tally.total(Tense::Gerund), 2);
        assert_eq!(tally.total(Tense::Base), 1);
        assert_eq!(tally.total(Tense::Past), 0);
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut left = TenseTally::new();
        left.record_all(Tense::Past, ["built", "led"]);

        let mut right = TenseTally::new();
        right.record_all(Tense::Past, ["built", "shipped"]);
        right.record(Tense::Gerund, "building");

        left.merge(&right);
        assert_eq!(left.count(Tense::Past, "built"), 2);
        assert_eq!(left.count(Tense::Past, "led"), 1);
        assert_eq!(left.count(Tense::Past, "shipped"), 1);
        assert_eq!(left.count(Tense::Gerund, "building"), 1);
    }

    #[test]
    fn test_above_average() {
        let mut tally = TenseTally::new();
        tally.record_all(Tense::Past, ["led", "led", "led", "built", "shipped"]);

        // mean is 5/3
        let repeated = tally.above_average(Tense::Past);
        assert_eq!(repeated.into_iter().collect::<Vec<_>>(), vec!["led"]);
    }

    #[test]
    fn test_above_average_with_uniform_counts_is_empty() {
        let mut tally = TenseTally::new();
        tally.record_all(Tense::Base, ["build", "lead", "ship"]);
        assert!(tally.above_average(Tense::Base).is_empty());
    }

    #[test]
    fn test_above_average_on_empty_category() {
        let tally = TenseTally::new();
        for tense in Tense::ALL {
            assert!(tally.above_average(tense).is_empty());
        }
    }

    #[test]
    fn test_is_empty() {
        let mut tally = TenseTally::new();
        assert!(tally.is_empty());
        tally.record(Tense::Gerund, "managing");
        assert!(!tally.is_empty());
    }

    #[test]
    fn test_serializes_as_nested_maps() {
        let mut tally = TenseTally::new();
        tally.record(Tense::Past, "led");
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json, serde_json::json!({ "past": { "led": 1 } }));

        let back: TenseTally = serde_json::from_value(json).unwrap();
        assert_eq!(back, tally);
    }
}
