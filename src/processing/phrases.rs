//! N-gram phrase extraction from job postings

use crate::config::PhraseConfig;
use crate::processing::text_processor::TextProcessor;
use std::collections::{HashMap, HashSet};

pub struct PhraseExtractor<'a> {
    processor: &'a TextProcessor,
    signal_words: HashSet<String>,
    config: &'a PhraseConfig,
}

impl<'a> PhraseExtractor<'a> {
    pub fn new(processor: &'a TextProcessor, signal_words: &[String], config: &'a PhraseConfig) -> Self {
        Self {
            processor,
            signal_words: signal_words.iter().map(|w| w.to_lowercase()).collect(),
            config,
        }
    }

    /// Top phrases of the text, most frequent first.
    ///
    /// Repeated n-grams carrying a signal word are preferred; when too few of
    /// them exist every signal-bearing n-gram is considered. The result is
    /// diversified so no anchor token dominates.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = self.processor.tokenize(text);
        let ranked = self.ranked_ngrams(&tokens);

        let mut candidates: Vec<String> = ranked
            .iter()
            .filter(|(phrase, count)| *count > 1 && self.is_good_phrase(phrase))
            .map(|(phrase, _)| phrase.clone())
            .collect();

        if candidates.len() < self.config.min_candidates {
            candidates = ranked
                .into_iter()
                .filter(|(phrase, _)| self.is_good_phrase(phrase))
                .map(|(phrase, _)| phrase)
                .collect();
        }

        let mut phrases = rerank_diverse(candidates, self.config.max_per_anchor);
        phrases.truncate(self.config.top_k);
        phrases
    }

    /// N-grams with their counts, ordered by descending count then text
    fn ranked_ngrams(&self, tokens: &[String]) -> Vec<(String, usize)> {
        let n = self.config.ngram_size;
        if n == 0 || tokens.len() < n {
            return Vec::new();
        }

        let mut frequency: HashMap<String, usize> = HashMap::new();
        for window in tokens.windows(n) {
            *frequency.entry(window.join(" ")).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    fn is_good_phrase(&self, phrase: &str) -> bool {
        phrase.split_whitespace().any(|word| self.signal_words.contains(word))
    }
}

/// Keep at most `max_per_anchor` phrases per anchor, the anchor being the
/// phrase's longest token (earliest one on ties).
pub fn rerank_diverse(phrases: Vec<String>, max_per_anchor: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    phrases
        .into_iter()
        .filter(|phrase| {
            let anchor = anchor_token(phrase);
            let seen = counts.entry(anchor).or_insert(0);
            *seen += 1;
            *seen <= max_per_anchor
        })
        .collect()
}

fn anchor_token(phrase: &str) -> String {
    // max_by_key keeps the last maximum, so walk backwards to keep the first
    phrase
        .split_whitespace()
        .rev()
        .max_by_key(|token| token.chars().count())
        .unwrap_or(phrase)
        .to_string()
}
