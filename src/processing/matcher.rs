//! Keyword matching and coverage scoring of a resume against a keyword bank

use crate::config::ScoringConfig;
use crate::processing::keyword_bank::{KeywordBank, Term};
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

/// Outcome of matching one resume against one bank.
///
/// `overlap` and `missing` partition the bank. Both are sorted with words
/// first, then phrases, each alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub coverage: f32,
    pub confidence: f32,
    pub overlap: Vec<Term>,
    pub missing: Vec<Term>,
    pub word_coverage: f32,
    pub phrase_coverage: f32,
}

impl MatchResult {
    pub fn overlap_words(&self) -> Vec<String> {
        words_of(&self.overlap)
    }

    pub fn missing_words(&self) -> Vec<String> {
        words_of(&self.missing)
    }

    pub fn overlap_phrases(&self) -> impl Iterator<Item = &Term> {
        self.overlap.iter().filter(|t| t.is_phrase())
    }

    pub fn missing_phrases(&self) -> impl Iterator<Item = &Term> {
        self.missing.iter().filter(|t| t.is_phrase())
    }
}

fn words_of(terms: &[Term]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| !t.is_phrase())
        .map(|t| t.text().to_string())
        .collect()
}

pub struct KeywordMatcher<'a> {
    processor: &'a TextProcessor,
    scoring: &'a ScoringConfig,
}

impl<'a> KeywordMatcher<'a> {
    pub fn new(processor: &'a TextProcessor, scoring: &'a ScoringConfig) -> Self {
        Self { processor, scoring }
    }

    /// Match the resume against every bank term.
    ///
    /// Words are whole-token matches on the normalized resume. Phrases and
    /// resume are both reduced to their full word streams (punctuation
    /// stripped, stop words kept), and a phrase matches only as a contiguous
    /// run, so no word of the resume may sit between its tokens.
    pub fn match_resume(&self, resume_text: &str, bank: &KeywordBank) -> MatchResult {
        let normalized = self.processor.normalize(resume_text);
        let tokens = self.processor.word_tokens(resume_text);

        let (mut overlap, mut missing): (Vec<Term>, Vec<Term>) =
            bank.terms().iter().cloned().partition(|term| match term {
                Term::Word(word) => self.processor.contains_word(&normalized, word),
                Term::Phrase(phrase) => {
                    let phrase_tokens = self.processor.word_tokens(phrase);
                    let needle: Vec<&str> = phrase_tokens.iter().map(String::as_str).collect();
                    TextProcessor::contains_sequence(&tokens, &needle)
                }
            });

        overlap.sort_by_key(Term::sort_key);
        missing.sort_by_key(Term::sort_key);

        let word_coverage = ratio(
            overlap.iter().filter(|t| !t.is_phrase()).count(),
            bank.word_count(),
        );
        let phrase_coverage = ratio(
            overlap.iter().filter(|t| t.is_phrase()).count(),
            bank.phrase_count(),
        );

        let coverage = round3(
            word_coverage * self.scoring.word_weight + phrase_coverage * self.scoring.phrase_weight,
        );
        let confidence = round3(self.confidence(bank.word_count()));

        log::debug!(
            "Matched {}/{} bank terms (words {:.3}, phrases {:.3})",
            overlap.len(),
            bank.len(),
            word_coverage,
            phrase_coverage
        );

        MatchResult {
            coverage,
            confidence,
            overlap,
            missing,
            word_coverage,
            phrase_coverage,
        }
    }

    /// Confidence grows with the number of bank words, up to a cap
    fn confidence(&self, word_count: usize) -> f32 {
        let saturation = (word_count as f32 / self.scoring.confidence_saturation as f32).min(1.0);
        (self.scoring.confidence_base + self.scoring.confidence_span * saturation)
            .min(self.scoring.confidence_cap)
    }
}

fn ratio(hits: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        hits as f32 / total as f32
    }
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
