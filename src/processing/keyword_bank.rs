//! Keyword bank: the terms and phrases a job posting is checked against

use crate::config::Config;
use crate::error::{CopilotError, Result};
use crate::processing::phrases::PhraseExtractor;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Prefix that marks multi-word entries in rendered keyword lists
pub const PHRASE_TAG: &str = "[PHRASE]";

/// A single keyword bank entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Term {
    Word(String),
    Phrase(String),
}

impl Term {
    pub fn word(text: &str) -> Self {
        Term::Word(text.trim().to_string())
    }

    /// Phrases are stored lowercased with single spaces between tokens
    pub fn phrase(text: &str) -> Self {
        let normalized = text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        Term::Phrase(normalized)
    }

    pub fn text(&self) -> &str {
        match self {
            Term::Word(text) | Term::Phrase(text) => text,
        }
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, Term::Phrase(_))
    }

    /// Ordering key: words before phrases, then case-insensitive text
    pub fn sort_key(&self) -> (bool, String) {
        (self.is_phrase(), self.text().to_lowercase())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Word(text) => write!(f, "{}", text),
            Term::Phrase(text) => write!(f, "{} {}", PHRASE_TAG, text),
        }
    }
}

impl FromStr for Term {
    type Err = CopilotError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        let term = match trimmed.strip_prefix(PHRASE_TAG) {
            Some(rest) => Term::phrase(rest),
            None if trimmed.split_whitespace().count() > 1 => Term::phrase(trimmed),
            None => Term::word(trimmed),
        };

        if term.text().is_empty() {
            return Err(CopilotError::InvalidInput(format!("Empty keyword bank entry: '{}'", s)));
        }

        Ok(term)
    }
}

/// Ordered, duplicate-free set of terms. Position is the term's rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordBank {
    terms: Vec<Term>,
}

impl KeywordBank {
    pub fn new<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .filter(|term| !term.text().is_empty())
            .filter(|term| seen.insert(term.sort_key()))
            .collect();

        Self { terms }
    }

    /// Parse a bank file: one entry per line, `#` comments and blank lines skipped
    pub fn parse(content: &str) -> Result<Self> {
        let terms = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Term::from_str)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(terms))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn words(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(|term| !term.is_phrase())
    }

    pub fn phrases(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(|term| term.is_phrase())
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases().count()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.rank(term).is_some()
    }

    pub fn rank(&self, term: &Term) -> Option<usize> {
        let key = term.sort_key();
        self.terms.iter().position(|t| t.sort_key() == key)
    }
}

/// Builds a keyword bank out of a job posting
pub struct BankBuilder<'a> {
    config: &'a Config,
    processor: &'a TextProcessor,
}

impl<'a> BankBuilder<'a> {
    pub fn new(config: &'a Config, processor: &'a TextProcessor) -> Self {
        Self { config, processor }
    }

    /// Configured tech keywords present in the posting, then its top phrases
    pub fn build(&self, job_text: &str) -> KeywordBank {
        let normalized = self.processor.normalize(job_text);

        let mut words: Vec<&String> = self
            .config
            .bank
            .tech_keywords
            .iter()
            .filter(|keyword| self.processor.contains_word(&normalized, keyword))
            .collect();
        words.sort_by_key(|keyword| keyword.to_lowercase());

        let phrases = PhraseExtractor::new(self.processor, &self.config.bank.signal_words, &self.config.phrases)
            .extract(job_text);

        log::debug!(
            "Keyword bank built from posting: {} words, {} phrases",
            words.len(),
            phrases.len()
        );

        KeywordBank::new(
            words
                .into_iter()
                .map(|w| Term::word(w))
                .chain(phrases.iter().map(|p| Term::phrase(p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_display_and_parse() {
        let phrase: Term = "[PHRASE]  Windows   Desktop support".parse().unwrap();
        assert_eq!(phrase, Term::Phrase("windows desktop support".to_string()));
        assert_eq!(phrase.to_string(), "[PHRASE] windows desktop support");

        let word: Term = " python ".parse().unwrap();
        assert_eq!(word.to_string(), "python");

        let untagged: Term = "active directory".parse().unwrap();
        assert!(untagged.is_phrase());
    }

    #[test]
    fn test_empty_term_rejected() {
        assert!("[PHRASE]   ".parse::<Term>().is_err());
        assert!("".parse::<Term>().is_err());
    }

    #[test]
    fn test_bank_deduplicates_and_keeps_order() {
        let bank = KeywordBank::new(vec![
            Term::word("SQL"),
            Term::word("python"),
            Term::word("sql"),
            Term::phrase("help desk support"),
            Term::phrase("Help  Desk support"),
        ]);

        assert_eq!(bank.len(), 3);
        assert_eq!(bank.word_count(), 2);
        assert_eq!(bank.phrase_count(), 1);
        assert_eq!(bank.rank(&Term::word("python")), Some(1));
        assert!(bank.contains(&Term::word("Sql")));
    }

    #[test]
    fn test_parse_bank_file() {
        let content = "# posting keywords\npython\n\n[PHRASE] incident ticket queue\nprompt\n";
        let bank = KeywordBank::parse(content).unwrap();

        assert_eq!(bank.len(), 3);
        assert_eq!(bank.phrase_count(), 1);
        assert_eq!(bank.terms()[2], Term::word("prompt"));
    }

    #[test]
    fn test_build_from_posting() {
        let config = Config::default();
        let processor = TextProcessor::new();
        let posting = "Support Windows desktop users. Windows desktop users need Python scripts. \
                       Track incidents in Jira; Docker knowledge is a plus.";

        let bank = BankBuilder::new(&config, &processor).build(posting);
        let words: Vec<String> = bank.words().map(|t| t.to_string()).collect();

        assert_eq!(words, vec!["docker", "jira", "python", "windows"]);
        assert!(bank.contains(&Term::phrase("windows desktop users")));
    }
}
