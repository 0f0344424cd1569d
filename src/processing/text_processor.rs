//! Text processing and normalization

use regex::Regex;
use std::collections::HashSet;

/// Upper bound on bullets pulled from a single resume
pub const MAX_BULLETS: usize = 20;

/// Sentences used as bullets when a resume has no bullet markers
const MAX_FALLBACK_SENTENCES: usize = 8;

pub struct TextProcessor {
    stop_words: HashSet<String>,
    whitespace_regex: Regex,
    token_regex: Regex,
    bullet_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let stop_words = Self::create_stop_words();

        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        let token_regex = Regex::new(r"[a-z0-9+#.]+").expect("Invalid token regex");

        let bullet_regex = Regex::new(r"^[-*•]\s+").expect("Invalid bullet regex");

        Self {
            stop_words,
            whitespace_regex,
            token_regex,
            bullet_regex,
        }
    }

    /// Collapse whitespace runs, trim and lowercase
    pub fn normalize(&self, text: &str) -> String {
        self.whitespace_regex
            .replace_all(text, " ")
            .trim()
            .to_lowercase()
    }

    /// Every lowercased word of the text, punctuation stripped.
    ///
    /// Tokens keep `+`, `#` and inner dots (`c++`, `c#`, `node.js`); sentence
    /// dots at either end are dropped. Nothing else is filtered, so adjacency
    /// in this stream is adjacency in the text.
    pub fn word_tokens(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);

        self.token_regex
            .find_iter(&normalized)
            .map(|m| m.as_str().trim_matches('.'))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Tokenize into the filtered word stream phrases are built from.
    ///
    /// Same tokens as `word_tokens`, minus stop words and tokens of two
    /// characters or fewer.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.word_tokens(text)
            .into_iter()
            .filter(|token| token.chars().count() > 2 && !self.stop_words.contains(token))
            .collect()
    }

    /// Case-insensitive whole-token search in already normalized text.
    ///
    /// A hit only counts when it is not glued to another word character, so
    /// `sql` matches "sql," but not "mysql".
    pub fn contains_word(&self, normalized: &str, word: &str) -> bool {
        let needle = word.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }

        normalized.match_indices(needle.as_str()).any(|(start, found)| {
            let before = normalized[..start].chars().next_back();
            let after = normalized[start + found.len()..].chars().next();
            !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
        })
    }

    /// True when `needle` occurs as a contiguous run inside `tokens`
    pub fn contains_sequence(tokens: &[String], needle: &[&str]) -> bool {
        if needle.is_empty() || needle.len() > tokens.len() {
            return false;
        }

        tokens
            .windows(needle.len())
            .any(|window| window.iter().zip(needle).all(|(token, expected)| token.as_str() == *expected))
    }

    /// Split text into sentences at whitespace following `.`, `!` or `?`
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.trim().chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);

            let at_boundary = matches!(c, '.' | '!' | '?')
                && chars.peek().map_or(false, |next| next.is_whitespace());

            if at_boundary {
                sentences.push(current.trim().to_string());
                current.clear();
                while chars.peek().map_or(false, |next| next.is_whitespace()) {
                    chars.next();
                }
            }
        }

        if !current.trim().is_empty() {
            sentences.push(current.trim().to_string());
        }

        sentences
    }

    /// Pull resume bullets out of free text.
    ///
    /// Lines starting with `-`, `*` or `•` are bullets. A resume without any
    /// marked bullets falls back to its long sentences.
    pub fn split_bullets(&self, text: &str, min_sentence_chars: usize) -> Vec<String> {
        let mut bullets: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| self.bullet_regex.is_match(line))
            .map(|line| self.bullet_regex.replace(line, "").trim().to_string())
            .collect();

        if bullets.is_empty() {
            bullets = self
                .split_sentences(text)
                .into_iter()
                .filter(|sentence| sentence.chars().count() > min_sentence_chars)
                .take(MAX_FALLBACK_SENTENCES)
                .collect();
        }

        bullets.truncate(MAX_BULLETS);
        bullets
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn create_stop_words() -> HashSet<String> {
        let words = vec![
            "the", "and", "or", "a", "an", "to", "of", "in", "for", "with", "on", "at", "by",
            "from", "as", "is", "are", "be", "this", "that", "these", "those", "you", "your",
            "we", "our", "will", "can", "may", "must", "should", "have", "has", "had", "their",
            "they", "them", "it", "its", "not", "but", "if", "than", "then", "about", "into",
            "over", "within", "across", "per", "including", "etc", "join", "ability", "perform",
            "routine", "handle", "maintain", "collaborate", "improvement", "knowledge",
        ];

        words.into_iter().map(|s| s.to_string()).collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
