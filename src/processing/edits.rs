//! Safe, honest resume bullet rewrites

use crate::config::EditConfig;
use crate::error::Result;
use crate::output::report::{EditTarget, SuggestedEdit};
use crate::processing::text_processor::TextProcessor;
use regex::Regex;

pub struct EditSuggester<'a> {
    config: &'a EditConfig,
    processor: &'a TextProcessor,
    filler_regex: Option<Regex>,
    spaces_regex: Regex,
}

impl<'a> EditSuggester<'a> {
    pub fn new(config: &'a EditConfig, processor: &'a TextProcessor) -> Result<Self> {
        let fillers: Vec<String> = config
            .filler_words
            .iter()
            .filter(|w| !w.trim().is_empty())
            .map(|w| format!(r"\b{}\b", regex::escape(w.trim())))
            .collect();

        let filler_regex = if fillers.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("(?i){}", fillers.join("|")))?)
        };

        Ok(Self {
            config,
            processor,
            filler_regex,
            spaces_regex: Regex::new(r"\s{2,}")?,
        })
    }

    /// Edits for the first bullets of the resume
    pub fn suggest(&self, resume_text: &str, missing_words: &[String]) -> Vec<SuggestedEdit> {
        self.processor
            .split_bullets(resume_text, self.config.min_sentence_chars)
            .iter()
            .take(self.config.max_bullets)
            .filter_map(|bullet| self.rewrite_bullet(bullet, missing_words))
            .take(self.config.max_edits)
            .collect()
    }

    /// Tighten a bullet and, when the posting wants a focus keyword the
    /// bullet lacks, append it. Returns `None` when nothing would change.
    pub fn rewrite_bullet(&self, bullet: &str, missing_words: &[String]) -> Option<SuggestedEdit> {
        let original = bullet.trim();
        if original.chars().count() < self.config.min_bullet_chars {
            return None;
        }

        let mut suggestion = self.tighten(original);
        let mut rationale = String::from("Tightened wording for clarity.");
        let mut needs_confirmation = false;

        if let Some(keyword) = self.pick_keyword(original, missing_words) {
            if self.is_tool(&keyword) {
                let display = if keyword.eq_ignore_ascii_case("sql") {
                    keyword.to_uppercase()
                } else {
                    keyword.clone()
                };
                suggestion = format!("{} (Tools used where applicable: {}.)", suggestion, display);
                rationale.push_str(&format!(
                    " Added a tool mention to align with the posting—confirm you actually used {}.",
                    keyword
                ));
                needs_confirmation = true;
            } else {
                suggestion = format!("{} (Focus: {}.)", suggestion, keyword);
                rationale.push_str(&format!(
                    " Added focus keyword '{}' to better match the posting.",
                    keyword
                ));
            }
        }

        if suggestion == original {
            return None;
        }

        Some(SuggestedEdit {
            target: EditTarget::Bullet,
            original: original.to_string(),
            suggestion,
            rationale,
            needs_confirmation,
        })
    }

    fn tighten(&self, bullet: &str) -> String {
        let stripped = match &self.filler_regex {
            Some(regex) => regex.replace_all(bullet, "").trim().to_string(),
            None => bullet.to_string(),
        };
        self.spaces_regex.replace_all(&stripped, " ").to_string()
    }

    /// First missing focus keyword the bullet doesn't already mention
    fn pick_keyword(&self, bullet: &str, missing_words: &[String]) -> Option<String> {
        let normalized = self.processor.normalize(bullet);

        missing_words
            .iter()
            .filter(|kw| !normalized.contains(&kw.to_lowercase()))
            .find(|kw| {
                self.config
                    .focus_keywords
                    .iter()
                    .any(|focus| focus.eq_ignore_ascii_case(kw))
            })
            .cloned()
    }

    fn is_tool(&self, keyword: &str) -> bool {
        self.config
            .tool_keywords
            .iter()
            .any(|tool| tool.eq_ignore_ascii_case(keyword))
    }
}
