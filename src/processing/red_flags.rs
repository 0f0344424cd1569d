//! Scam and red-flag phrase detection in job postings

use crate::error::{CopilotError, Result};
use crate::processing::text_processor::TextProcessor;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

pub struct RedFlagDetector {
    matcher: AhoCorasick,
    phrases: Vec<String>,
}

impl RedFlagDetector {
    pub fn new(phrases: &[String]) -> Result<Self> {
        let phrases: Vec<String> = phrases
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&phrases)
            .map_err(|e| CopilotError::Processing(format!("Failed to build red flag matcher: {}", e)))?;

        Ok(Self { matcher, phrases })
    }

    /// Red-flag phrases found anywhere in the posting, in configured order
    pub fn detect(&self, job_text: &str, processor: &TextProcessor) -> Vec<String> {
        let normalized = processor.normalize(job_text);

        let found: HashSet<usize> = self
            .matcher
            .find_overlapping_iter(&normalized)
            .map(|m| m.pattern().as_usize())
            .collect();

        self.phrases
            .iter()
            .enumerate()
            .filter(|(idx, _)| found.contains(idx))
            .map(|(_, phrase)| phrase.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_detects_flags_in_configured_order() {
        let config = Config::default();
        let detector = RedFlagDetector::new(&config.bank.red_flag_phrases).unwrap();
        let processor = TextProcessor::new();

        let posting = "Kindly reach out on WhatsApp. A remote equipment fee is\nrequired before a WIRE   transfer.";
        let flags = detector.detect(posting, &processor);

        assert_eq!(flags, vec!["whatsapp", "kindly", "wire transfer", "remote equipment fee"]);
    }

    #[test]
    fn test_clean_posting_has_no_flags() {
        let config = Config::default();
        let detector = RedFlagDetector::new(&config.bank.red_flag_phrases).unwrap();
        let processor = TextProcessor::new();

        assert!(detector.detect("IT support technician, full benefits.", &processor).is_empty());
    }

    #[test]
    fn test_empty_phrase_list() {
        let detector = RedFlagDetector::new(&[]).unwrap();
        assert!(detector.detect("pay to apply", &TextProcessor::new()).is_empty());
    }
}
