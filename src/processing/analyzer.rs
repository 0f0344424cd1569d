//! Copilot analysis engine tying bank, matcher, edits and interview prep together

use crate::config::Config;
use crate::error::Result;
use crate::output::report::{MatchScores, OutputPacket};
use crate::processing::edits::EditSuggester;
use crate::processing::interview::build_interview_pack;
use crate::processing::keyword_bank::{BankBuilder, KeywordBank, Term};
use crate::processing::matcher::{KeywordMatcher, MatchResult};
use crate::processing::red_flags::RedFlagDetector;
use crate::processing::text_processor::TextProcessor;
use log::{debug, info};

pub const ROLE_SUMMARY: &str = "This agent compares your resume text to the job posting, \
identifies keyword overlap/gaps, and suggests safe, honest edits \
that improve alignment without inventing experience.";

pub struct CopilotAnalyzer {
    config: Config,
    processor: TextProcessor,
    red_flags: RedFlagDetector,
}

impl CopilotAnalyzer {
    pub fn new(config: Config) -> Result<Self> {
        let red_flags = RedFlagDetector::new(&config.bank.red_flag_phrases)?;

        Ok(Self {
            config,
            processor: TextProcessor::new(),
            red_flags,
        })
    }

    /// Keyword bank derived from the posting
    pub fn build_bank(&self, job_text: &str) -> KeywordBank {
        BankBuilder::new(&self.config, &self.processor).build(job_text)
    }

    pub fn match_resume(&self, resume_text: &str, bank: &KeywordBank) -> MatchResult {
        KeywordMatcher::new(&self.processor, &self.config.scoring).match_resume(resume_text, bank)
    }

    /// Full run with a bank built from the posting
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Result<OutputPacket> {
        let bank = self.build_bank(job_text);
        self.analyze_with_bank(resume_text, job_text, &bank)
    }

    pub fn analyze_with_bank(
        &self,
        resume_text: &str,
        job_text: &str,
        bank: &KeywordBank,
    ) -> Result<OutputPacket> {
        info!("Scoring resume against {} bank terms", bank.len());

        let result = self.match_resume(resume_text, bank);
        let red_flags = self.red_flags.detect(job_text, &self.processor);
        if !red_flags.is_empty() {
            info!("Red flags in posting: {}", red_flags.join(", "));
        }

        let overlap_words = result.overlap_words();
        let missing_words = result.missing_words();

        let suggested_edits = EditSuggester::new(&self.config.edits, &self.processor)?
            .suggest(resume_text, &missing_words);
        debug!("Generated {} suggested edits", suggested_edits.len());

        let interview = build_interview_pack(&overlap_words, &missing_words);

        let match_scores = MatchScores {
            keyword_coverage: result.coverage,
            overlap_keywords: render_keywords(
                &result.overlap,
                bank,
                self.config.output.overlap_phrase_limit,
            ),
            missing_keywords: render_keywords(
                &result.missing,
                bank,
                self.config.output.missing_phrase_limit,
            ),
            red_flags,
            confidence: result.confidence,
        };

        Ok(OutputPacket {
            role_summary: ROLE_SUMMARY.to_string(),
            match_scores,
            suggested_edits,
            interview_questions: interview.questions,
            talking_points: interview.talking_points,
        })
    }
}

/// Display strings for a sorted term list.
///
/// All words are kept. Phrases are limited to the best-ranked `phrase_limit`
/// bank entries, then put back in alphabetical order.
fn render_keywords(terms: &[Term], bank: &KeywordBank, phrase_limit: usize) -> Vec<String> {
    let mut phrases: Vec<&Term> = terms.iter().filter(|t| t.is_phrase()).collect();
    phrases.sort_by_key(|t| bank.rank(t).unwrap_or(usize::MAX));
    phrases.truncate(phrase_limit);
    phrases.sort_by_key(|t| t.sort_key());

    terms
        .iter()
        .filter(|t| !t.is_phrase())
        .chain(phrases)
        .map(Term::to_string)
        .collect()
}
