//! Packet structures produced by a copilot run

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Version stamped into `score.json`
pub const PACKET_VERSION: &str = "v0.3.1 - Stable Scoring Patch";

const PREVIEW_GRAPHEMES: usize = 200;

/// Everything one run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputPacket {
    /// What the packet is and how it was built
    pub role_summary: String,

    pub match_scores: MatchScores,

    /// Bullet rewrites, in resume order
    pub suggested_edits: Vec<SuggestedEdit>,

    pub interview_questions: Vec<String>,

    pub talking_points: Vec<String>,
}

/// Rendered match scores.
///
/// Keyword lists hold display strings: single words as-is, phrases prefixed
/// with `[PHRASE]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScores {
    pub keyword_coverage: f32,
    pub overlap_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub red_flags: Vec<String>,
    pub confidence: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTarget {
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedEdit {
    pub target: EditTarget,
    pub original: String,
    pub suggestion: String,
    pub rationale: String,
    pub needs_confirmation: bool,
}

/// Shape of `score.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePayload {
    pub version: String,
    pub scores: MatchScores,
}

impl ScorePayload {
    pub fn new(scores: &MatchScores) -> Self {
        Self {
            version: PACKET_VERSION.to_string(),
            scores: scores.clone(),
        }
    }
}

/// Size summary of one input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStats {
    pub label: String,
    pub chars: usize,
    pub words: usize,
    pub preview: String,
}

impl InputStats {
    pub fn new(label: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
            preview: text.graphemes(true).take(PREVIEW_GRAPHEMES).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_stats() {
        let text = "Jane Doe\nIT Support  Specialist";
        let stats = InputStats::new("resume", text);

        assert_eq!(stats.label, "resume");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.chars, text.chars().count());
        assert_eq!(stats.preview, text);
    }

    #[test]
    fn test_preview_truncated() {
        let text = "é".repeat(300);
        let stats = InputStats::new("job", &text);
        assert_eq!(stats.preview.chars().count(), 200);
    }

    #[test]
    fn test_edit_serializes_lowercase_target() {
        let edit = SuggestedEdit {
            target: EditTarget::Bullet,
            original: "a".to_string(),
            suggestion: "b".to_string(),
            rationale: "c".to_string(),
            needs_confirmation: false,
        };

        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json["target"], "bullet");
        assert_eq!(json["needs_confirmation"], false);
    }
}
