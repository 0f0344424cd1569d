//! Configuration management for the job copilot

use crate::error::{CopilotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bank: BankConfig,
    pub phrases: PhraseConfig,
    pub scoring: ScoringConfig,
    pub edits: EditConfig,
    pub output: OutputConfig,
}

/// Word lists the keyword bank and red-flag scan are built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    pub tech_keywords: Vec<String>,
    pub red_flag_phrases: Vec<String>,
    pub signal_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseConfig {
    pub ngram_size: usize,
    pub top_k: usize,
    /// Below this many repeated phrases, every signal-bearing phrase is considered
    pub min_candidates: usize,
    pub max_per_anchor: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub word_weight: f32,
    pub phrase_weight: f32,
    pub confidence_base: f32,
    pub confidence_span: f32,
    pub confidence_cap: f32,
    /// Number of bank words at which confidence stops growing
    pub confidence_saturation: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditConfig {
    pub max_bullets: usize,
    pub max_edits: usize,
    pub min_bullet_chars: usize,
    pub min_sentence_chars: usize,
    pub focus_keywords: Vec<String>,
    pub tool_keywords: Vec<String>,
    pub filler_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub color_output: bool,
    pub overlap_phrase_limit: usize,
    pub missing_phrase_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank: BankConfig {
                tech_keywords: strings(&[
                    "python", "sql", "api", "rest", "fastapi", "flask", "docker", "git",
                    "aws", "azure", "gcp", "linux", "windows", "powershell",
                    "servicenow", "jira", "incident", "sla", "intune", "mdm",
                    "troubleshooting", "automation", "llm", "prompt", "validation",
                ]),
                red_flag_phrases: strings(&[
                    "unpaid", "pay to apply", "gift card", "telegram", "whatsapp",
                    "kindly", "wire transfer", "check deposit", "remote equipment fee",
                ]),
                signal_words: strings(&[
                    "windows", "linux", "mac", "microsoft", "azure", "aws", "gcp",
                    "active", "directory", "vpn", "mfa", "intune", "servicenow",
                    "jira", "ticket", "incident", "sla", "endpoint", "desktop",
                    "hardware", "software", "network", "printer", "outlook",
                    "exchange", "o365", "office", "sql", "python", "api",
                    "powershell", "security", "firewall", "router", "switch",
                    "server", "deployment", "imaging", "autopilot", "sccm",
                ]),
            },
            phrases: PhraseConfig {
                ngram_size: 3,
                top_k: 25,
                min_candidates: 10,
                max_per_anchor: 2,
            },
            scoring: ScoringConfig {
                word_weight: 0.35,
                phrase_weight: 0.65,
                confidence_base: 0.45,
                confidence_span: 0.5,
                confidence_cap: 0.95,
                confidence_saturation: 12,
            },
            edits: EditConfig {
                max_bullets: 8,
                max_edits: 8,
                min_bullet_chars: 20,
                min_sentence_chars: 40,
                focus_keywords: strings(&[
                    "troubleshooting", "automation", "incident", "sla", "api", "sql", "python", "git",
                ]),
                tool_keywords: strings(&["python", "sql", "api", "git"]),
                filler_words: strings(&["very", "really", "just"]),
            },
            output: OutputConfig {
                out_dir: PathBuf::from("output"),
                format: OutputFormat::Console,
                color_output: true,
                overlap_phrase_limit: 10,
                missing_phrase_limit: 15,
            },
        }
    }
}

impl Config {
    /// Load the config from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CopilotError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CopilotError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-copilot")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.phrases.ngram_size < 2 {
            return Err(CopilotError::Configuration(
                "phrases.ngram_size must be at least 2".to_string(),
            ));
        }

        let weights = [self.scoring.word_weight, self.scoring.phrase_weight];
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(CopilotError::Configuration(
                "scoring weights must be between 0 and 1".to_string(),
            ));
        }

        if self.scoring.confidence_saturation == 0 {
            return Err(CopilotError::Configuration(
                "scoring.confidence_saturation must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bank.tech_keywords.len(), 25);
        assert_eq!(config.phrases.ngram_size, 3);
    }

    #[test]
    fn test_load_writes_defaults_then_reads_them_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let first = Config::load_from(&path).unwrap();
        assert!(path.exists());

        let second = Config::load_from(&path).unwrap();
        assert_eq!(first.bank.tech_keywords, second.bank.tech_keywords);
        assert_eq!(second.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let mut config = Config::default();
        config.scoring.phrase_weight = 1.5;
        assert!(config.validate().is_err());
    }
}
