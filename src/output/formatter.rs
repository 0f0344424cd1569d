//! Output formatters and run directory writer

use crate::config::OutputFormat;
use crate::error::{CopilotError, Result};
use crate::output::report::{OutputPacket, ScorePayload};
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

pub const NO_OVERLAP_PLACEHOLDER: &str = "_None detected from the keyword bank._";
pub const NO_MISSING_PLACEHOLDER: &str = "_None — strong keyword match._";
pub const NO_EDITS_PLACEHOLDER: &str =
    "_No suggested edits generated (try adding bullets or expanding resume text)._";
pub const CONFIRMATION_WARNING: &str =
    "⚠️ **Needs confirmation**: this mentions a tool—only keep if true.";

pub const PACKET_FILE: &str = "packet.md";
pub const CHANGES_FILE: &str = "changes.json";
pub const SCORE_FILE: &str = "score.json";

/// Trait for formatting copilot packets
pub trait OutputFormatter {
    fn format_packet(&self, packet: &OutputPacket) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal summary of a packet
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for the full packet
pub struct JsonFormatter {
    pretty: bool,
}

/// The Markdown packet written to `packet.md`
pub struct MarkdownFormatter;

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Files written for one run
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub run_dir: PathBuf,
    pub packet_md: PathBuf,
    pub changes_json: PathBuf,
    pub score_json: PathBuf,
}

/// Render a 0..1 ratio as a whole percentage
pub fn format_percent(value: f32) -> String {
    format!("{:.0}%", f64::from(value) * 100.0)
}

/// Comma-joined keywords, or the placeholder when there are none
pub fn keyword_list(keywords: &[String], placeholder: &str) -> String {
    if keywords.is_empty() {
        placeholder.to_string()
    } else {
        keywords.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Green).bold(), title.color(Color::Green).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_coverage_badge(&self, coverage: f32) -> String {
        let (badge, color) = match (coverage * 100.0).round() as u32 {
            70..=100 => ("STRONG", Color::Green),
            40..=69 => ("PARTIAL", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_packet(&self, packet: &OutputPacket) -> Result<String> {
        let scores = &packet.match_scores;
        let mut output = String::new();

        output.push_str(&self.format_header("Match Scores"));
        output.push_str(&format!(
            "Keyword coverage: {} {}\n",
            format_percent(scores.keyword_coverage),
            self.format_coverage_badge(scores.keyword_coverage)
        ));
        output.push_str(&format!("Confidence: {}\n", format_percent(scores.confidence)));

        if !scores.red_flags.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                self.colorize("Red flags detected in posting:", Color::Red),
                scores.red_flags.join(", ")
            ));
        }

        output.push_str(&self.format_header("Overlap Keywords"));
        output.push_str(&keyword_list(&scores.overlap_keywords, NO_OVERLAP_PLACEHOLDER));
        output.push('\n');

        output.push_str(&self.format_header("Missing Keywords"));
        output.push_str(&keyword_list(&scores.missing_keywords, NO_MISSING_PLACEHOLDER));
        output.push('\n');

        output.push_str(&self.format_header("Suggested Resume Edits"));
        if packet.suggested_edits.is_empty() {
            output.push_str("No suggested edits generated.\n");
        } else {
            for (i, edit) in packet.suggested_edits.iter().enumerate() {
                let marker = if edit.needs_confirmation {
                    self.colorize(" (needs confirmation)", Color::Yellow)
                } else {
                    String::new()
                };
                output.push_str(&format!("{}. {}{}\n", i + 1, edit.suggestion, marker));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_packet(&self, packet: &OutputPacket) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(packet)?)
        } else {
            Ok(serde_json::to_string(packet)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_packet(&self, packet: &OutputPacket) -> Result<String> {
        let scores = &packet.match_scores;
        let mut md: Vec<String> = Vec::new();

        md.push("# Job Application Copilot Packet\n".to_string());
        md.push("## Role Fit Summary\n".to_string());
        md.push(format!("{}\n", packet.role_summary));

        md.push("## Match Scores\n".to_string());
        md.push(format!("- Keyword coverage: **{}**\n", format_percent(scores.keyword_coverage)));
        md.push(format!("- Confidence: **{}**\n", format_percent(scores.confidence)));
        if !scores.red_flags.is_empty() {
            md.push(format!(
                "- Red flags detected in posting: **{}**\n",
                scores.red_flags.join(", ")
            ));
        }

        md.push("\n### Overlap Keywords\n".to_string());
        md.push(keyword_list(&scores.overlap_keywords, NO_OVERLAP_PLACEHOLDER));
        md.push("\n\n### Missing Keywords\n".to_string());
        md.push(keyword_list(&scores.missing_keywords, NO_MISSING_PLACEHOLDER));
        md.push("\n".to_string());

        md.push("\n## Suggested Resume Edits (Safe + Honest)\n".to_string());
        if packet.suggested_edits.is_empty() {
            md.push(NO_EDITS_PLACEHOLDER.to_string());
        } else {
            for (i, edit) in packet.suggested_edits.iter().enumerate() {
                md.push(format!("\n### Edit {}\n", i + 1));
                md.push(format!("**Original:** {}\n\n", edit.original));
                md.push(format!("**Suggestion:** {}\n\n", edit.suggestion));
                md.push(format!("**Rationale:** {}\n\n", edit.rationale));
                if edit.needs_confirmation {
                    md.push(format!("{}\n", CONFIRMATION_WARNING));
                }
            }
        }

        md.push("\n## Interview Prep\n".to_string());
        md.push("\n### Likely Questions\n".to_string());
        for question in &packet.interview_questions {
            md.push(format!("- {}", question));
        }

        md.push("\n\n### Talking Points\n".to_string());
        for point in &packet.talking_points {
            md.push(format!("- {}", point));
        }

        md.push(String::new());

        Ok(md.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate_report(&self, packet: &OutputPacket, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_packet(packet),
            OutputFormat::Json => self.json_formatter.format_packet(packet),
            OutputFormat::Markdown => self.markdown_formatter.format_packet(packet),
        }
    }

    /// Write `packet.md`, `changes.json` and `score.json` into `run_dir`
    pub fn write_outputs(&self, packet: &OutputPacket, run_dir: &Path) -> Result<RunArtifacts> {
        std::fs::create_dir_all(run_dir)?;

        let artifacts = RunArtifacts {
            run_dir: run_dir.to_path_buf(),
            packet_md: run_dir.join(PACKET_FILE),
            changes_json: run_dir.join(CHANGES_FILE),
            score_json: run_dir.join(SCORE_FILE),
        };

        let markdown = self.markdown_formatter.format_packet(packet)?;
        save_report_to_file(&markdown, &artifacts.packet_md)?;

        let changes = serde_json::to_string_pretty(&packet.suggested_edits)?;
        save_report_to_file(&changes, &artifacts.changes_json)?;

        let score = serde_json::to_string_pretty(&ScorePayload::new(&packet.match_scores))?;
        save_report_to_file(&score, &artifacts.score_json)?;

        log::info!("Packet written to {}", run_dir.display());
        Ok(artifacts)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fresh `run_YYYYMMDD_HHMMSS` directory (UTC) under `out_base`
pub fn make_run_dir(out_base: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let run_dir = out_base.join(format!("run_{}", timestamp));

    std::fs::create_dir_all(&run_dir).map_err(|e| {
        CopilotError::OutputFormatting(format!(
            "Failed to create run directory '{}': {}",
            run_dir.display(),
            e
        ))
    })?;

    Ok(run_dir)
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
