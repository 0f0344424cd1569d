//! Integration tests for the job copilot

use job_copilot::config::Config;
use job_copilot::input::manager::InputManager;
use job_copilot::output::formatter::{make_run_dir, ReportGenerator, NO_OVERLAP_PLACEHOLDER};
use job_copilot::processing::analyzer::CopilotAnalyzer;
use job_copilot::processing::keyword_bank::KeywordBank;
use job_copilot::processing::text_processor::TextProcessor;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

async fn load_fixture(name: &str) -> String {
    let manager = InputManager::new();
    manager
        .extract_text(&Path::new("tests/fixtures").join(name))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = load_fixture("sample_resume.txt").await;

    assert!(text.starts_with("Jane Doe"));
    assert!(text.contains("Windows desktop users"));
    assert!(text.ends_with("- Imaged laptops"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = load_fixture("sample_resume.md").await;

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("- Supported Windows desktop users"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_loose_markdown_list_keeps_one_bullet_per_item() {
    let text = load_fixture("sample_resume_loose.md").await;
    let bullets = TextProcessor::new().split_bullets(&text, 40);

    assert_eq!(
        bullets,
        vec![
            "Supported Windows desktop users across two regional offices",
            "Reset Active Directory passwords and unlocked accounts",
            "Tracked incident tickets in Jira and kept the queue under control",
        ]
    );
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    assert!(manager.extract_text(path).await.is_err());
    assert_eq!(manager.extract_text_optional(path).await.unwrap(), "");
}

#[tokio::test]
async fn test_posting_bank_partitions_into_overlap_and_missing() {
    let resume = load_fixture("sample_resume.txt").await;
    let job = load_fixture("sample_job.txt").await;
    let analyzer = CopilotAnalyzer::new(Config::default()).unwrap();

    let bank = analyzer.build_bank(&job);
    let result = analyzer.match_resume(&resume, &bank);

    let overlap: HashSet<_> = result.overlap.iter().collect();
    let missing: HashSet<_> = result.missing.iter().collect();
    assert!(overlap.is_disjoint(&missing));
    assert_eq!(overlap.len() + missing.len(), bank.len());
    assert!(bank.terms().iter().all(|t| overlap.contains(t) || missing.contains(t)));

    assert_eq!(result.overlap_words(), vec!["incident", "windows"]);
    assert!(result
        .overlap_phrases()
        .any(|t| t.to_string() == "[PHRASE] windows desktop users"));
}

#[tokio::test]
async fn test_full_run_writes_packet() {
    let resume = load_fixture("sample_resume.txt").await;
    let job = load_fixture("sample_job.txt").await;
    let analyzer = CopilotAnalyzer::new(Config::default()).unwrap();
    let packet = analyzer.analyze(&resume, &job).unwrap();

    let out = TempDir::new().unwrap();
    let generator = ReportGenerator::with_options(false, true);
    let run_dir = make_run_dir(out.path()).unwrap();
    let artifacts = generator.write_outputs(&packet, &run_dir).unwrap();

    let md = std::fs::read_to_string(&artifacts.packet_md).unwrap();
    for header in [
        "## Role Fit Summary",
        "## Match Scores",
        "### Overlap Keywords",
        "### Missing Keywords",
        "## Suggested Resume Edits",
        "## Interview Prep",
    ] {
        assert!(md.contains(header), "missing header {}", header);
    }
    assert!(md.contains("- Keyword coverage: **"));
    assert!(md.contains("### Edit 1"));

    let changes: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&artifacts.changes_json).unwrap()).unwrap();
    assert_eq!(changes.as_array().unwrap().len(), packet.suggested_edits.len());

    let score: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&artifacts.score_json).unwrap()).unwrap();
    assert!(score["scores"]["keyword_coverage"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_bank_without_matches_renders_placeholder() {
    let resume = load_fixture("sample_resume.txt").await;
    let job = load_fixture("sample_job.txt").await;
    let bank = KeywordBank::parse(&std::fs::read_to_string("tests/fixtures/sample_bank.txt").unwrap()).unwrap();

    let analyzer = CopilotAnalyzer::new(Config::default()).unwrap();
    let packet = analyzer.analyze_with_bank(&resume, &job, &bank).unwrap();
    let md = ReportGenerator::with_options(false, true)
        .generate_report(&packet, &job_copilot::config::OutputFormat::Markdown)
        .unwrap();

    assert!(md.contains("- Keyword coverage: **0%**"));
    assert!(md.contains(&format!("### Overlap Keywords\n\n{}", NO_OVERLAP_PLACEHOLDER)));
    assert!(md.contains("### Missing Keywords\n\nprompt, python\n"));
}
