//! CLI interface for the job copilot

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-copilot")]
#[command(about = "Compare a resume with a job posting and generate an application packet")]
#[command(long_about = "Job Application Co-Pilot: compare resume vs job posting, score keyword coverage, \
suggest safe resume edits and prepare interview talking points")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job posting and write a packet
    Run {
        /// Path to resume file (TXT, MD, PDF). Paste mode unless both files are given
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Path to job posting file (TXT, MD, PDF)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Keyword bank file to use instead of one built from the posting
        #[arg(short, long)]
        bank: Option<PathBuf>,

        /// Output base directory; each run goes into run_YYYYMMDD_HHMMSS/
        #[arg(long)]
        out: Option<PathBuf>,

        /// In paste mode, fall back to resume.txt / job_posting.txt when nothing is pasted
        #[arg(long)]
        fallback_default_files: bool,

        /// What to print after the run: console, markdown, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show the keyword bank
    Bank {
        /// Build the bank from this job posting instead of listing the defaults
        #[arg(short, long)]
        job: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, markdown, json", format)),
    }
}

/// Validate file extension; files without one are accepted as plain text
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["txt", "md", "pdf"];
        assert!(validate_file_extension(Path::new("resume.TXT"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("resume.docx"), &allowed).is_err());
    }

    #[test]
    fn test_run_arguments() {
        let cli = Cli::try_parse_from([
            "job-copilot",
            "run",
            "-r",
            "resume.txt",
            "-j",
            "job.txt",
            "--fallback-default-files",
        ])
        .unwrap();

        match cli.command {
            Commands::Run { resume, job, fallback_default_files, .. } => {
                assert_eq!(resume, Some(PathBuf::from("resume.txt")));
                assert_eq!(job, Some(PathBuf::from("job.txt")));
                assert!(fallback_default_files);
            }
            _ => panic!("expected run command"),
        }
    }
}
