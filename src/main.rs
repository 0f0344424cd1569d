//! Job copilot: compare a resume with a job posting and generate a packet

use clap::Parser;
use colored::Colorize;
use job_copilot::cli::{self, Cli, Commands, ConfigAction};
use job_copilot::config::Config;
use job_copilot::error::{CopilotError, Result};
use job_copilot::input::manager::{collect_pasted_input, InputManager};
use job_copilot::output::formatter::{make_run_dir, ReportGenerator};
use job_copilot::output::report::{InputStats, PACKET_VERSION};
use job_copilot::processing::analyzer::CopilotAnalyzer;
use job_copilot::processing::keyword_bank::KeywordBank;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_RESUME_PATH: &str = "resume.txt";
const DEFAULT_JOB_PATH: &str = "job_posting.txt";
const INPUT_EXTENSIONS: [&str; 5] = ["txt", "text", "md", "markdown", "pdf"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Run {
            resume,
            job,
            bank,
            out,
            fallback_default_files,
            format,
        } => {
            let output_format = match format {
                Some(format) => cli::parse_output_format(&format).map_err(CopilotError::InvalidInput)?,
                None => config.output.format,
            };
            let out_base = out.unwrap_or_else(|| config.output.out_dir.clone());

            let (resume_text, job_text) = read_inputs(resume, job, fallback_default_files).await?;

            let resume_stats = InputStats::new("resume", &resume_text);
            let job_stats = InputStats::new("job", &job_text);
            info!(
                "Inputs: resume {} chars / {} words, job {} chars / {} words",
                resume_stats.chars, resume_stats.words, job_stats.chars, job_stats.words
            );
            debug!("Resume preview: {}", resume_stats.preview);
            debug!("Job preview: {}", job_stats.preview);

            let color_output = config.output.color_output;
            let analyzer = CopilotAnalyzer::new(config)?;
            let packet = match bank {
                Some(bank_path) => {
                    let content = std::fs::read_to_string(&bank_path)?;
                    let bank = KeywordBank::parse(&content)?;
                    info!("Using keyword bank from {}", bank_path.display());
                    analyzer.analyze_with_bank(&resume_text, &job_text, &bank)?
                }
                None => analyzer.analyze(&resume_text, &job_text)?,
            };

            let generator = ReportGenerator::with_options(color_output, true);
            let run_dir = make_run_dir(&out_base)?;
            let artifacts = generator.write_outputs(&packet, &run_dir)?;

            println!("{}", generator.generate_report(&packet, &output_format)?);

            println!("{}", "✅ Done. Generated:".green().bold());
            println!("- {}", artifacts.packet_md.display());
            println!("- {}", artifacts.changes_json.display());
            println!("- {}", artifacts.score_json.display());
            println!("Version: {}", PACKET_VERSION);
        }

        Commands::Bank { job } => {
            let manager = InputManager::new();
            match job {
                Some(job_path) => {
                    let job_text = manager.extract_text(&job_path).await?;
                    let analyzer = CopilotAnalyzer::new(config)?;
                    let bank = analyzer.build_bank(&job_text);

                    println!("# Keyword bank for {}", job_path.display());
                    for term in bank.terms() {
                        println!("{}", term);
                    }
                }
                None => {
                    println!("# Tech keywords");
                    for keyword in &config.bank.tech_keywords {
                        println!("{}", keyword);
                    }
                    println!("\n# Red flag phrases");
                    for phrase in &config.bank.red_flag_phrases {
                        println!("{}", phrase);
                    }
                }
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| CopilotError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }
        },
    }

    Ok(())
}

/// Files when both are given, otherwise paste mode with optional fallback
async fn read_inputs(
    resume: Option<PathBuf>,
    job: Option<PathBuf>,
    fallback_default_files: bool,
) -> Result<(String, String)> {
    let manager = InputManager::new();

    let (mut resume_text, mut job_text) = match (resume, job) {
        (Some(resume), Some(job)) => {
            cli::validate_file_extension(&resume, &INPUT_EXTENSIONS)
                .map_err(|e| CopilotError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &INPUT_EXTENSIONS)
                .map_err(|e| CopilotError::InvalidInput(format!("Job posting file: {}", e)))?;

            (manager.extract_text(&resume).await?, manager.extract_text(&job).await?)
        }
        _ => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut reader = stdin.lock();
            let mut writer = stdout.lock();

            let resume_text = collect_pasted_input("Paste RESUME text now:", &mut reader, &mut writer)?;
            let job_text = collect_pasted_input("Paste JOB POSTING text now:", &mut reader, &mut writer)?;
            (resume_text, job_text)
        }
    };

    if fallback_default_files {
        if resume_text.is_empty() {
            resume_text = manager.extract_text_optional(Path::new(DEFAULT_RESUME_PATH)).await?;
        }
        if job_text.is_empty() {
            job_text = manager.extract_text_optional(Path::new(DEFAULT_JOB_PATH)).await?;
        }
    }

    if resume_text.is_empty() || job_text.is_empty() {
        return Err(CopilotError::InvalidInput(
            "Missing inputs. Either paste resume + job text, OR provide --resume and --job file paths."
                .to_string(),
        ));
    }

    Ok((resume_text, job_text))
}
