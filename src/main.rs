//! Resume match: score a resume against a job description

use clap::Parser;
use colored::Colorize;
use log::error;
use resume_match::cli::{self, Cli, Commands, ConfigAction};
use resume_match::config::Config;
use resume_match::error::{MatchError, Result};
use resume_match::scoring::{MatchScorer, ScoreOutcome};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Serialize)]
struct ScoreReport {
    score: Option<f32>,
    strategy: &'static str,
    resume: String,
    job: String,
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            embedding,
            lexical,
            json,
        } => {
            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "docx"])
                .map_err(|e| MatchError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut config = config;
            if let Some(model) = embedding {
                config.model.embedding_model = model;
            }

            let job_text = std::fs::read_to_string(&job)?;

            // Strategy selection happens once, here
            let scorer = if lexical {
                MatchScorer::lexical(&config)
            } else {
                MatchScorer::from_config(&config)
            };

            let outcome = scorer.score(&job_text, &resume);

            if json {
                let report = ScoreReport {
                    score: outcome.stored(),
                    strategy: scorer.strategy_name(),
                    resume: resume.display().to_string(),
                    job: job.display().to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("🎯 Resume match analysis");
                println!("📄 Resume: {}", resume.display());
                println!("💼 Job description: {}", job.display());
                println!("🧮 Strategy: {}", scorer.strategy_name());
                println!();

                match outcome {
                    ScoreOutcome::Score(value) => {
                        let line = format!("Match score: {:.1}%", value);
                        let line = if value >= 75.0 {
                            line.green().bold()
                        } else if value >= 40.0 {
                            line.yellow().bold()
                        } else {
                            line.red().bold()
                        };
                        println!("{}", line);
                    }
                    ScoreOutcome::Unavailable => {
                        println!(
                            "{}",
                            "Match score: unavailable (no usable resume text)".yellow()
                        );
                    }
                }
            }
        }

        Commands::Config { action } => {
            // The --config override names the active file for show and reset too
            let active_path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Models Directory: {}", config.models_dir().display());
                    println!("Embedding Model: {}", config.model.embedding_model);
                    println!("Prefer Embeddings: {}", config.model.prefer_embeddings);
                    println!("Min Token Length: {}", config.scoring.min_token_length);
                    println!("\nConfig File: {}", active_path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to_path(&active_path)?;
                    println!("✅ Configuration reset successfully!");
                }
            }
        }
    }

    Ok(())
}
