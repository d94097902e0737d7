//! ats-scorer: deterministic ATS-style resume scoring

use ats_scorer::cli::{self, Cli, Commands, ConfigAction, SkillsAction};
use ats_scorer::input::validation::{handle_request_json, prepare_texts};
use ats_scorer::input::InputManager;
use ats_scorer::output::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_scorer::processing::score::SkillCategory;
use ats_scorer::{ATSAnalyzer, AtsError, Config, Result};
use clap::Parser;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_file: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            skills,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };

            if skills.is_some() {
                config.scoring.skills_dictionary = skills;
            }

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let (resume_text, job_text) = prepare_texts(&resume_text, &job_text, &config.validation)?;

            let analyzer = ATSAnalyzer::from_config(&config)?;
            let resume_name = resume
                .file_name()
                .map(|name| name.to_string_lossy().to_string());
            let score = analyzer.analyze(&resume_text, &job_text, resume_name.as_deref());

            // Colour codes only belong on a terminal
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let report = generator.generate_report(&score, output_format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(output_format, resume_name.as_deref(), score.overall))
                    } else {
                        path
                    };
                    save_report_to_file(&report, &target)?;
                    println!("✅ Report saved to {}", target.display());
                }
                None => println!("{}", report),
            }
        }

        Commands::Request { file } => {
            let body = read_request_body(&file).await?;
            let analyzer = ATSAnalyzer::from_config(&config)?;
            let response = handle_request_json(&body, &analyzer, &config.validation);

            if !response.success {
                warn!("Request failed with status {}", response.status);
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Skills { action } => match action {
            SkillsAction::List { category } => {
                let analyzer = ATSAnalyzer::from_config(&config)?;
                let dictionary = analyzer.dictionary();

                let categories = match category {
                    Some(name) => vec![cli::parse_skill_category(&name).map_err(AtsError::InvalidInput)?],
                    None => SkillCategory::ALL.to_vec(),
                };

                println!("📚 Skills dictionary v{} ({} entries)", dictionary.version, dictionary.len());
                for category in categories {
                    println!("\n{}:", category);
                    for entry in dictionary.by_category(category) {
                        if entry.synonyms.is_empty() {
                            println!("  {} (weight {:.1})", entry.name, entry.weight);
                        } else {
                            println!(
                                "  {} (weight {:.1}; also {})",
                                entry.name,
                                entry.weight,
                                entry.synonyms.join(", ")
                            );
                        }
                    }
                }
            }
        },

        Commands::Config { action } => {
            let path = config_file.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!(
                        "Skills Dictionary: {}",
                        config
                            .scoring
                            .skills_dictionary
                            .as_deref()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "(built-in)".to_string())
                    );
                    println!("Context Radius: {} characters", config.scoring.context_radius);
                    println!("\nValidation:");
                    println!("  Resume minimum: {} characters", config.validation.min_resume_chars);
                    println!("  Job description minimum: {} characters", config.validation.min_job_chars);
                    println!("  Maximum: {} characters", config.validation.max_chars);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    info!("Wrote default configuration to {}", path.display());
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}

async fn read_request_body(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut body = String::new();
        tokio::io::stdin().read_to_string(&mut body).await?;
        Ok(body)
    } else {
        Ok(tokio::fs::read_to_string(file).await?)
    }
}
