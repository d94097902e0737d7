//! CLI interface for the ATS resume scorer

use crate::config::OutputFormat;
use crate::processing::score::SkillCategory;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(version)]
#[command(about = "Score a resume against a job description the way an ATS would")]
#[command(long_about = "Deterministic ATS-style resume scoring: keyword relevance, required skills, title alignment, text similarity and formatting, with penalties and prioritized suggestions")]
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
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a suggested file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include skill clusters, formatting issues and keyword context
        #[arg(short, long)]
        detailed: bool,

        /// Custom skills dictionary (JSON)
        #[arg(long)]
        skills: Option<PathBuf>,
    },

    /// Handle a JSON analysis request and print the JSON response
    Request {
        /// Request body file; `-` reads stdin
        file: PathBuf,
    },

    /// Skills dictionary commands
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SkillsAction {
    /// List dictionary entries
    List {
        /// Only this category: hard, tool, soft
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

pub fn parse_skill_category(category: &str) -> Result<SkillCategory, String> {
    match category.to_lowercase().as_str() {
        "hard" => Ok(SkillCategory::Hard),
        "tool" | "tools" => Ok(SkillCategory::Tool),
        "soft" => Ok(SkillCategory::Soft),
        _ => Err(format!("Invalid skill category: {}. Supported: hard, tool, soft", category)),
    }
}

/// Validate file extension
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
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::parse_from([
            "ats-scorer", "analyze", "-r", "cv.pdf", "-j", "job.txt", "-o", "md", "--detailed",
        ]);
        match cli.command {
            Commands::Analyze { resume, job, output, save, detailed, skills } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(job, PathBuf::from("job.txt"));
                assert_eq!(output.as_deref().map(parse_output_format), Some(Ok(OutputFormat::Markdown)));
                assert!(save.is_none());
                assert!(detailed);
                assert!(skills.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("html"), Ok(OutputFormat::Html));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_skill_category() {
        assert_eq!(parse_skill_category("Soft"), Ok(SkillCategory::Soft));
        assert_eq!(parse_skill_category("tools"), Ok(SkillCategory::Tool));
        assert!(parse_skill_category("magic").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume.PDF"), &["pdf", "txt"]).is_ok());
        assert_eq!(
            validate_file_extension(Path::new("resume.docx"), &["pdf", "txt"]),
            Err("Unsupported file extension: .docx. Allowed: pdf, txt".to_string())
        );
        assert!(validate_file_extension(Path::new("README"), &["md"]).is_err());
    }
}
