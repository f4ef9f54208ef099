//! CLI interface for resume studio

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-studio")]
#[command(about = "Form-driven resume builder with ATS compatibility scoring")]
#[command(
    long_about = "Validate, normalize, and score structured resume documents against ATS heuristics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume for ATS compatibility
    Score {
        /// Path to resume file (JSON, TOML)
        file: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include the full validation section in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Validate a resume against submission rules
    Check {
        /// Path to resume file (JSON, TOML)
        file: PathBuf,
    },

    /// Normalize field values and rewrite the resume file
    Format {
        /// Path to resume file (JSON, TOML)
        file: PathBuf,

        /// Write the normalized document here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Template gallery commands
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List available visual templates
    List,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
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
