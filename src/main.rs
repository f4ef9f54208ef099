//! Resume studio: form-driven resume builder with ATS compatibility scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, TemplateAction};
use colored::Colorize;
use config::Config;
use error::{Result, ResumeStudioError};
use input::loader::DocumentLoader;
use log::{error, info};
use output::formatter::{save_report_to_file, ReportGenerator};
use output::report::ResumeReport;
use output::templates::TEMPLATE_GALLERY;
use processing::normalizer::DocumentNormalizer;
use processing::scorer::AtsScorer;
use processing::validator::FormValidator;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            file,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&file, &["json", "toml"])
                .map_err(|e| ResumeStudioError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeStudioError::InvalidInput)?;

            info!("Scoring resume: {}", file.display());

            let report = build_report(&file, &config)?;

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                save_report_to_file(&rendered, &save_path)?;
                println!("💾 Report saved to {}", save_path.display());
            }

            Ok(())
        }

        Commands::Check { file } => {
            cli::validate_file_extension(&file, &["json", "toml"])
                .map_err(|e| ResumeStudioError::InvalidInput(format!("Resume file: {}", e)))?;

            info!("Validating resume: {}", file.display());

            let mut loader = DocumentLoader::new();
            let document = loader.load(&file)?;

            let validator = FormValidator::with_date_validator(config.date_validator());
            let report = validator.validate(&document);

            if report.valid {
                println!("✅ {} passes all submission rules", file.display());
                Ok(())
            } else {
                println!(
                    "❌ {} has {} validation error(s):\n",
                    file.display(),
                    report.errors.len()
                );
                for err in &report.errors {
                    if config.output.color_output {
                        println!("  {} {}", err.field.cyan(), err.message);
                    } else {
                        println!("  {} {}", err.field, err.message);
                    }
                }
                process::exit(1)
            }
        }

        Commands::Format { file, output } => {
            cli::validate_file_extension(&file, &["json", "toml"])
                .map_err(|e| ResumeStudioError::InvalidInput(format!("Resume file: {}", e)))?;

            info!("Normalizing resume: {}", file.display());

            let mut loader = DocumentLoader::new();
            let document = loader.load(&file)?;

            let mut normalizer = DocumentNormalizer::with_picker(config.verb_picker()?)?;
            let normalized = normalizer.normalize(&document);

            let target: &Path = output.as_deref().unwrap_or(&file);
            loader.save(target, &normalized)?;
            println!("✨ Normalized resume written to {}", target.display());

            Ok(())
        }

        Commands::Templates { action } => match action {
            TemplateAction::List => {
                println!("🎨 Available templates:\n");
                for style in &TEMPLATE_GALLERY {
                    println!("  {:<14} {}", style.id, style.description);
                }
                Ok(())
            }
        },

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeStudioError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("🔄 Configuration reset to defaults");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}

fn build_report(file: &PathBuf, config: &Config) -> Result<ResumeReport> {
    let mut loader = DocumentLoader::new();
    let document = loader.load(file)?;

    let scorer = AtsScorer::new();
    let analysis = scorer.score(&document);

    let validator = FormValidator::with_date_validator(config.date_validator());
    let validation = validator.validate(&document);

    let source = file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file.display().to_string());

    Ok(ResumeReport::new(source, analysis, validation))
}
