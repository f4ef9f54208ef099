//! Configuration management for resume studio

use crate::error::{Result, ResumeStudioError};
use crate::processing::dates::DateValidator;
use crate::processing::normalizer::{
    CyclingVerbPicker, FixedVerbPicker, VerbPicker, ACTION_VERBS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub formatting: FormattingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Overrides the wall-clock reference year used for date validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormattingConfig {
    /// When set, bullet rewriting always prepends this verb instead of
    /// cycling the action-verb vocabulary. Must be one of the known verbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_verb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            formatting: FormattingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeStudioError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeStudioError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-studio")
            .join("config.toml")
    }

    /// Date validator honoring the configured reference-year override.
    pub fn date_validator(&self) -> DateValidator {
        match self.scoring.reference_year {
            Some(year) => DateValidator::with_reference_year(year),
            None => DateValidator::new(),
        }
    }

    /// Verb picker for bullet rewriting, per the formatting section.
    pub fn verb_picker(&self) -> Result<Box<dyn VerbPicker>> {
        match &self.formatting.fallback_verb {
            Some(verb) => {
                if ACTION_VERBS.contains(&verb.as_str()) {
                    Ok(Box::new(FixedVerbPicker::new(verb.clone())))
                } else {
                    Err(ResumeStudioError::Configuration(format!(
                        "Unknown fallback verb: {}. Known verbs: {}",
                        verb,
                        ACTION_VERBS.join(", ")
                    )))
                }
            }
            None => Ok(Box::new(CyclingVerbPicker::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[output]\ndetailed = true\n").unwrap();
        assert!(parsed.output.detailed);
        assert_eq!(parsed.output.format, OutputFormat::Console);
        assert!(parsed.scoring.reference_year.is_none());
    }

    #[test]
    fn test_reference_year_override() {
        let config: Config = toml::from_str("[scoring]\nreference_year = 2024\n").unwrap();
        let dates = config.date_validator();
        assert!(dates.is_valid("01/2034"));
        assert!(!dates.is_valid("01/2035"));
    }

    #[test]
    fn test_unknown_fallback_verb_is_rejected() {
        let config: Config = toml::from_str("[formatting]\nfallback_verb = \"vibed\"\n").unwrap();
        assert!(config.verb_picker().is_err());
    }

    #[test]
    fn test_known_fallback_verb_is_used() {
        let config: Config =
            toml::from_str("[formatting]\nfallback_verb = \"launched\"\n").unwrap();
        let mut picker = config.verb_picker().unwrap();
        assert_eq!(picker.pick(), "launched");
        assert_eq!(picker.pick(), "launched");
    }
}
