//! Document loader for resume files

use crate::error::{Result, ResumeStudioError};
use crate::input::file_detector::FileFormat;
use crate::processing::document::ResumeDocument;
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads and writes resume documents, caching parsed results per path.
pub struct DocumentLoader {
    cache: HashMap<String, ResumeDocument>,
    enable_cache: bool,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn load(&mut self, path: &Path) -> Result<ResumeDocument> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached document for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeStudioError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = self.detect_format(path)?;
        let content = fs::read_to_string(path)?;

        let document: ResumeDocument = match format {
            FileFormat::Json => {
                info!("Parsing JSON resume: {}", path.display());
                serde_json::from_str(&content)?
            }
            FileFormat::Toml => {
                info!("Parsing TOML resume: {}", path.display());
                toml::from_str(&content).map_err(|e| {
                    ResumeStudioError::DocumentParsing(format!(
                        "{}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            FileFormat::Unknown => {
                return Err(ResumeStudioError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    /// Write a document back to disk in the format the extension names.
    pub fn save(&self, path: &Path, document: &ResumeDocument) -> Result<()> {
        let content = match self.detect_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(document)?,
            FileFormat::Toml => toml::to_string_pretty(document).map_err(|e| {
                ResumeStudioError::DocumentParsing(format!("{}: {}", path.display(), e))
            })?,
            FileFormat::Unknown => {
                return Err(ResumeStudioError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn detect_format(&self, path: &Path) -> Result<FileFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeStudioError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        Ok(FileFormat::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "resume.json",
            r#"{"personalInfo": {"fullName": "Jane Doe"}, "summary": "Hi."}"#,
        );

        let mut loader = DocumentLoader::new();
        let doc = loader.load(&path).unwrap();
        assert_eq!(doc.personal_info.full_name, "Jane Doe");
        assert_eq!(doc.summary, "Hi.");
    }

    #[test]
    fn test_load_toml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "resume.toml",
            "summary = \"Hi.\"\n\n[personalInfo]\nfullName = \"Jane Doe\"\n",
        );

        let mut loader = DocumentLoader::new();
        let doc = loader.load(&path).unwrap();
        assert_eq!(doc.personal_info.full_name, "Jane Doe");
    }

    #[test]
    fn test_cache_hit_on_second_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.json", r#"{"summary": "Hi."}"#);

        let mut loader = DocumentLoader::new();
        let first = loader.load(&path).unwrap();
        assert_eq!(loader.cache_size(), 1);
        let second = loader.load(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(loader.cache_size(), 1);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut doc = ResumeDocument::new();
        doc.personal_info.full_name = "Jane Doe".to_string();

        let mut loader = DocumentLoader::new().with_cache(false);
        loader.save(&path, &doc).unwrap();
        let reloaded = loader.load(&path).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.pdf", "not really a pdf");

        let mut loader = DocumentLoader::new();
        assert!(matches!(
            loader.load(&path),
            Err(ResumeStudioError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_nonexistent_file() {
        let mut loader = DocumentLoader::new();
        let result = loader.load(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ResumeStudioError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "broken.json", "{ not json");

        let mut loader = DocumentLoader::new();
        assert!(loader.load(&path).is_err());
    }
}
