//! Resume file format detection

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Unknown,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            _ => FileFormat::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileFormat::from_extension("json"), FileFormat::Json);
        assert_eq!(FileFormat::from_extension("JSON"), FileFormat::Json);
        assert_eq!(FileFormat::from_extension("toml"), FileFormat::Toml);
        assert_eq!(FileFormat::from_extension("pdf"), FileFormat::Unknown);
    }
}
