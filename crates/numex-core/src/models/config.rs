//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the generative-AI API key.
///
/// The key is read from the environment (or a `.env` file) only; it is
/// never written to the configuration file.
pub const GENAI_API_KEY_ENV: &str = "NUMEX_GENAI_API_KEY";

/// Main configuration for the numex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NumexConfig {
    /// Directory used to resolve relative input filenames.
    pub data_dir: PathBuf,

    /// Directory where result files are written.
    pub results_dir: PathBuf,

    /// Delegated generative-AI extraction configuration.
    pub genai: GenAiConfig,
}

impl Default for NumexConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
            genai: GenAiConfig::default(),
        }
    }
}

/// Configuration for the generative-AI delegate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// Hosted model identifier.
    pub model: String,

    /// Extraction prompt override; the built-in prompt is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            prompt: None,
        }
    }
}

impl NumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Resolve an input filename against the data directory.
    ///
    /// Absolute paths are used as given; relative ones are joined onto
    /// `data_dir`.
    pub fn resolve_input(&self, filename: &std::path::Path) -> PathBuf {
        if filename.is_absolute() {
            filename.to_path_buf()
        } else {
            self.data_dir.join(filename)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_input_relative() {
        let config = NumexConfig::default();
        assert_eq!(
            config.resolve_input(std::path::Path::new("report.pdf")),
            PathBuf::from("data/report.pdf")
        );
    }

    #[test]
    fn test_resolve_input_absolute() {
        let config = NumexConfig::default();
        assert_eq!(
            config.resolve_input(std::path::Path::new("/tmp/report.pdf")),
            PathBuf::from("/tmp/report.pdf")
        );
    }

    #[test]
    fn test_config_round_trip() {
        let config = NumexConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: NumexConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.genai.model, config.genai.model);
        assert_eq!(parsed.data_dir, config.data_dir);
    }
}
