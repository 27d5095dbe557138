//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub primary: Option<ProviderConfig>,
    pub secondary: Option<ProviderConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the credential.
    pub api_key_env: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "openai_chat")]
    OpenAiChat,
    #[serde(rename = "gemini")]
    Gemini,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub enabled: bool,
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary: Some(ProviderConfig {
                name: "openai".to_string(),
                kind: ProviderKind::OpenAiChat,
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                temperature: default_temperature(),
                max_tokens: default_max_tokens(),
                timeout_secs: default_timeout_secs(),
                enabled: true,
            }),
            secondary: Some(ProviderConfig {
                name: "gemini".to_string(),
                kind: ProviderKind::Gemini,
                endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-1.5-flash".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                temperature: default_temperature(),
                max_tokens: default_max_tokens(),
                timeout_secs: default_timeout_secs(),
                enabled: true,
            }),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let directory = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-analyzer")
            .join("analyses");

        Self {
            enabled: true,
            directory,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            detailed: false,
        }
    }
}

impl ProviderConfig {
    /// The credential, when its environment variable is set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

impl Config {
    /// Load from `path`, or from the default location. A missing file is
    /// created with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!(
                    "Failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Enabled providers in fallback order.
    pub fn enabled_providers(&self) -> Vec<&ProviderConfig> {
        [&self.providers.primary, &self.providers.secondary]
            .into_iter()
            .flatten()
            .filter(|p| p.enabled)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());

        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[providers.primary]
name = "local-gateway"
kind = "openai_chat"
endpoint = "http://localhost:8080/v1/chat/completions"
model = "test-model"
api_key_env = "RESUME_ANALYZER_TEST_KEY_UNSET"

[output]
format = "json"
color_output = false
detailed = true
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        let primary = config.providers.primary.as_ref().unwrap();
        assert_eq!(primary.kind, ProviderKind::OpenAiChat);
        assert_eq!(primary.temperature, 0.3);
        assert_eq!(primary.max_tokens, 2048);
        assert!(primary.enabled);
        assert!(config.providers.secondary.is_none());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.storage.enabled);
        assert_eq!(primary.api_key(), None);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "providers = 3").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ResumeAnalyzerError::Configuration(_))
        ));
    }

    #[test]
    fn test_disabled_providers_are_skipped() {
        let mut config = Config::default();
        if let Some(primary) = config.providers.primary.as_mut() {
            primary.enabled = false;
        }
        let names: Vec<&str> = config
            .enabled_providers()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["gemini"]);
    }
}
