use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{DocsmithError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Whether the LLM-backed passes are available
    pub enabled: bool,

    /// LLM provider ("gemini", "openai")
    pub provider: String,

    /// Model name (e.g., "gemini-1.5-flash", "gpt-4")
    pub model: String,

    /// API key; falls back to GEMINI_API_KEY / OPENAI_API_KEY when unset
    pub api_key: Option<String>,

    /// Base URL override for custom endpoints
    pub base_url: Option<String>,

    /// Maximum tokens for LLM responses
    pub max_tokens: Option<u32>,

    /// Temperature for LLM responses (0.0 to 1.0)
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Template customization
    pub templates: TemplateConfig,

    /// Output settings
    pub output: OutputConfig,

    /// LLM integration settings
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name used when none is supplied per request
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Values substituted into the README template
    pub settings: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the generated artifacts are written into
    pub dir: PathBuf,

    /// Include a generated-on line in templated documents
    pub include_metadata: bool,
}

impl Default for Config {
    fn default() -> Self {
        let mut template_settings = HashMap::new();
        template_settings.insert("author".to_string(), "Unknown".to_string());
        template_settings.insert("contact".to_string(), "".to_string());
        template_settings.insert("license".to_string(), "MIT".to_string());

        Self {
            project: ProjectConfig {
                name: "Unnamed Project".to_string(),
            },
            templates: TemplateConfig {
                settings: template_settings,
            },
            output: OutputConfig {
                dir: PathBuf::from("."),
                include_metadata: false,
            },
            llm: LlmConfig {
                enabled: false,
                provider: "gemini".to_string(),
                model: "gemini-1.5-flash".to_string(),
                api_key: None,
                base_url: None,
                max_tokens: Some(2000),
                temperature: Some(0.3),
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| DocsmithError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DocsmithError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                // Try common config file locations
                let candidates = ["Docsmith.toml", "docsmith.toml", ".docsmith.toml"];

                for candidate in &candidates {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }
}

impl LlmConfig {
    /// Resolve the API key, preferring the config value over the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key {
            return Some(key.clone());
        }

        let env_var = match self.provider.as_str() {
            "openai" => "OPENAI_API_KEY",
            _ => "GEMINI_API_KEY",
        };
        std::env::var(env_var).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.project.name, config.project.name);
        assert_eq!(parsed.llm.provider, "gemini");
        assert!(!parsed.llm.enabled);
    }

    #[test]
    fn test_load_or_default_falls_back_when_missing() {
        let config = Config::load_or_default(Some("does-not-exist.toml")).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("."));
    }
}
