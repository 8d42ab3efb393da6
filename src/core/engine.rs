use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{DocsmithError, Result};
use super::jsdoc::JsdocGenerator;
use super::readme::ReadmeRenderer;
use super::{formatter, usage, LlmModel};

/// Fixed artifact names the passes write to, relative to the output directory.
pub const README_FILE: &str = "README.md";
pub const API_DOCS_FILE: &str = "API_DOCUMENTATION.md";
pub const USAGE_FILE: &str = "USAGE_EXAMPLES.md";

const CONFIG_FILE: &str = "Docsmith.toml";

/// Main orchestration engine for the documentation passes
pub struct Engine {
    config: Config,
    jsdoc: JsdocGenerator,
    readme: ReadmeRenderer,
    model: Option<Box<dyn LlmModel>>,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        debug!("Loaded configuration: {:?}", config);
        Self::with_config(config)
    }

    /// Create an engine from an already-built configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let jsdoc = JsdocGenerator::new()?;
        let readme = ReadmeRenderer::new()?;

        // Initialize the model if enabled
        let model = if config.llm.enabled {
            match super::llm::create_model(&config.llm) {
                Ok(model) => {
                    info!(
                        "LLM integration enabled: {} ({})",
                        model.provider_name(),
                        model.model_name()
                    );
                    Some(model)
                }
                Err(e) => {
                    warn!("Failed to initialize LLM provider: {}", e);
                    warn!("Continuing without a model; model-backed passes will fail");
                    None
                }
            }
        } else {
            debug!("LLM integration disabled");
            None
        };

        Ok(Self {
            config,
            jsdoc,
            readme,
            model,
        })
    }

    /// Write a default configuration file into the target directory
    pub fn init(&self, path: Option<PathBuf>) -> Result<PathBuf> {
        let dir = path.unwrap_or_else(|| PathBuf::from("."));
        let config_path = dir.join(CONFIG_FILE);

        Config::default().save(&config_path)?;
        info!("Wrote default configuration to {}", config_path.display());

        Ok(config_path)
    }

    /// Generate doc comments for a source file and overwrite it in place
    pub async fn generate_jsdoc(&self, file: &Path) -> Result<()> {
        let model = self.require_model()?;
        let source = std::fs::read_to_string(file)?;

        info!("Generating doc comments for {}", file.display());
        let prompt = self.jsdoc.build_prompt(file, &source);
        let response = model.generate(&prompt).await?;
        let cleaned = self.jsdoc.clean_response(&response);

        std::fs::write(file, cleaned)?;
        info!("Rewrote {} with generated doc comments", file.display());

        Ok(())
    }

    /// Render the README template and write it to the output directory
    pub fn create_readme(&self, project_name: &str) -> Result<PathBuf> {
        let generated_on = if self.config.output.include_metadata {
            Some(Utc::now().format("%Y-%m-%d").to_string())
        } else {
            None
        };

        let content = self.readme.render(
            project_name,
            &self.config.templates.settings,
            generated_on.as_deref(),
        )?;

        let path = self.artifact_path(README_FILE);
        std::fs::write(&path, content)?;
        info!("Wrote {}", path.display());

        Ok(path)
    }

    /// Format raw section-delimited text and write the API documentation
    /// artifact. The formatting itself never fails; only the write can.
    pub fn document_api(&self, raw: &str) -> Result<PathBuf> {
        let formatted = formatter::format(raw);

        let path = self.artifact_path(API_DOCS_FILE);
        std::fs::write(&path, formatted)?;
        info!("Wrote {}", path.display());

        Ok(path)
    }

    /// Generate the usage-examples document, via the model when one is
    /// configured and a source file was given, falling back to a placeholder
    pub async fn generate_usage_examples(&self, file: Option<&Path>) -> Result<PathBuf> {
        let content = match (self.model.as_deref(), file) {
            (Some(model), Some(file)) => {
                let source = std::fs::read_to_string(file)?;
                info!("Generating usage examples for {}", file.display());
                model.generate(&usage::build_prompt(file, &source)).await?
            }
            _ => {
                debug!("No model or source file; writing placeholder usage examples");
                usage::fallback_document(&self.config.project.name)
            }
        };

        let path = self.artifact_path(USAGE_FILE);
        std::fs::write(&path, content)?;
        info!("Wrote {}", path.display());

        Ok(path)
    }

    fn artifact_path(&self, name: &str) -> PathBuf {
        self.config.output.dir.join(name)
    }

    fn require_model(&self) -> Result<&dyn LlmModel> {
        self.model
            .as_deref()
            .ok_or_else(|| DocsmithError::Llm("no LLM provider configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_in(dir: &Path) -> Engine {
        let mut config = Config::default();
        config.output.dir = dir.to_path_buf();
        config.project.name = "Test Project".to_string();
        Engine::with_config(config).unwrap()
    }

    #[test]
    fn test_document_api_writes_fixed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_in(dir.path());

        let path = engine.document_api("## A\ncontent A\n## B\ncontent B").unwrap();

        assert_eq!(path, dir.path().join(API_DOCS_FILE));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "## A\n\ncontent A\n\n## B\n\ncontent B\n");
    }

    #[test]
    fn test_document_api_with_no_markers_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_in(dir.path());

        let path = engine.document_api("no sections here").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_create_readme_substitutes_project_name() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_in(dir.path());

        let path = engine.create_readme("My Tool").unwrap();

        assert_eq!(path, dir.path().join(README_FILE));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# My Tool\n"));
        assert!(written.contains("## Features"));
    }

    #[tokio::test]
    async fn test_usage_examples_fall_back_without_a_model() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_in(dir.path());

        let path = engine.generate_usage_examples(None).await.unwrap();

        assert_eq!(path, dir.path().join(USAGE_FILE));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Usage examples for Test Project"));
    }

    #[tokio::test]
    async fn test_engine_passes_end_to_end() {
        use assert_fs::prelude::*;
        use predicates::prelude::*;

        let temp = assert_fs::TempDir::new().unwrap();
        let mut config = Config::default();
        config.output.dir = temp.path().to_path_buf();
        config.project.name = "Test Project".to_string();
        let engine = Engine::with_config(config).unwrap();

        engine.create_readme("Test Project").unwrap();
        engine
            .document_api("## Auth\ntoken header\n## Errors\n400 on bad input")
            .unwrap();
        engine.generate_usage_examples(None).await.unwrap();

        temp.child(README_FILE)
            .assert(predicate::str::starts_with("# Test Project"));
        temp.child(API_DOCS_FILE)
            .assert("## Auth\n\ntoken header\n\n## Errors\n\n400 on bad input\n");
        temp.child(USAGE_FILE)
            .assert(predicate::str::contains("Usage examples for Test Project"));
    }

    #[tokio::test]
    async fn test_jsdoc_requires_a_model() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_in(dir.path());

        let source = dir.path().join("lib.rs");
        std::fs::write(&source, "fn main() {}").unwrap();

        let err = engine.generate_jsdoc(&source).await.unwrap_err();
        assert!(matches!(err, DocsmithError::Llm(_)));
        // Source file is untouched on failure
        assert_eq!(std::fs::read_to_string(&source).unwrap(), "fn main() {}");
    }
}
