use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Engine;
use crate::server;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Generate JSDoc comments, READMEs, API docs and usage examples")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Target directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Generate doc comments for a source file and rewrite it in place
    Jsdoc {
        /// Source file to document
        file: PathBuf,
    },

    /// Create a README for the project
    Readme {
        /// Project name used in the README heading
        name: String,
    },

    /// Format raw section-delimited text into API documentation
    ApiDocs {
        /// File containing the raw text to format
        input: PathBuf,
    },

    /// Generate a usage-examples document
    Usage {
        /// Source file to draw examples from
        file: Option<PathBuf>,
    },

    /// Run the HTTP server exposing the generation endpoints
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    pub async fn execute(self, engine: Engine) -> Result<()> {
        match self.command {
            Commands::Init { path } => {
                engine.init(path)?;
                Ok(())
            }
            Commands::Jsdoc { file } => {
                engine.generate_jsdoc(&file).await?;
                Ok(())
            }
            Commands::Readme { name } => {
                engine.create_readme(&name)?;
                Ok(())
            }
            Commands::ApiDocs { input } => {
                let raw = std::fs::read_to_string(&input)?;
                engine.document_api(&raw)?;
                Ok(())
            }
            Commands::Usage { file } => {
                engine.generate_usage_examples(file.as_deref()).await?;
                Ok(())
            }
            Commands::Serve { port } => server::run(engine, port).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_is_parsed() {
        let cli = Cli::try_parse_from(["docsmith", "--verbose", "usage"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["docsmith", "usage"]).unwrap();
        assert!(!cli.verbose);
    }
}
