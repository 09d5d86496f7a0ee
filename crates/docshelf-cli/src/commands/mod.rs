//! CLI command definitions and dispatch.

pub mod doc;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;

/// Docshelf: a small multi-user document manager
#[derive(Debug, Parser)]
#[command(name = "docshelf", version, about, long_about = None)]
pub struct Cli {
    /// Path to a single configuration file (skips the layered lookup)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Configuration environment (reads config/<ENV>.toml over config/default.toml)
    #[arg(long, env = "DOCSHELF_ENV", default_value = "development")]
    pub config_env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Docshelf server
    Serve(serve::ServeArgs),
    /// Account management
    User(user::UserArgs),
    /// Document inspection
    Doc(doc::DocArgs),
}

impl Cli {
    /// Load configuration from `--config`, or the layered lookup for
    /// `--config-env`.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::load_file(path),
            None => AppConfig::load(&self.config_env),
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Doc(args) => doc::execute(args, &config, self.format).await,
        }
    }
}
