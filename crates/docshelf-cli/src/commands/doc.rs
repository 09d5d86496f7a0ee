//! Document inspection CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_service::DocumentService;
use docshelf_storage::LocalDocumentStore;

/// Arguments for document commands
#[derive(Debug, Args)]
pub struct DocArgs {
    /// Document subcommand
    #[command(subcommand)]
    pub command: DocCommand,
}

/// Document subcommands
#[derive(Debug, Subcommand)]
pub enum DocCommand {
    /// List documents in the data directory
    List,
}

/// Document display row for table output
#[derive(Debug, Serialize, Tabled)]
struct DocRow {
    /// Document name
    name: String,
    /// Render mode
    mode: String,
    /// Size in bytes
    bytes: usize,
}

/// Execute document commands
pub async fn execute(
    args: &DocArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = LocalDocumentStore::new(&config.storage.data_dir).await?;
    let documents = DocumentService::new(Arc::new(store));

    match &args.command {
        DocCommand::List => {
            let mut rows = Vec::new();
            for summary in documents.list().await? {
                let bytes = documents.store().read(&summary.name).await?.len();
                rows.push(DocRow {
                    mode: summary.mode.to_string(),
                    name: summary.name,
                    bytes,
                });
            }

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
