//! Account management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docshelf_auth::{PasswordHasher, YamlCredentialStore};
use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_service::{AccountService, SignUpRequest};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an account in the credential file
    Add {
        /// Username
        username: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List registered usernames
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// Username
    username: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = YamlCredentialStore::new(&config.auth.credentials_path, PasswordHasher::new());
    let accounts = AccountService::new(Arc::new(store));

    match &args.command {
        UserCommand::Add { username, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let request = SignUpRequest {
                username: username.clone(),
                password_confirmation: password.clone(),
                password,
            };
            accounts.sign_up(&request).await?;

            output::print_success(&format!(
                "User '{}' added to {}",
                username.trim(),
                config.auth.credentials_path
            ));
        }
        UserCommand::List => {
            let rows: Vec<UserRow> = accounts
                .usernames()
                .await?
                .into_iter()
                .map(|username| UserRow { username })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
