//! Docshelf CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod output;

use commands::{Cli, Commands};
use docshelf_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    init_logging(&cli, &config);

    if let Err(e) = cli.execute(config).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Level and format the command should log with.
///
/// `serve` logs like the server binary does, from `config.logging`. The
/// admin commands print tables to stdout and only log warnings.
fn log_settings<'a>(cli: &Cli, config: &'a AppConfig) -> (&'a str, &'a str) {
    match cli.command {
        Commands::Serve(_) => (config.logging.level.as_str(), config.logging.format.as_str()),
        _ => ("warn", "pretty"),
    }
}

/// Initialize tracing/logging
fn init_logging(cli: &Cli, config: &AppConfig) {
    let (level, format) = log_settings(cli, config);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}
