//! Lingosync CLI - Command-line interface for lingosync
//!
//! Provides commands for:
//! - Pulling translations from the remote store into local files
//! - Synchronizing local and remote translations in both directions
//! - Inspecting configuration
//! - Generating shell completions

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod exit;
mod output;
mod prompt;

use commands::{
    completions::CompletionsCommand, config::ConfigCommand, pull::PullCommand, sync::SyncCommand,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "lingosync",
    version,
    about = "Keep local translation files in sync with the remote translation store"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Overwrite local translation files from the remote store
    Pull(PullCommand),
    /// Exchange differences with the remote store in both directions
    Sync(SyncCommand),
    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup tracing; logs go to stderr so --json output stays parseable
    let filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let config_path = cli.config.clone();

    let result = match cli.command {
        Commands::Pull(cmd) => cmd.execute(format, config_path.as_deref()).await,
        Commands::Sync(cmd) => cmd.execute(format, config_path.as_deref()).await,
        Commands::Config(cmd) => cmd.execute(format, config_path.as_deref()).await,
        Commands::Completions(cmd) => cmd.execute(format).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatter = format.formatter();
            formatter.error(&format!("{e:#}"));
            ExitCode::from(exit::exit_code(&e))
        }
    }
}
