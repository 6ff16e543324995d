//! Config command - View lingosync configuration
//!
//! Provides the `lingosync config` CLI command which:
//! 1. Shows the configuration in effect (YAML or JSON)
//! 2. Prints the configuration file path that discovery would use

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use lingosync_core::config::Config;

use crate::output::OutputFormat;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the configuration in effect
    Show,
    /// Print the configuration file path discovery would use
    Path,
}

impl ConfigCommand {
    /// Execute the config command
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
        match self {
            ConfigCommand::Show => self.execute_show(format, config_path).await,
            ConfigCommand::Path => self.execute_path(format, config_path).await,
        }
    }

    async fn execute_show(&self, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
        let formatter = format.formatter();

        let path = effective_path(config_path);
        let mut config = Config::discover(config_path).context("failed to load configuration")?;

        // Never echo the token back.
        if config.api.token.is_some() {
            config.api.token = Some("***".to_string());
        }

        info!(config_path = %path.display(), "showing configuration");

        if format.is_json() {
            let json = serde_json::to_value(&config)
                .context("failed to serialize configuration to JSON")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", path.display()));
            formatter.info("");

            let yaml = serde_yaml::to_string(&config)
                .context("failed to serialize configuration to YAML")?;
            for line in yaml.lines() {
                formatter.info(line);
            }
        }

        Ok(())
    }

    async fn execute_path(&self, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
        let formatter = format.formatter();
        let path = effective_path(config_path);

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "config_path": path.display().to_string(),
                "exists": path.exists(),
            }));
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}

/// The config file discovery would pick: an explicit `--config` path, a
/// project-local `lingosync.yaml`, then the user config path.
fn effective_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = PathBuf::from("lingosync.yaml");
    if local.exists() {
        return local;
    }
    Config::default_path()
}
