//! Pull command - Overwrite local translation files from the remote store
//!
//! Provides the `lingosync pull` CLI command which:
//! 1. Discovers configuration and applies flag overrides
//! 2. Builds the HTTP remote store adapter
//! 3. Runs the pull flow and displays the summary

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use lingosync_core::config::{CliOverrides, Config, ResolvedOptions};
use lingosync_remote::{HttpRemoteStore, StoreClient};
use lingosync_sync::SyncEngine;

use crate::output::OutputFormat;
use crate::prompt::TerminalPrompter;

#[derive(Debug, Args)]
pub struct PullCommand {
    /// Remote project identifier
    #[arg(long)]
    pub project: Option<String>,

    /// Translation space within the project
    #[arg(long)]
    pub space: Option<String>,

    /// Branch within the space
    #[arg(long)]
    pub branch: Option<String>,

    /// Translation file format (json or yaml)
    #[arg(long)]
    pub format: Option<String>,

    /// Root directory for local translation files
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Restrict the pull to a single language
    #[arg(long)]
    pub lang: Option<String>,
}

impl PullCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
        let formatter = format.formatter();

        let config = Config::discover(config_path).context("failed to load configuration")?;
        let overrides = CliOverrides {
            project: self.project.clone(),
            space: self.space.clone(),
            branch: self.branch.clone(),
            format: self.format.clone(),
            dir: self.output.clone(),
            lang: self.lang.clone(),
            ..CliOverrides::default()
        };
        let opts = ResolvedOptions::resolve(&config, &overrides)?;

        info!(
            project = %opts.project,
            space = %opts.space,
            branch = %opts.branch,
            dir = %opts.dir.display(),
            "pulling translations"
        );

        let client = StoreClient::new(opts.api_base_url.clone(), opts.api_token.clone());
        let store = Arc::new(HttpRemoteStore::new(client));
        // Pull never prompts; the prompter is wiring for the engine only.
        let engine = SyncEngine::new(store, Arc::new(TerminalPrompter), opts);

        let summary = engine.pull().await?;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "languages_written": summary.languages_written,
                "keys_written": summary.keys_written,
                "preserved": summary.preserved,
            }));
        } else {
            formatter.success(&format!(
                "Pulled {} key{} across {} language{}",
                summary.keys_written,
                if summary.keys_written == 1 { "" } else { "s" },
                summary.languages_written,
                if summary.languages_written == 1 { "" } else { "s" },
            ));
            if summary.preserved > 0 {
                formatter.info(&format!(
                    "Preserved: {} local value{} kept over empty remote placeholders",
                    summary.preserved,
                    if summary.preserved == 1 { "" } else { "s" },
                ));
            }
        }

        Ok(())
    }
}
