//! Sync command - Exchange differences with the remote store
//!
//! Provides the `lingosync sync` CLI command which:
//! 1. Discovers configuration and applies flag overrides
//! 2. Builds the HTTP remote store adapter and the terminal prompter
//! 3. Runs the sync flow and displays the summary

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
pub struct SyncCommand {
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
    pub dir: Option<PathBuf>,

    /// Resolve every conflict by keeping the local value
    #[arg(long, conflicts_with = "force_remote")]
    pub force_local: bool,

    /// Resolve every conflict by taking the remote value
    #[arg(long)]
    pub force_remote: bool,
}

impl SyncCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
        let formatter = format.formatter();

        let config = Config::discover(config_path).context("failed to load configuration")?;
        let overrides = CliOverrides {
            project: self.project.clone(),
            space: self.space.clone(),
            branch: self.branch.clone(),
            format: self.format.clone(),
            dir: self.dir.clone(),
            force_local: self.force_local,
            force_remote: self.force_remote,
            ..CliOverrides::default()
        };
        let opts = ResolvedOptions::resolve(&config, &overrides)?;

        info!(
            project = %opts.project,
            space = %opts.space,
            branch = %opts.branch,
            dir = %opts.dir.display(),
            "synchronizing translations"
        );

        let client = StoreClient::new(opts.api_base_url.clone(), opts.api_token.clone());
        let store = Arc::new(HttpRemoteStore::new(client));
        let engine = SyncEngine::new(store, Arc::new(TerminalPrompter), opts);

        let summary = engine.sync().await?;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "in_sync": summary.in_sync,
                "uploaded": summary.uploaded,
                "downloaded": summary.downloaded,
                "resolved_local": summary.resolved_local,
                "resolved_remote": summary.resolved_remote,
                "preserved": summary.preserved,
            }));
            return Ok(());
        }

        if summary.in_sync {
            formatter.success("Already in sync");
            return Ok(());
        }

        formatter.success("Sync completed");
        if summary.uploaded > 0 {
            formatter.info(&format!(
                "Uploaded:   {} key{}",
                summary.uploaded,
                if summary.uploaded == 1 { "" } else { "s" }
            ));
        }
        if summary.downloaded > 0 {
            formatter.info(&format!(
                "Downloaded: {} key{}",
                summary.downloaded,
                if summary.downloaded == 1 { "" } else { "s" }
            ));
        }
        let resolved = summary.resolved_local + summary.resolved_remote;
        if resolved > 0 {
            formatter.info(&format!(
                "Resolved:   {} conflict{} ({} local, {} remote)",
                resolved,
                if resolved == 1 { "" } else { "s" },
                summary.resolved_local,
                summary.resolved_remote,
            ));
        }

        Ok(())
    }
}
