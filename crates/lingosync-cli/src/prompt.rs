//! Terminal conflict prompter
//!
//! Asks the operator to pick a side for each conflict on the controlling
//! terminal. When stdin is not a terminal the prompter refuses immediately,
//! so scripted invocations fail fast instead of hanging on a read.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use lingosync_core::domain::ConflictEntry;
use lingosync_core::ports::{ConflictChoice, IConflictPrompter};

pub struct TerminalPrompter;

#[async_trait]
impl IConflictPrompter for TerminalPrompter {
    async fn ask(&self, conflict: &ConflictEntry) -> Result<ConflictChoice> {
        if !io::stdin().is_terminal() {
            bail!(
                "conflicts found but stdin is not a terminal; \
                 re-run with --force-local or --force-remote"
            );
        }

        let mut stdout = io::stdout();
        writeln!(stdout, "Conflict in [{}] {}:", conflict.language, conflict.key)?;
        writeln!(stdout, "  local:  {}", conflict.local_value)?;
        writeln!(stdout, "  remote: {}", conflict.remote_value)?;

        loop {
            write!(stdout, "Keep (l)ocal or (r)emote? ")?;
            stdout.flush()?;

            let mut line = String::new();
            let read = io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read conflict answer")?;
            if read == 0 {
                bail!("stdin closed while resolving conflicts");
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "l" | "local" => return Ok(ConflictChoice::Local),
                "r" | "remote" => return Ok(ConflictChoice::Remote),
                _ => writeln!(stdout, "Please answer 'l' or 'r'.")?,
            }
        }
    }
}
