//! CLI interface for Waypoint.
//!
//! Each subcommand is non-interactive: journals in, status out.
//!
//! - `waypoint status` — where the player is now.
//! - `waypoint history` — status after every journal event.
//!
//! Journals come from explicit file arguments, `--dir`, or the configured
//! journal directory, in that order of preference.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::history::History;
use crate::journal;

use format::{format_entry, format_status};

/// Waypoint — reconstruct where you are from the flight journal.
#[derive(Debug, Parser)]
#[command(name = "waypoint")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the status after the last journal event.
    Status {
        #[command(flatten)]
        source: JournalSource,

        /// Print the snapshot as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the status after every journal event.
    History {
        #[command(flatten)]
        source: JournalSource,

        /// Only events that changed status.
        #[arg(long)]
        changes: bool,

        /// Print entries as JSON lines.
        #[arg(long)]
        json: bool,
    },
}

/// Where to read journals from.
#[derive(Debug, clap::Args)]
pub struct JournalSource {
    /// Journal files, read in the order given.
    files: Vec<PathBuf>,

    /// Read every journal in this directory, oldest first.
    #[arg(long, conflicts_with = "files")]
    dir: Option<PathBuf>,

    /// Fail on undecodable lines instead of skipping them.
    #[arg(long)]
    strict: bool,
}

impl JournalSource {
    /// Resolve the journal files to read.
    fn paths(&self, config: &Config) -> Result<Vec<PathBuf>, String> {
        if !self.files.is_empty() {
            return Ok(self.files.clone());
        }

        let dir = self
            .dir
            .clone()
            .or_else(|| config.journal_dir())
            .ok_or("no journals: pass files, --dir, or set journal-dir in config")?;

        let paths = journal::discover(&dir)
            .map_err(|e| format!("failed to list {}: {e}", dir.display()))?;
        if paths.is_empty() {
            return Err(format!("no journal files in {}", dir.display()));
        }
        Ok(paths)
    }

    fn load(&self, config: &Config) -> Result<History, String> {
        let paths = self.paths(config)?;
        let strict = self.strict || config.strict;
        info!(files = paths.len(), strict, "reading journals");

        let records = journal::read_all(&paths, strict).map_err(|e| e.to_string())?;
        Ok(History::fold(&records))
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::Status { source, json } => cmd_status(config, &source, json),
        Command::History {
            source,
            changes,
            json,
        } => cmd_history(config, &source, changes, json),
    }
}

fn cmd_status(config: &Config, source: &JournalSource, json: bool) -> Result<(), String> {
    let history = source.load(config)?;
    let status = history.current();

    if json {
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| format!("failed to serialize status: {e}"))?;
        println!("{json}");
    } else {
        print!("{}", format_status(&status));
    }
    Ok(())
}

fn cmd_history(
    config: &Config,
    source: &JournalSource,
    changes: bool,
    json: bool,
) -> Result<(), String> {
    let history = source.load(config)?;

    let entries: Vec<_> = if changes {
        history.changes().collect()
    } else {
        history.entries().iter().collect()
    };

    if entries.is_empty() {
        eprintln!("No events");
        return Ok(());
    }

    for entry in entries {
        if json {
            let line = serde_json::to_string(entry)
                .map_err(|e| format!("failed to serialize entry: {e}"))?;
            println!("{line}");
        } else {
            println!("{}", format_entry(entry));
        }
    }
    Ok(())
}
