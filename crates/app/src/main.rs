use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use certtrack_app::{Tracker, TrackerConfig};
use certtrack_core::SystemClock;
use certtrack_observability::LogFormat;
use certtrack_storage::FileKeyValueStore;

/// Reports over the local certification store.
#[derive(Debug, Parser)]
#[command(name = "certtrack", version)]
struct Cli {
    /// Store file to read (overrides CERTTRACK_STORE_PATH).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Human-readable logs instead of JSON.
    #[arg(long, global = true)]
    pretty_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Certifications due for renewal, most urgent first.
    Reminders,
    /// Certifications expiring within 30 days.
    Expiring,
    /// Dashboard counts by status.
    Stats,
    /// Write every certification to a JSON file.
    Export {
        /// Target file; defaults to the dated export name in the working directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.pretty_logs {
        certtrack_observability::logging::init(LogFormat::Pretty);
    } else {
        certtrack_observability::init();
    }

    let config = TrackerConfig::from_env();
    let store = match cli.store.or(config.store_path) {
        Some(path) => FileKeyValueStore::new(path),
        None => FileKeyValueStore::open_default().context("failed to resolve default store path")?,
    };
    tracing::debug!(path = %store.path().display(), "opened store");

    let tracker = Tracker::new(store, SystemClock, config.admin);

    match cli.command {
        Command::Reminders => print_json(&tracker.renewal_reminders()?)?,
        Command::Expiring => print_json(&tracker.expiring_soon()?)?,
        Command::Stats => print_json(&tracker.dashboard_stats()?)?,
        Command::Export { out } => {
            let file = tracker.export_all()?;
            let path = out.unwrap_or_else(|| PathBuf::from(&file.file_name));
            std::fs::write(&path, &file.contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), count = file.count, "export written");
        }
    }

    Ok(())
}
