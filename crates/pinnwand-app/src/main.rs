//! # Pinnwand - Reports for the Pinnwand messaging site
//!
//! This is the main entry point that wires everything together.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads:   AppConfig (shared)                              │
//! │    ├── Creates: InMemoryRecordStore (adapter)                   │
//! │    ├── Creates: ReportGenerator (use case)                      │
//! │    └── Renders: PlainText / Html ReportWriter (adapter)         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   pinnwand users                               - List users
//!   pinnwand report messages --user 1            - Messages of a user
//!   pinnwand report activity --user 1 -f html    - Activity as HTML
//!   pinnwand report all                          - Activity of every user

mod commands;
mod demo;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pinnwand_adapter::{Dataset, InMemoryRecordStore};
use shared::{AppConfig, PinnwandError};
use tracing::info;

use commands::{list_users, ReportCommand};

#[derive(Parser)]
#[command(name = "pinnwand")]
#[command(about = "Pinnwand - Reports over users, messages and subscriptions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset file (JSON); the demo dataset is used if omitted
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and print a report
    Report(ReportCommand),
    /// List all users
    Users,
}

fn load_store(data: Option<&PathBuf>) -> shared::Result<InMemoryRecordStore> {
    match data {
        Some(path) => {
            info!(path = %path.display(), "Loading dataset");
            let store = Dataset::from_file(path)
                .and_then(Dataset::into_store)
                .map_err(PinnwandError::from)?;
            Ok(store)
        }
        None => {
            info!("No dataset given, using demo data");
            Ok(demo::demo_store()?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    shared::init_logging(&config.log_level)?;

    let store = load_store(cli.data.as_ref()).context("failed to load dataset")?;

    let output = match cli.command {
        Commands::Report(cmd) => cmd.run(&config, store)?,
        Commands::Users => list_users(&store)?,
    };

    print!("{}", output);
    Ok(())
}
