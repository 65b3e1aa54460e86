//! Command-line front end for the student record manager.
//!
//! Provides commands for:
//! - Listing, filtering and sorting students
//! - Adding, updating and deleting records
//! - Inspecting a single record before editing

mod cli;
mod commands;
mod output;

use std::io;

use anyhow::Context;
use clap::Parser;
use student_db_core::config::DbConfig;
use student_db_core::RecordManager;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let args = Cli::parse();

    // Initialize tracing subscriber for logging
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Create configuration
    let config = DbConfig {
        data_file: args.data_file,
    };
    tracing::debug!("Using data file {}", config.data_file.display());

    let mut manager = RecordManager::open(&config).with_context(|| {
        format!(
            "Failed to load students from {}",
            config.data_file.display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(args.command, &mut manager, &mut out)
}
