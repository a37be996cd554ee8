//! Outlay CLI - Expense tracker dashboard
//!
//! Usage:
//!   outlay summary                Dashboard summary cards
//!   outlay categories             Spending by category
//!   outlay monthly                Monthly trend table
//!   outlay list --search coffee   Filtered expense history
//!
//! All commands read an expense snapshot file (--file, default
//! expenses.json); nothing is persisted.

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let records = commands::load_records(&cli.file, cli.user.as_deref())?;

    match cli.command {
        Commands::Summary => {
            let now = commands::resolve_as_of(cli.as_of.as_deref())?;
            commands::cmd_summary(&records, now, cli.json)
        }
        Commands::Categories => commands::cmd_categories(&records, cli.json),
        Commands::Monthly => commands::cmd_monthly(&records, cli.json),
        Commands::List {
            search,
            category,
            date,
            limit,
        } => commands::cmd_list(
            &records,
            search.as_deref(),
            category.as_deref(),
            date.as_deref(),
            limit,
            cli.json,
        ),
    }
}
