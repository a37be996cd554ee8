//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track expenses and see where the money goes
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Personal expense tracker and spending dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Expense snapshot file (JSON array of expense records)
    #[arg(long, default_value = "expenses.json", global = true)]
    pub file: PathBuf,

    /// Only include records owned by this user id
    ///
    /// When omitted, every record in the snapshot is included - local
    /// snapshots are usually a single user's export.
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Reference date for the month-over-month comparison (YYYY-MM-DD)
    ///
    /// Defaults to today. The comparison always runs against the supplied
    /// date, so reports are reproducible.
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Emit JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard summary cards
    Summary,

    /// Show spending by category, highest first
    Categories,

    /// Show monthly totals in chronological order
    Monthly,

    /// List expenses, most recent first
    List {
        /// Search descriptions and notes (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Only expenses on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Maximum number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}
