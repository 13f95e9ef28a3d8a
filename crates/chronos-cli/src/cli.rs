//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chronos_core::DEFAULT_LOOKBACK_MONTHS;
use clap::{Parser, Subcommand};

/// Chronos - Stop leaving card rewards on the table
#[derive(Parser)]
#[command(name = "chronos")]
#[command(about = "Find missed credit card rewards and plan sign-up bonuses for your goals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Card catalog file (TOML, or a JSON array of offers)
    ///
    /// Defaults to ~/.local/share/chronos/config/cards.toml when present,
    /// otherwise the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the card offers in the catalog
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report rewards missed by paying with the wrong card
    Missed {
        /// JSON file with an array of transactions
        #[arg(short, long)]
        transactions: PathBuf,

        /// Only consider transactions from the last N months
        #[arg(long)]
        lookback_months: Option<u32>,

        /// Categorize uncategorized transactions from the merchant name
        #[arg(long)]
        infer_categories: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Plan sign-up bonuses toward your goals
    Timeline {
        /// JSON file with an array of goals
        #[arg(short, long)]
        goals: PathBuf,

        /// JSON file with an array of transactions (used for spending patterns)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Only plan the goal with this id
        #[arg(long)]
        goal_id: Option<String>,

        /// Months of spending history to consider
        #[arg(long, default_value_t = DEFAULT_LOOKBACK_MONTHS)]
        lookback_months: u32,

        /// Categorize uncategorized transactions from the merchant name
        #[arg(long)]
        infer_categories: bool,

        /// Print the timelines as JSON
        #[arg(long)]
        json: bool,
    },
}
