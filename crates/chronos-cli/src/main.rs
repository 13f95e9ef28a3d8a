//! Chronos CLI - Credit card reward advisor
//!
//! Usage:
//!   chronos catalog                                  List card offers
//!   chronos missed --transactions tx.json            Report missed rewards
//!   chronos timeline --goals goals.json -t tx.json   Plan bonuses toward goals

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

    let catalog = commands::open_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Catalog { json } => commands::cmd_catalog(&catalog, json),
        Commands::Missed {
            transactions,
            lookback_months,
            infer_categories,
            json,
        } => commands::cmd_missed(
            &catalog,
            &transactions,
            lookback_months,
            infer_categories,
            json,
        ),
        Commands::Timeline {
            goals,
            transactions,
            goal_id,
            lookback_months,
            infer_categories,
            json,
        } => commands::cmd_timeline(
            &catalog,
            &goals,
            &transactions,
            goal_id.as_deref(),
            lookback_months,
            infer_categories,
            json,
        ),
    }
}
