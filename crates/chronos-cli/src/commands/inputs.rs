//! Loading command inputs
//!
//! This module contains:
//! - `open_catalog` - Resolve and load the card catalog
//! - `load_transactions` - Read a JSON transaction file, optionally recategorizing
//! - `load_goals` - Read a JSON goal file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use chronos_core::{categorize_merchant, CardCatalog, Category, Goal, Transaction};
use tracing::{debug, info};

/// Load the catalog from `path`, the data-dir override, or the built-in default
pub fn open_catalog(path: Option<&Path>) -> Result<CardCatalog> {
    let catalog = CardCatalog::load(path).context("Failed to load card catalog")?;
    debug!(cards = catalog.len(), "Card catalog ready");
    Ok(catalog)
}

/// Read transactions from a JSON array
///
/// With `infer_categories`, transactions whose category is `other` are
/// recategorized from their merchant name.
pub fn load_transactions(path: &Path, infer_categories: bool) -> Result<Vec<Transaction>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut transactions: Vec<Transaction> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid transactions in {}", path.display()))?;

    if infer_categories {
        let mut recategorized = 0;
        for tx in transactions.iter_mut().filter(|tx| tx.category == Category::Other) {
            let inferred = categorize_merchant(&tx.merchant);
            if inferred != Category::Other {
                tx.category = inferred;
                recategorized += 1;
            }
        }
        info!(recategorized, "Inferred categories from merchant names");
    }

    Ok(transactions)
}

/// Read goals from a JSON array
pub fn load_goals(path: &Path) -> Result<Vec<Goal>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid goals in {}", path.display()))
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
