//! Spending summaries feeding the timeline planner

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Transaction};

/// Default lookback window for spending analysis
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;

/// Total spend per category over a lookback window
///
/// Iterates in category order, so sums over it are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<Category, f64>")]
pub struct SpendingPattern {
    totals: BTreeMap<Category, f64>,
}

impl SpendingPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum transaction amounts per category
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut pattern = Self::new();
        for tx in transactions {
            pattern.add(tx.category, tx.amount);
        }
        pattern
    }

    /// Add spend to a category
    pub fn add(&mut self, category: Category, amount: f64) {
        *self.totals.entry(category).or_insert(0.0) += amount;
    }

    /// Builder form of [`add`](Self::add)
    pub fn with(mut self, category: Category, amount: f64) -> Self {
        self.add(category, amount);
        self
    }

    /// Spend in a category, zero if none
    pub fn get(&self, category: Category) -> f64 {
        self.totals.get(&category).copied().unwrap_or(0.0)
    }

    /// Categories with their totals, in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.totals.iter().map(|(c, amount)| (*c, *amount))
    }

    /// Spend across all categories
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Unknown category names fold into `Other` and are summed, not overwritten
impl From<BTreeMap<String, f64>> for SpendingPattern {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let mut pattern = Self::new();
        for (name, amount) in raw {
            pattern.add(Category::from_lenient(&name), amount);
        }
        pattern
    }
}

impl From<SpendingPattern> for BTreeMap<Category, f64> {
    fn from(pattern: SpendingPattern) -> Self {
        pattern.totals
    }
}

/// First day included in a lookback window ending at `today`
pub fn lookback_start(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Transactions dated on or after the start of the lookback window
///
/// Later dates are kept as-is; rejecting future-dated input is the ingestion
/// side's job.
pub fn within_lookback(
    transactions: &[Transaction],
    today: NaiveDate,
    months: u32,
) -> impl Iterator<Item = &Transaction> {
    let start = lookback_start(today, months);
    transactions.iter().filter(move |tx| tx.date >= start)
}
