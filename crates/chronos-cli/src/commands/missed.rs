//! Missed rewards report

use std::path::Path;

use anyhow::Result;
use chronos_core::{calculate_missed_rewards, within_lookback, CardCatalog, MissedRewardsReport};

use super::{load_transactions, today, truncate, usd};

/// Load transactions and compute the report
pub fn build_missed_report(
    catalog: &CardCatalog,
    transactions_path: &Path,
    lookback_months: Option<u32>,
    infer_categories: bool,
) -> Result<MissedRewardsReport> {
    let mut transactions = load_transactions(transactions_path, infer_categories)?;

    if let Some(months) = lookback_months {
        transactions = within_lookback(&transactions, today(), months).cloned().collect();
    }

    Ok(calculate_missed_rewards(&transactions, catalog))
}

pub fn cmd_missed(
    catalog: &CardCatalog,
    transactions_path: &Path,
    lookback_months: Option<u32>,
    infer_categories: bool,
    json: bool,
) -> Result<()> {
    let report = build_missed_report(
        catalog,
        transactions_path,
        lookback_months,
        infer_categories,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &MissedRewardsReport) {
    println!(
        "💰 Analyzed {} transactions: {} missed",
        report.total_transactions,
        usd(report.missed_usd_total)
    );

    if report.evidence.is_empty() {
        println!("   ✅ Every purchase was already on the best card");
        return;
    }

    println!();
    println!(
        "   {:<10}  {:<24}  {:>9}  {:<28}  {:>8}",
        "Date", "Merchant", "Amount", "Better card", "Missed"
    );
    println!("   {}", "-".repeat(87));
    for e in &report.evidence {
        println!(
            "   {:<10}  {:<24}  {:>9}  {:<28}  {:>8}",
            e.transaction.date.format("%Y-%m-%d"),
            truncate(&e.transaction.merchant, 24),
            usd(e.transaction.amount),
            truncate(&e.best_card, 28),
            usd(e.missed_usd)
        );
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("🏆 Recommendations");
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("   {}. {} [{}]", i + 1, rec.card, rec.category);
            println!("      {}", rec.reason);
        }
    }
}
