//! Goal timelines

use std::path::Path;

use anyhow::{bail, Result};
use chronos_core::timeline::{generate_timelines_on, MIN_PLAN_MONTHS};
use chronos_core::{within_lookback, CardCatalog, SpendingPattern, Timeline};

use super::{load_goals, load_transactions, today, usd};

/// Load goals and transactions, summarize spending and plan each goal
pub fn build_timelines(
    catalog: &CardCatalog,
    goals_path: &Path,
    transactions_path: &Path,
    goal_id: Option<&str>,
    lookback_months: u32,
    infer_categories: bool,
) -> Result<Vec<Timeline>> {
    let goals = load_goals(goals_path)?;
    if let Some(id) = goal_id {
        if !goals.iter().any(|g| g.id == id) {
            bail!("No goal with id '{}' in {}", id, goals_path.display());
        }
    }

    let transactions = load_transactions(transactions_path, infer_categories)?;
    let today = today();
    let spending =
        SpendingPattern::from_transactions(within_lookback(&transactions, today, lookback_months));

    tracing::debug!(
        goals = goals.len(),
        spend = spending.total(),
        lookback_months,
        "Planning goal timelines"
    );

    Ok(generate_timelines_on(&goals, &spending, catalog, goal_id, today))
}

pub fn cmd_timeline(
    catalog: &CardCatalog,
    goals_path: &Path,
    transactions_path: &Path,
    goal_id: Option<&str>,
    lookback_months: u32,
    infer_categories: bool,
    json: bool,
) -> Result<()> {
    let timelines = build_timelines(
        catalog,
        goals_path,
        transactions_path,
        goal_id,
        lookback_months,
        infer_categories,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&timelines)?);
        return Ok(());
    }

    if timelines.is_empty() {
        println!("No goals to plan.");
        return Ok(());
    }

    for (i, timeline) in timelines.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_timeline(timeline);
    }

    Ok(())
}

fn print_timeline(timeline: &Timeline) {
    println!(
        "🎯 {} ({}): {} by {}, {} month(s) away",
        timeline.goal_title,
        timeline.goal_category,
        usd(timeline.est_cost_usd),
        timeline.target_date,
        timeline.months_until_goal
    );

    match &timeline.recommended_card {
        Some(card) => println!("   💳 Recommended card: {}", card.name),
        None => {
            println!("   No card in the catalog adds value for this goal");
            return;
        }
    }

    if !timeline.has_plan() {
        println!(
            "   ⚠️  Less than {} months of runway, not enough time to earn and redeem a bonus",
            MIN_PLAN_MONTHS
        );
        return;
    }

    for step in &timeline.timeline_steps {
        println!(
            "   📅 {:<15} {} ({:+} pts)",
            step.month, step.action, step.estimated_points
        );
        println!("      {}", step.reason);
        println!("      {}", step.requirements);
    }
}
