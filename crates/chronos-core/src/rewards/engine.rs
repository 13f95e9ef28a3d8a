//! Missed-reward calculation over a transaction history

use tracing::debug;

use crate::catalog::{CardCatalog, CardOffer};
use crate::models::{Category, Transaction};

use super::recommendations::generate_recommendations;
use super::types::{MissedRewardEvidence, MissedRewardsReport};

/// Round a dollar amount to cents
pub fn round_to_cents(usd: f64) -> f64 {
    (usd * 100.0).round() / 100.0
}

/// The card earning the most per dollar in a category
///
/// Walks the catalog in order and keeps the first strict maximum, so ties go to
/// the earlier card. Returns `None` when no card earns anything.
pub fn best_card_for_category(catalog: &CardCatalog, category: Category) -> Option<&CardOffer> {
    let mut best = None;
    let mut best_value = 0.0;

    for card in catalog {
        let value = card.value_per_dollar(category);
        if value > best_value {
            best_value = value;
            best = Some(card);
        }
    }

    best
}

/// Compare a transaction's card against the best card for its category
///
/// Returns `None` when the transaction was already on the best card or the
/// difference rounds to zero cents.
pub fn missed_reward_for(
    transaction: &Transaction,
    catalog: &CardCatalog,
) -> Option<MissedRewardEvidence> {
    let category = transaction.category;
    let best = best_card_for_category(catalog, category)?;
    if best.name == transaction.card {
        return None;
    }

    let current_multiplier = catalog.multiplier_for(&transaction.card, category);
    let current_reward_usd =
        transaction.amount * current_multiplier * catalog.point_value_for(&transaction.card);
    let best_reward_usd = transaction.amount * best.value_per_dollar(category);
    let missed_usd = best_reward_usd - current_reward_usd;

    if round_to_cents(missed_usd) <= 0.0 {
        return None;
    }

    Some(MissedRewardEvidence {
        transaction: transaction.clone(),
        current_card: transaction.card.clone(),
        best_card: best.name.clone(),
        current_reward_usd,
        best_reward_usd,
        missed_usd,
        reason: format!(
            "{}x points on {} vs {}x on current card",
            best.multiplier_for(category),
            category,
            current_multiplier
        ),
    })
}

/// Quantify rewards forfeited by using the wrong card
///
/// Total over any transaction list: unknown cards earn 1x at one cent per
/// point, and an empty list yields [`MissedRewardsReport::empty`].
pub fn calculate_missed_rewards(
    transactions: &[Transaction],
    catalog: &CardCatalog,
) -> MissedRewardsReport {
    let evidence: Vec<MissedRewardEvidence> = transactions
        .iter()
        .filter_map(|tx| missed_reward_for(tx, catalog))
        .collect();

    let missed_usd_total = evidence.iter().map(|e| e.missed_usd).sum();
    let recommendations = generate_recommendations(&evidence, catalog);

    debug!(
        transactions = transactions.len(),
        missed = evidence.len(),
        missed_usd_total,
        "Missed reward calculation complete"
    );

    MissedRewardsReport {
        missed_usd_total,
        total_transactions: transactions.len(),
        evidence,
        recommendations,
    }
}
