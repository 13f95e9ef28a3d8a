//! Card recommendations derived from missed-reward evidence
//!
//! Evidence is totalled two ways, per category and per best card. The top
//! three category totals become category recommendations, the top three card
//! totals become "overall" recommendations, and the combined list (category
//! entries first) is cut to three. When evidence spans three or more
//! categories, only category recommendations survive the cut.

use crate::catalog::CardCatalog;
use crate::models::Category;

use super::engine::best_card_for_category;
use super::types::{MissedRewardEvidence, Recommendation, RecommendationBasis};

/// Maximum recommendations in a report, and per grouping
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Build ranked recommendations from evidence
pub fn generate_recommendations(
    evidence: &[MissedRewardEvidence],
    catalog: &CardCatalog,
) -> Vec<Recommendation> {
    let mut category_totals: Vec<(Category, f64)> = Vec::new();
    let mut card_totals: Vec<(&str, f64)> = Vec::new();

    for item in evidence {
        add_to_total(
            &mut category_totals,
            item.transaction.category,
            item.missed_usd,
        );
        add_to_total(&mut card_totals, item.best_card.as_str(), item.missed_usd);
    }

    let mut recommendations = Vec::new();

    for (category, amount) in top_totals(category_totals) {
        if let Some(card) = best_card_for_category(catalog, category) {
            recommendations.push(Recommendation {
                card: card.name.clone(),
                potential_savings: amount,
                reason: format!(
                    "Best for your high {} spend (${:.2} missed)",
                    category, amount
                ),
                category: RecommendationBasis::Category(category),
            });
        }
    }

    for (card, amount) in top_totals(card_totals) {
        recommendations.push(Recommendation {
            card: card.to_string(),
            potential_savings: amount,
            reason: format!(
                "Overall best card for your spending patterns (${:.2} potential savings)",
                amount
            ),
            category: RecommendationBasis::Overall,
        });
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Accumulate into a total keyed by first appearance
fn add_to_total<K: PartialEq>(totals: &mut Vec<(K, f64)>, key: K, amount: f64) {
    match totals.iter_mut().find(|(k, _)| *k == key) {
        Some((_, total)) => *total += amount,
        None => totals.push((key, amount)),
    }
}

/// Highest totals first; equal totals keep first-appearance order
fn top_totals<K>(mut totals: Vec<(K, f64)>) -> Vec<(K, f64)> {
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.truncate(MAX_RECOMMENDATIONS);
    totals
}
