//! Report types produced by the reward engine

use serde::{Deserialize, Serialize};

use crate::models::{Category, Transaction};

/// A transaction that would have earned more on a different card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedRewardEvidence {
    pub transaction: Transaction,
    pub current_card: String,
    pub best_card: String,
    pub current_reward_usd: f64,
    pub best_reward_usd: f64,
    /// `best_reward_usd - current_reward_usd`, always positive
    pub missed_usd: f64,
    pub reason: String,
}

/// What a recommendation is based on: one spending category, or all spending
///
/// Serialized as the category name or `"overall"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RecommendationBasis {
    Category(Category),
    Overall,
}

impl RecommendationBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category(category) => category.as_str(),
            Self::Overall => "overall",
        }
    }
}

impl std::fmt::Display for RecommendationBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<RecommendationBasis> for String {
    fn from(basis: RecommendationBasis) -> Self {
        basis.as_str().to_string()
    }
}

impl TryFrom<String> for RecommendationBasis {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        if s.eq_ignore_ascii_case("overall") {
            return Ok(Self::Overall);
        }
        s.parse::<Category>().map(Self::Category)
    }
}

/// A card suggestion backed by the rewards it would have recovered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub card: String,
    pub potential_savings: f64,
    pub reason: String,
    pub category: RecommendationBasis,
}

/// Missed rewards across a transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedRewardsReport {
    /// Sum of `missed_usd` over `evidence`
    pub missed_usd_total: f64,
    /// Number of transactions analyzed, including those with nothing missed
    pub total_transactions: usize,
    /// Missed rewards in input order
    pub evidence: Vec<MissedRewardEvidence>,
    /// At most three, category-based first
    pub recommendations: Vec<Recommendation>,
}

impl MissedRewardsReport {
    /// Report for an empty transaction history
    pub fn empty() -> Self {
        Self {
            missed_usd_total: 0.0,
            total_transactions: 0,
            evidence: vec![],
            recommendations: vec![],
        }
    }
}
