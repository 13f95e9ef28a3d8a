//! Reward Engine - missed rewards and card recommendations
//!
//! For every transaction the engine finds the catalog card that earns the most
//! per dollar in the transaction's category, prices what the card actually
//! used earned, and records the difference as evidence. Evidence is then
//! rolled up into at most three recommendations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chronos_core::{rewards::calculate_missed_rewards, CardCatalog};
//!
//! let catalog = CardCatalog::load(None)?;
//! let report = calculate_missed_rewards(&transactions, &catalog);
//! println!("Missed ${:.2}", report.missed_usd_total);
//! ```

pub mod engine;
pub mod recommendations;
pub mod types;

pub use engine::{
    best_card_for_category, calculate_missed_rewards, missed_reward_for, round_to_cents,
};
pub use recommendations::{generate_recommendations, MAX_RECOMMENDATIONS};
pub use types::{MissedRewardEvidence, MissedRewardsReport, Recommendation, RecommendationBasis};
