//! Chronos Core Library
//!
//! Deterministic card reward computations for the Chronos card advisor:
//! - Card catalog with layered configuration (explicit file, data-dir override, embedded default)
//! - Reward engine quantifying rewards missed by using the wrong card
//! - Timeline planner laying out sign-up bonus plans for financial goals
//! - Spending summaries over a lookback window
//! - Keyword categorization for merchants and goals
//!
//! Every computation is a pure function of its inputs. The catalog is passed
//! in explicitly and never mutated, so independent calls can run in parallel.

pub mod catalog;
pub mod categorize;
pub mod error;
pub mod models;
pub mod rewards;
pub mod spending;
pub mod timeline;

#[cfg(test)]
mod test_utils;

pub use catalog::{CardCatalog, CardOffer, DEFAULT_MULTIPLIER, DEFAULT_POINT_VALUE_USD};
pub use categorize::{categorize_merchant, infer_goal_category};
pub use error::{Error, Result};
pub use models::{Category, Goal, GoalCategory, Transaction};
pub use rewards::{
    calculate_missed_rewards, MissedRewardEvidence, MissedRewardsReport, Recommendation,
    RecommendationBasis,
};
pub use spending::{within_lookback, SpendingPattern, DEFAULT_LOOKBACK_MONTHS};
pub use timeline::{generate_timeline, generate_timelines, PlanPhase, Timeline, TimelineStep};
