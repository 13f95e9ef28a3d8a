//! Timeline Planner - card plans for financial goals
//!
//! Picks the card whose sign-up bonus plus ongoing earn on the user's spending
//! is worth the most, then lays out a three-month plan: apply, meet the
//! minimum spend, redeem. Goals less than three planning months (30-day
//! blocks) away get the recommendation without a plan.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chronos_core::{timeline::generate_timelines, SpendingPattern};
//!
//! let spending = SpendingPattern::from_transactions(&transactions);
//! let timelines = generate_timelines(&goals, &spending, &catalog, None);
//! ```

pub mod planner;
pub mod types;

pub use planner::{
    best_card_for_goal, card_value_for_spending, generate_timeline, generate_timeline_on,
    generate_timelines, generate_timelines_on, months_until, DAYS_PER_MONTH, MIN_PLAN_MONTHS,
};
pub use types::{PlanPhase, Timeline, TimelineStep};
