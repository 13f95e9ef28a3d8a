//! Core types for goal timelines

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CardOffer;
use crate::models::GoalCategory;

/// Phase of a card plan, in the order the phases happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanPhase {
    /// Open the recommended card
    Apply,
    /// Hit the sign-up bonus minimum spend
    MeetSpend,
    /// Spend the bonus points on the goal
    Redeem,
}

impl PlanPhase {
    /// Every plan runs through these phases, one per month
    pub const SEQUENCE: [PlanPhase; 3] = [Self::Apply, Self::MeetSpend, Self::Redeem];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::MeetSpend => "meet_spend",
            Self::Redeem => "redeem",
        }
    }

    /// Months after the current month that this phase lands in
    pub fn month_offset(&self) -> u32 {
        match self {
            Self::Apply => 0,
            Self::MeetSpend => 1,
            Self::Redeem => 2,
        }
    }
}

impl std::fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One month of a card plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub phase: PlanPhase,
    /// Month label, e.g. "October 2026"
    pub month: String,
    pub action: String,
    pub reason: String,
    pub requirements: String,
    /// Points earned (positive) or spent (negative) in this step
    pub estimated_points: i64,
}

/// Card plan for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub goal_id: String,
    pub goal_title: String,
    pub goal_category: GoalCategory,
    pub target_date: NaiveDate,
    pub est_cost_usd: f64,
    pub months_until_goal: u32,
    pub recommended_card: Option<CardOffer>,
    /// Empty, or exactly one step per [`PlanPhase`] in order
    pub timeline_steps: Vec<TimelineStep>,
}

impl Timeline {
    /// Whether there was enough runway to lay out a plan
    pub fn has_plan(&self) -> bool {
        !self.timeline_steps.is_empty()
    }

    /// Points left over once the plan completes
    pub fn net_points(&self) -> i64 {
        self.timeline_steps.iter().map(|s| s.estimated_points).sum()
    }
}
