//! Goal timeline planning

use chrono::{Datelike, Local, Months, NaiveDate};
use tracing::debug;

use crate::catalog::{CardCatalog, CardOffer};
use crate::models::Goal;
use crate::spending::SpendingPattern;

use super::types::{PlanPhase, Timeline, TimelineStep};

/// Length of a planning month in days
pub const DAYS_PER_MONTH: i64 = 30;

/// Runway needed to apply, meet the spend and redeem
pub const MIN_PLAN_MONTHS: u32 = 3;

/// Whole 30-day blocks between `today` and `target`, rounded up
///
/// Same-day and past targets give 0.
pub fn months_until(target: NaiveDate, today: NaiveDate) -> u32 {
    let days = (target - today).num_days();
    if days <= 0 {
        return 0;
    }
    let months = (days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH;
    u32::try_from(months).unwrap_or(u32::MAX)
}

/// Dollar value of a card for a spending pattern: sign-up bonus plus ongoing earn
pub fn card_value_for_spending(card: &CardOffer, spending: &SpendingPattern) -> f64 {
    let ongoing: f64 = spending
        .iter()
        .map(|(category, amount)| amount * card.multiplier_for(category) * card.point_value_usd)
        .sum();
    card.signup_bonus_value_usd() + ongoing
}

/// The card worth the most for a spending pattern
///
/// First strict maximum in catalog order wins; `None` if no card is worth anything.
pub fn best_card_for_goal<'a>(
    spending: &SpendingPattern,
    catalog: &'a CardCatalog,
) -> Option<&'a CardOffer> {
    let mut best = None;
    let mut best_value = 0.0;

    for card in catalog {
        let value = card_value_for_spending(card, spending);
        if value > best_value {
            best_value = value;
            best = Some(card);
        }
    }

    best
}

/// Plan a goal as of today
pub fn generate_timeline(
    goal: &Goal,
    spending: &SpendingPattern,
    catalog: &CardCatalog,
) -> Timeline {
    generate_timeline_on(goal, spending, catalog, Local::now().date_naive())
}

/// Plan a goal as of `today`
pub fn generate_timeline_on(
    goal: &Goal,
    spending: &SpendingPattern,
    catalog: &CardCatalog,
    today: NaiveDate,
) -> Timeline {
    let months_until_goal = months_until(goal.target_date, today);
    let recommended = best_card_for_goal(spending, catalog);

    let timeline_steps = match recommended {
        Some(card) if months_until_goal >= MIN_PLAN_MONTHS => PlanPhase::SEQUENCE
            .iter()
            .map(|phase| plan_step(*phase, card, goal, today))
            .collect(),
        _ => vec![],
    };

    debug!(
        goal = %goal.id,
        months_until_goal,
        card = recommended.map(|c| c.name.as_str()).unwrap_or("none"),
        steps = timeline_steps.len(),
        "Timeline generated"
    );

    Timeline {
        goal_id: goal.id.clone(),
        goal_title: goal.title.clone(),
        goal_category: goal.category(),
        target_date: goal.target_date,
        est_cost_usd: goal.est_cost_usd,
        months_until_goal,
        recommended_card: recommended.cloned(),
        timeline_steps,
    }
}

/// Plan every goal as of today, optionally only the one with `goal_id`
pub fn generate_timelines(
    goals: &[Goal],
    spending: &SpendingPattern,
    catalog: &CardCatalog,
    goal_id: Option<&str>,
) -> Vec<Timeline> {
    generate_timelines_on(goals, spending, catalog, goal_id, Local::now().date_naive())
}

/// Plan every goal as of `today`, in input order
pub fn generate_timelines_on(
    goals: &[Goal],
    spending: &SpendingPattern,
    catalog: &CardCatalog,
    goal_id: Option<&str>,
    today: NaiveDate,
) -> Vec<Timeline> {
    goals
        .iter()
        .filter(|g| goal_id.map_or(true, |id| g.id == id))
        .map(|g| generate_timeline_on(g, spending, catalog, today))
        .collect()
}

fn plan_step(phase: PlanPhase, card: &CardOffer, goal: &Goal, today: NaiveDate) -> TimelineStep {
    let points = card.signup_bonus_points;
    let bonus_value = card.signup_bonus_value_usd().round() as i64;
    let month = month_label(today, phase.month_offset());

    match phase {
        PlanPhase::Apply => TimelineStep {
            phase,
            month,
            action: format!("Apply for {}", card.name),
            reason: format!(
                "{} point signup bonus worth ${}",
                group_thousands(points),
                bonus_value
            ),
            requirements: format!(
                "Spend ${} in {} days",
                group_thousands(card.bonus_min_spend_usd.round() as u64),
                card.bonus_period_days
            ),
            estimated_points: points_i64(points),
        },
        PlanPhase::MeetSpend => TimelineStep {
            phase,
            month,
            action: "Meet signup bonus requirements".to_string(),
            reason: "Your spending patterns will easily meet the requirement".to_string(),
            requirements: "Continue normal spending with new card".to_string(),
            estimated_points: 0,
        },
        PlanPhase::Redeem => TimelineStep {
            phase,
            month,
            action: format!("Use points for {}", goal.title),
            reason: format!(
                "Redeem {} points worth ${}",
                group_thousands(points),
                bonus_value
            ),
            requirements: "Transfer points to travel partners or redeem for statement credit"
                .to_string(),
            estimated_points: -points_i64(points),
        },
    }
}

fn points_i64(points: u64) -> i64 {
    i64::try_from(points).unwrap_or(i64::MAX)
}

/// "October 2026" style label for the month `offset` months after `today`
fn month_label(today: NaiveDate, offset: u32) -> String {
    today
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(offset)))
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// 80000 -> "80,000"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, GoalCategory};
    use crate::test_utils::{date, goal, offer};

    fn today() -> NaiveDate {
        date("2026-10-19")
    }

    fn spending() -> SpendingPattern {
        SpendingPattern::new()
            .with(Category::Dining, 450.0)
            .with(Category::Groceries, 800.0)
            .with(Category::Travel, 300.0)
    }

    #[test]
    fn test_months_until() {
        let today = today();
        assert_eq!(months_until(today, today), 0);
        assert_eq!(months_until(date("2026-01-01"), today), 0);
        assert_eq!(months_until(date("2026-10-20"), today), 1);
        assert_eq!(months_until(date("2026-11-18"), today), 1); // 30 days
        assert_eq!(months_until(date("2026-11-19"), today), 2); // 31 days
        assert_eq!(months_until(date("2027-05-15"), today), 7); // 208 days
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(80000), "80,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_month_label_wraps_year() {
        assert_eq!(month_label(date("2026-12-31"), 0), "December 2026");
        assert_eq!(month_label(date("2026-12-31"), 1), "January 2027");
        assert_eq!(month_label(date("2026-01-31"), 1), "February 2026");
    }

    #[test]
    fn test_best_card_for_goal_embedded_catalog() {
        let catalog = CardCatalog::embedded().unwrap();
        let card = best_card_for_goal(&spending(), &catalog).unwrap();

        // Amex: 1200 bonus + 18 travel + 36 dining + 64 groceries
        assert_eq!(card.name, "American Express Gold Card");
        assert!((card_value_for_spending(card, &spending()) - 1318.0).abs() < 1e-6);
    }

    #[test]
    fn test_best_card_for_goal_ties_go_first() {
        let catalog = CardCatalog::new(vec![
            offer("First", 0.01, &[(Category::Gas, 2.0)]),
            offer("Second", 0.02, &[(Category::Gas, 1.0)]),
        ])
        .unwrap();
        let spending = SpendingPattern::new().with(Category::Gas, 100.0);

        assert_eq!(best_card_for_goal(&spending, &catalog).unwrap().name, "First");
    }

    #[test]
    fn test_empty_catalog_has_no_card() {
        let timeline = generate_timeline_on(
            &goal("g1", "Trip to Paris", "2027-05-15"),
            &spending(),
            &CardCatalog::default(),
            today(),
        );

        assert!(timeline.recommended_card.is_none());
        assert!(timeline.timeline_steps.is_empty());
        assert_eq!(timeline.months_until_goal, 7);
    }

    #[test]
    fn test_three_step_plan() {
        let catalog = CardCatalog::embedded().unwrap();
        let timeline = generate_timeline_on(
            &goal("goal_1", "Trip to Paris", "2027-05-15"),
            &spending(),
            &catalog,
            today(),
        );

        assert_eq!(timeline.goal_id, "goal_1");
        assert_eq!(timeline.goal_category, GoalCategory::Travel);
        assert_eq!(
            timeline.recommended_card.as_ref().unwrap().name,
            "American Express Gold Card"
        );

        let steps = &timeline.timeline_steps;
        assert_eq!(steps.len(), 3);

        let phases: Vec<PlanPhase> = steps.iter().map(|s| s.phase).collect();
        assert_eq!(phases, PlanPhase::SEQUENCE.to_vec());

        assert_eq!(steps[0].month, "October 2026");
        assert_eq!(steps[0].action, "Apply for American Express Gold Card");
        assert_eq!(steps[0].reason, "60,000 point signup bonus worth $1200");
        assert_eq!(steps[0].requirements, "Spend $4,000 in 180 days");
        assert_eq!(steps[0].estimated_points, 60000);

        assert_eq!(steps[1].month, "November 2026");
        assert_eq!(steps[1].estimated_points, 0);

        assert_eq!(steps[2].month, "December 2026");
        assert_eq!(steps[2].action, "Use points for Trip to Paris");
        assert_eq!(steps[2].reason, "Redeem 60,000 points worth $1200");
        assert_eq!(steps[2].estimated_points, -60000);

        assert_eq!(timeline.net_points(), 0);
    }

    #[test]
    fn test_short_runway_has_no_steps() {
        let catalog = CardCatalog::embedded().unwrap();
        // 60 days is two planning months
        let timeline = generate_timeline_on(
            &goal("g1", "New Laptop", "2026-12-18"),
            &spending(),
            &catalog,
            today(),
        );

        assert_eq!(timeline.months_until_goal, 2);
        assert!(!timeline.has_plan());
        assert!(timeline.recommended_card.is_some());
    }

    #[test]
    fn test_past_goal() {
        let catalog = CardCatalog::embedded().unwrap();
        let timeline = generate_timeline_on(
            &goal("g1", "Wedding Expenses", "2025-08-20"),
            &spending(),
            &catalog,
            today(),
        );

        assert_eq!(timeline.months_until_goal, 0);
        assert!(timeline.timeline_steps.is_empty());
    }

    #[test]
    fn test_batch_filter_by_goal_id() {
        let catalog = CardCatalog::embedded().unwrap();
        let goals = vec![
            goal("goal_1", "Trip to Paris", "2027-05-15"),
            goal("goal_2", "New Laptop", "2027-03-01"),
        ];

        let all = generate_timelines_on(&goals, &spending(), &catalog, None, today());
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].goal_id, "goal_1");
        assert_eq!(all[1].goal_id, "goal_2");

        let one = generate_timelines_on(&goals, &spending(), &catalog, Some("goal_2"), today());
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].goal_title, "New Laptop");

        let none = generate_timelines_on(&goals, &spending(), &catalog, Some("nope"), today());
        assert!(none.is_empty());
    }
}
