//! Builders for test fixtures

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::catalog::CardOffer;
use crate::models::{Category, Goal, Transaction};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Card with no sign-up bonus; unlisted categories earn 1x
pub fn offer(name: &str, point_value_usd: f64, multipliers: &[(Category, f64)]) -> CardOffer {
    CardOffer {
        name: name.to_string(),
        issuer: None,
        category_multipliers: multipliers.iter().copied().collect::<BTreeMap<_, _>>(),
        point_value_usd,
        annual_fee: 0.0,
        signup_bonus_points: 0,
        bonus_min_spend_usd: 0.0,
        bonus_period_days: 0,
        link: None,
    }
}

pub fn tx(id: &str, amount: f64, category: Category, card: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date("2026-09-15"),
        amount,
        merchant: format!("Merchant {}", id),
        category,
        card: card.to_string(),
    }
}

pub fn tx_on(id: &str, on: &str, amount: f64, category: Category) -> Transaction {
    Transaction {
        date: date(on),
        ..tx(id, amount, category, "Visa Rewards")
    }
}

pub fn goal(id: &str, title: &str, target: &str) -> Goal {
    Goal {
        id: id.to_string(),
        title: title.to_string(),
        target_date: date(target),
        est_cost_usd: 1000.0,
        category: None,
    }
}
