//! Catalog listing

use anyhow::Result;
use chronos_core::{CardCatalog, CardOffer, Category};

use super::usd;

pub fn cmd_catalog(catalog: &CardCatalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No cards in catalog.");
        return Ok(());
    }

    println!("💳 Card catalog ({} cards)", catalog.len());
    println!();

    for card in catalog {
        match &card.issuer {
            Some(issuer) => println!("   {} ({})", card.name, issuer),
            None => println!("   {}", card.name),
        }
        println!(
            "      {:.2}¢/point, annual fee {}",
            card.point_value_usd * 100.0,
            usd(card.annual_fee)
        );
        if card.signup_bonus_points > 0 {
            println!(
                "      Bonus: {} points ({}) after {} in {} days",
                card.signup_bonus_points,
                usd(card.signup_bonus_value_usd()),
                usd(card.bonus_min_spend_usd),
                card.bonus_period_days
            );
        }
        println!("      Earn: {}", earn_summary(card));
    }

    Ok(())
}

/// "travel 3x, dining 4x" for categories not earning 1x, else "1x everywhere"
pub fn earn_summary(card: &CardOffer) -> String {
    let boosted: Vec<String> = Category::all()
        .iter()
        .filter(|c| card.multiplier_for(**c) != 1.0)
        .map(|c| format!("{} {}x", c, card.multiplier_for(*c)))
        .collect();

    if boosted.is_empty() {
        "1x everywhere".to_string()
    } else {
        boosted.join(", ")
    }
}
