//! Keyword-based categorization for merchants and goals
//!
//! The ingestion side normally tags transactions with a category. These
//! helpers fill the gap when it does not: the CLI applies
//! [`categorize_merchant`] to uncategorized transactions on request, and
//! [`Goal::category`](crate::models::Goal::category) uses
//! [`infer_goal_category`] when a goal carries no category.

use crate::models::{Category, GoalCategory};

const GROCERY_KEYWORDS: &[&str] = &[
    "whole foods",
    "safeway",
    "costco",
    "trader joe",
    "kroger",
    "aldi",
    "grocery",
    "groceries",
    "supermarket",
];

const DINING_KEYWORDS: &[&str] = &[
    "uber eats",
    "doordash",
    "grubhub",
    "starbucks",
    "chipotle",
    "mcdonald",
    "panera",
    "restaurant",
    "cafe",
    "coffee",
    "pizza",
];

const GAS_KEYWORDS: &[&str] = &[
    "shell",
    "chevron",
    "exxon",
    "mobil",
    "bp",
    "fuel",
    "gas station",
];

const TRAVEL_KEYWORDS: &[&str] = &[
    "uber",
    "lyft",
    "airline",
    "airlines",
    "air lines",
    "airways",
    "hotel",
    "hotels",
    "marriott",
    "hilton",
    "airbnb",
    "expedia",
];

const ENTERTAINMENT_KEYWORDS: &[&str] = &[
    "netflix", "spotify", "hulu", "cinema", "theater", "theatre",
];

const SHOPPING_KEYWORDS: &[&str] = &["amazon", "target", "walmart", "best buy", "ebay"];

/// Lowercased words joined by single spaces, padded so `" word "` matches whole words
fn normalize(text: &str) -> String {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!(" {} ", words.join(" "))
}

/// True if any keyword appears as a whole word or whole phrase
fn matches_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| normalized.contains(&format!(" {} ", k)))
}

/// Map a merchant name to a spending category
///
/// Matching is case-insensitive on whole words, so "BP" does not hit "bpi".
/// Returns `Other` when nothing matches.
pub fn categorize_merchant(merchant: &str) -> Category {
    let name = normalize(merchant);

    // Delivery brands come before travel so "Uber Eats" is dining
    if matches_any(&name, DINING_KEYWORDS) {
        Category::Dining
    } else if matches_any(&name, GROCERY_KEYWORDS) {
        Category::Groceries
    } else if matches_any(&name, GAS_KEYWORDS) {
        Category::Gas
    } else if matches_any(&name, TRAVEL_KEYWORDS) {
        Category::Travel
    } else if matches_any(&name, ENTERTAINMENT_KEYWORDS) {
        Category::Entertainment
    } else if matches_any(&name, SHOPPING_KEYWORDS) {
        Category::Shopping
    } else {
        Category::Other
    }
}

const GOAL_TRAVEL_KEYWORDS: &[&str] = &[
    "trip",
    "travel",
    "vacation",
    "flight",
    "flights",
    "hotel",
    "honeymoon",
    "holiday",
    "visit",
];

const GOAL_TECHNOLOGY_KEYWORDS: &[&str] = &[
    "laptop", "computer", "phone", "iphone", "tablet", "macbook", "camera", "console",
];

const GOAL_EVENT_KEYWORDS: &[&str] = &[
    "wedding",
    "party",
    "anniversary",
    "birthday",
    "concert",
    "graduation",
];

// A bare "course" is left out: "golf course" is not education
const GOAL_EDUCATION_KEYWORDS: &[&str] = &[
    "tuition",
    "school",
    "degree",
    "college",
    "university",
    "class",
    "classes",
    "courses",
    "online course",
    "bootcamp",
    "certification",
];

/// Infer a goal category from its title, matching whole words
pub fn infer_goal_category(title: &str) -> GoalCategory {
    let title = normalize(title);

    if matches_any(&title, GOAL_TRAVEL_KEYWORDS) {
        GoalCategory::Travel
    } else if matches_any(&title, GOAL_TECHNOLOGY_KEYWORDS) {
        GoalCategory::Technology
    } else if matches_any(&title, GOAL_EVENT_KEYWORDS) {
        GoalCategory::Events
    } else if matches_any(&title, GOAL_EDUCATION_KEYWORDS) {
        GoalCategory::Education
    } else {
        GoalCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_categories() {
        assert_eq!(categorize_merchant("Whole Foods Market"), Category::Groceries);
        assert_eq!(categorize_merchant("COSTCO WHOLESALE"), Category::Groceries);
        assert_eq!(categorize_merchant("Starbucks"), Category::Dining);
        assert_eq!(categorize_merchant("McDonald's"), Category::Dining);
        assert_eq!(categorize_merchant("Shell Gas Station"), Category::Gas);
        assert_eq!(categorize_merchant("BP #1234"), Category::Gas);
        assert_eq!(categorize_merchant("Uber Trip"), Category::Travel);
        assert_eq!(categorize_merchant("Netflix"), Category::Entertainment);
        assert_eq!(categorize_merchant("Amazon"), Category::Shopping);
        assert_eq!(categorize_merchant("Target"), Category::Shopping);
    }

    #[test]
    fn test_unknown_merchant_is_other() {
        assert_eq!(categorize_merchant("Acme Plumbing"), Category::Other);
        assert_eq!(categorize_merchant(""), Category::Other);
    }

    #[test]
    fn test_short_brand_needs_word_boundary() {
        assert_eq!(categorize_merchant("BPI Consulting"), Category::Other);
    }

    #[test]
    fn test_merchant_keyword_overlaps() {
        assert_eq!(categorize_merchant("Target Market"), Category::Shopping);
        assert_eq!(categorize_merchant("UBER EATS 8812"), Category::Dining);
        assert_eq!(categorize_merchant("Delta Air Lines"), Category::Travel);
        assert_eq!(categorize_merchant("Hotels.com"), Category::Travel);
        assert_eq!(categorize_merchant("TRADER JOE'S #552"), Category::Groceries);
    }

    #[test]
    fn test_goal_categories() {
        assert_eq!(infer_goal_category("Trip to Paris"), GoalCategory::Travel);
        assert_eq!(infer_goal_category("New Laptop"), GoalCategory::Technology);
        assert_eq!(infer_goal_category("Wedding Expenses"), GoalCategory::Events);
        assert_eq!(infer_goal_category("Spring tuition"), GoalCategory::Education);
        assert_eq!(infer_goal_category("Emergency fund"), GoalCategory::Other);
    }

    #[test]
    fn test_goal_keywords_need_whole_words() {
        assert_eq!(infer_goal_category("Classic car restoration"), GoalCategory::Other);
        assert_eq!(infer_goal_category("Golf course membership"), GoalCategory::Other);
        assert_eq!(infer_goal_category("Pottery classes"), GoalCategory::Education);
        assert_eq!(infer_goal_category("Phoenix visit"), GoalCategory::Travel);
    }
}
