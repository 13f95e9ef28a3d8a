//! Domain models for Chronos

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::categorize::infer_goal_category;

/// Spending category of a transaction
///
/// Deserialization is lenient: unknown names become [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Travel,
    Dining,
    Groceries,
    Gas,
    Shopping,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Dining => "dining",
            Self::Groceries => "groceries",
            Self::Gas => "gas",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [Category] {
        &[
            Self::Travel,
            Self::Dining,
            Self::Groceries,
            Self::Gas,
            Self::Shopping,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Parse a category name, falling back to `Other` for anything unrecognized
    pub fn from_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "travel" => Ok(Self::Travel),
            "dining" => Ok(Self::Dining),
            "groceries" => Ok(Self::Groceries),
            "gas" => Ok(Self::Gas),
            "shopping" => Ok(Self::Shopping),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_lenient(&s))
    }
}

/// Missing or null categories deserialize as `Other`
fn lenient_category<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Category, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| Category::from_lenient(&s)).unwrap_or_default())
}

/// A categorized card transaction, as produced by the ingestion side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, alias = "tx_id")]
    pub id: String,
    pub date: NaiveDate,
    /// Positive amount in dollars
    pub amount: f64,
    #[serde(default)]
    pub merchant: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
    /// Name of the card actually used
    pub card: String,
}

/// Kind of goal a user is saving toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Travel,
    Technology,
    Events,
    Education,
    #[default]
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Technology => "technology",
            Self::Events => "events",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "travel" => Ok(Self::Travel),
            "technology" | "tech" => Ok(Self::Technology),
            "events" | "event" => Ok(Self::Events),
            "education" => Ok(Self::Education),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown goal category: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for GoalCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

/// A financial goal such as a trip or a large purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(alias = "goal_id")]
    pub id: String,
    pub title: String,
    pub target_date: NaiveDate,
    pub est_cost_usd: f64,
    /// Inferred from the title when absent
    #[serde(default)]
    pub category: Option<GoalCategory>,
}

impl Goal {
    /// The stated category, or one inferred from the title
    pub fn category(&self) -> GoalCategory {
        self.category.unwrap_or_else(|| infer_goal_category(&self.title))
    }
}
