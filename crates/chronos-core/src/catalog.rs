//! Card catalog: ordered card offers with lookup by name
//!
//! The catalog is an immutable value passed into every computation. Its order
//! is significant: "best card" searches walk it front to back and the first
//! maximum wins.
//!
//! ## Configuration Resolution
//!
//! [`CardCatalog::load`] resolves the catalog in three layers:
//! 1. An explicit path from the caller (TOML, or JSON when the file ends in `.json`)
//! 2. The override in the data dir (~/.local/share/chronos/config/cards.toml)
//! 3. The embedded default (compiled into binary)

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::Category;

/// Embedded default catalog (compiled into binary)
const DEFAULT_CATALOG: &str = include_str!("../../../config/cards.toml");

/// Multiplier used when a card is unknown or a category is unlisted
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Point value used when a card is unknown (one cent)
pub const DEFAULT_POINT_VALUE_USD: f64 = 0.01;

/// A credit card offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCardOffer")]
pub struct CardOffer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Earn multiplier per category; unlisted categories earn 1x
    pub category_multipliers: BTreeMap<Category, f64>,
    /// Dollars per point
    pub point_value_usd: f64,
    pub annual_fee: f64,
    pub signup_bonus_points: u64,
    pub bonus_min_spend_usd: f64,
    pub bonus_period_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CardOffer {
    /// Earn multiplier for a category
    pub fn multiplier_for(&self, category: Category) -> f64 {
        self.category_multipliers
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Dollars earned per dollar spent in a category
    pub fn value_per_dollar(&self, category: Category) -> f64 {
        self.multiplier_for(category) * self.point_value_usd
    }

    /// Dollar value of the sign-up bonus
    pub fn signup_bonus_value_usd(&self) -> f64 {
        self.signup_bonus_points as f64 * self.point_value_usd
    }
}

/// Raw offer structure shared by the TOML and JSON formats
#[derive(Debug, Deserialize)]
struct RawCardOffer {
    name: String,
    issuer: Option<String>,
    #[serde(default)]
    category_multipliers: BTreeMap<String, f64>,
    point_value_usd: f64,
    #[serde(default)]
    annual_fee: f64,
    #[serde(default)]
    signup_bonus_points: u64,
    #[serde(default, alias = "bonus_min_spend")]
    bonus_min_spend_usd: f64,
    #[serde(default)]
    bonus_period_days: u32,
    link: Option<String>,
}

impl TryFrom<RawCardOffer> for CardOffer {
    type Error = String;

    fn try_from(raw: RawCardOffer) -> std::result::Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err("card name must not be empty".to_string());
        }
        if !(raw.point_value_usd.is_finite() && raw.point_value_usd > 0.0) {
            return Err(format!(
                "{}: point_value_usd must be positive, got {}",
                raw.name, raw.point_value_usd
            ));
        }

        let mut category_multipliers = BTreeMap::new();
        for (key, multiplier) in raw.category_multipliers {
            let category = match key.parse::<Category>() {
                Ok(c) => c,
                Err(_) => {
                    warn!(card = %raw.name, category = %key, "Skipping unknown multiplier category");
                    continue;
                }
            };
            if !(multiplier.is_finite() && multiplier >= 0.0) {
                return Err(format!(
                    "{}: multiplier for {} must be non-negative, got {}",
                    raw.name, key, multiplier
                ));
            }
            category_multipliers.insert(category, multiplier);
        }

        Ok(Self {
            name: raw.name,
            issuer: raw.issuer,
            category_multipliers,
            point_value_usd: raw.point_value_usd,
            annual_fee: raw.annual_fee,
            signup_bonus_points: raw.signup_bonus_points,
            bonus_min_spend_usd: raw.bonus_min_spend_usd,
            bonus_period_days: raw.bonus_period_days,
            link: raw.link,
        })
    }
}

/// Raw catalog file structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    cards: Vec<CardOffer>,
}

/// Ordered, read-only collection of card offers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CardCatalog {
    cards: Vec<CardOffer>,
}

impl CardCatalog {
    /// Build a catalog from offers in priority order
    ///
    /// Card names are the lookup key and must be unique.
    pub fn new(cards: Vec<CardOffer>) -> Result<Self> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.name.as_str()) {
                return Err(Error::InvalidData(format!(
                    "Duplicate card in catalog: {}",
                    card.name
                )));
            }
        }
        Ok(Self { cards })
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Load a catalog, preferring `path`, then the data-dir override, then the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_override(path, default_catalog_path().as_deref())
    }

    /// Same resolution as [`CardCatalog::load`] with an explicit override location
    ///
    /// A missing `path` is an error; a missing `override_path` falls through
    /// to the embedded default.
    pub fn load_with_override(
        path: Option<&Path>,
        override_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::NotFound(format!("Catalog file {}", path.display())));
            }
            return Self::from_file(path);
        }

        if let Some(override_path) = override_path.filter(|p| p.exists()) {
            debug!(path = %override_path.display(), "Using catalog override");
            return Self::from_file(override_path);
        }

        Self::embedded()
    }

    /// Read a catalog file; `.json` files hold an array of offers, anything else is TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(path = %path.display(), cards = catalog.len(), "Loaded card catalog");
        Ok(catalog)
    }

    /// Parse a TOML catalog with a `[[cards]]` array
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)?;
        Self::new(raw.cards)
    }

    /// Parse a JSON array of offers
    pub fn from_json_str(content: &str) -> Result<Self> {
        let cards: Vec<CardOffer> = serde_json::from_str(content)?;
        Self::new(cards)
    }

    /// Look up an offer by card name
    pub fn get(&self, name: &str) -> Option<&CardOffer> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Offers in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, CardOffer> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Multiplier for a card by name, 1x if the card is unknown
    pub fn multiplier_for(&self, name: &str, category: Category) -> f64 {
        self.get(name)
            .map(|c| c.multiplier_for(category))
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Point value for a card by name, one cent if the card is unknown
    pub fn point_value_for(&self, name: &str) -> f64 {
        self.get(name)
            .map(|c| c.point_value_usd)
            .unwrap_or(DEFAULT_POINT_VALUE_USD)
    }
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a CardOffer;
    type IntoIter = std::slice::Iter<'a, CardOffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Default catalog override path
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("chronos").join("config").join("cards.toml"))
}
