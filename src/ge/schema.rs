use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// One letter bucket of a category listing: how many of the category's
/// items start with that letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub letter: String,
    pub items: u32
}

/// `category.json` record: the letter breakdown of one item category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    // Observed empty on every live category; kept raw
    #[serde(default)]
    pub types: Vec<serde_json::Value>,

    pub alpha: Vec<SearchResult>
}

impl Category {
    /// Amount of items on each category page
    pub const ITEMS_PER_PAGE: u32 = 12;
}

/// One page of the priced items within a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryPrices {
    pub total: u32,
    pub items: Vec<Item>
}

/// The service emits prices either as plain numbers or as abbreviated
/// strings like `"5.7m"` and `"+198.3k"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(i64),
    Formatted(String)
}

/// Price and movement direction of an item on one time scale
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceTrend {
    pub trend: String,
    pub price: Price
}

/// Percentual change of an item's price over 30, 90 or 180 days
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceChange {
    pub trend: String,
    pub change: String
}

/// Catalogue record of a single tradeable item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub icon: String,
    pub icon_large: String,
    pub id: u32,

    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(rename = "typeIcon")]
    pub type_icon: String,

    pub name: String,
    pub description: String,
    pub current: PriceTrend,
    pub today: PriceTrend,

    // The service quotes this flag: "true" / "false"
    pub members: String,

    // Only present on detail.json
    pub day30: Option<PriceChange>,
    pub day90: Option<PriceChange>,
    pub day180: Option<PriceChange>
}

impl Item {
    /// Whether this item is only tradeable by members
    #[inline]
    pub fn is_members(&self) -> bool {
        self.members == "true"
    }
}

/// `detail.json` wrapper around a single item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemPriceInformation {
    pub item: Item
}

/// Historic price graph of an item: daily and trend prices of the past
/// 180 days, keyed by epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphingData {
    pub daily: HashMap<String, i64>,
    pub average: HashMap<String, i64>
}

impl GraphingData {
    /// Daily prices keyed by date instead of the raw epoch string
    ///
    /// Keys that don't parse as epoch milliseconds are dropped
    pub fn daily_prices(&self) -> HashMap<DateTime<Utc>, i64> {
        Self::datetime_keys(&self.daily)
    }

    /// Trend prices keyed by date instead of the raw epoch string
    ///
    /// Keys that don't parse as epoch milliseconds are dropped
    pub fn average_prices(&self) -> HashMap<DateTime<Utc>, i64> {
        Self::datetime_keys(&self.average)
    }

    fn datetime_keys(prices: &HashMap<String, i64>) -> HashMap<DateTime<Utc>, i64> {
        let mut map = HashMap::new();

        for (timestamp, &price) in prices {
            if let Some(datetime) = timestamp.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis) {
                map.insert(datetime, price);
            }
        }

        map
    }
}
