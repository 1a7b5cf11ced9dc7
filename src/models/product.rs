use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const DEFAULT_PAGE: usize = 0;
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub quantity_in_stock: u32,
    pub expiration_date: Option<NaiveDate>,
    pub creation_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
}

/// Client-supplied product fields. The id and both timestamps are always
/// assigned server-side, never taken from the payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub quantity_in_stock: u32,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub sort_by: SortKey,
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            in_stock: None,
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort_by: SortKey::default(),
        }
    }
}

/// Sort keys accepted by the listing endpoint. Policy: an unrecognized
/// `sortBy` value is not an error, it sorts by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Price,
    Stock,
    Expiration,
}

impl SortKey {
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "name" => SortKey::Name,
            "category" => SortKey::Category,
            "price" => SortKey::Price,
            "stock" => SortKey::Stock,
            "expiration" => SortKey::Expiration,
            _ => SortKey::Name,
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Price => a.unit_price.cmp(&b.unit_price),
            SortKey::Stock => a.quantity_in_stock.cmp(&b.quantity_in_stock),
            // Dated products rank before undated ones; two undated compare equal.
            SortKey::Expiration => match (a.expiration_date, b.expiration_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SortKey::from_param(&raw))
    }
}
