//! Property model and the listing filter types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Color of the promotional badge shown on a listing card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Luxury,
    Gold,
    Gray,
}

/// Property entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Asking price, serialized as a decimal string ("4500000.00").
    pub price: Decimal,
    pub location: String,
    pub full_address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    /// Display magnitude with unit, e.g. "320m²".
    pub area: String,
    pub parking: i32,
    /// Open category set: "apartamento", "casa", "cobertura", ...
    pub property_type: String,
    pub year_built: Option<i32>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub badge: Option<String>,
    pub badge_color: Option<BadgeColor>,
    pub rating: Decimal,
    /// Soft-delete marker; inactive listings stay reachable by id.
    pub is_active: bool,
    pub agent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New property creation payload
///
/// Fields that carry a schema default are optional here; the store applies
/// the default at insert (parking 0, empty feature/image lists, rating 0.0,
/// active true).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub full_address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: String,
    pub parking: Option<i32>,
    pub property_type: String,
    pub year_built: Option<i32>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub badge: Option<String>,
    pub badge_color: Option<BadgeColor>,
    pub rating: Option<Decimal>,
    pub is_active: Option<bool>,
    pub agent_id: Option<i32>,
}

/// Property update payload
///
/// Merge semantics: only supplied fields overwrite, everything else keeps its
/// prior value. The id and creation timestamp are never updatable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub location: Option<String>,
    pub full_address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<String>,
    pub parking: Option<i32>,
    pub property_type: Option<String>,
    pub year_built: Option<i32>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub badge: Option<String>,
    pub badge_color: Option<BadgeColor>,
    pub rating: Option<Decimal>,
    pub is_active: Option<bool>,
    pub agent_id: Option<i32>,
}

/// Recognized sort orders for the listing query.
///
/// Anything other than these four is treated as "no sort applied".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Rating,
    Area,
}

impl SortKey {
    /// Parse a wire sort value; unrecognized values yield `None` (no sort).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::Rating),
            "area" => Some(SortKey::Area),
            _ => None,
        }
    }
}

/// Filter set for the property listing query.
///
/// All dimensions are optional and combine with logical AND; defaults for
/// pagination (limit 20, offset 0) are applied by the query engine.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilters {
    /// Case-insensitive substring matched against title OR location OR
    /// description.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Case-insensitive substring matched against the location field.
    pub location: Option<String>,
    /// Exact, case-sensitive category match.
    pub property_type: Option<String>,
    pub sort_by: Option<SortKey>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
