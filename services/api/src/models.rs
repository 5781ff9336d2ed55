//! Wire-side query types for the API service

use estate::models::{InteractionFilters, InteractionType, PropertyFilters, SortKey};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Query parameters accepted by the listings endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesQuery {
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl PropertiesQuery {
    /// Convert into core filters. An absent `sortBy` falls back to
    /// `price-desc`; an unrecognized value disables sorting.
    pub fn into_filters(self) -> PropertyFilters {
        let sort_by = self.sort_by.as_deref().unwrap_or("price-desc");

        PropertyFilters {
            search: self.search,
            min_price: self.min_price,
            max_price: self.max_price,
            location: self.location,
            property_type: self.property_type,
            sort_by: SortKey::parse(sort_by),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Query parameters accepted by the featured-listings endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedQuery {
    pub limit: Option<usize>,
}

/// Query parameters accepted by the interaction analytics endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionsQuery {
    pub property_id: Option<i32>,
    pub interaction_type: Option<InteractionType>,
    pub session_id: Option<String>,
}

impl InteractionsQuery {
    pub fn into_filters(self) -> InteractionFilters {
        InteractionFilters {
            property_id: self.property_id,
            interaction_type: self.interaction_type,
            session_id: self.session_id,
        }
    }
}
