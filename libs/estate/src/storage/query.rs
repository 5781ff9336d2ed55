//! Listing engine: filter, sort, paginate
//!
//! Only active listings are considered. Filter dimensions combine with AND,
//! sorting is stable so store order decides ties, and the pagination window
//! clamps silently at the end of the data.

use std::cmp::Ordering;

use crate::models::{Property, PropertyFilters, SortKey};

const DEFAULT_PAGE_SIZE: usize = 20;

/// Run the listing query over `listings`, which must be in store order.
pub fn run(listings: Vec<Property>, filters: &PropertyFilters) -> Vec<Property> {
    let mut matches: Vec<Property> = listings.into_iter().filter(|p| p.is_active).collect();

    if let Some(term) = &filters.search {
        let needle = term.to_lowercase();
        matches.retain(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.location.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        });
    }

    if let Some(min_price) = filters.min_price {
        matches.retain(|p| p.price >= min_price);
    }

    if let Some(max_price) = filters.max_price {
        matches.retain(|p| p.price <= max_price);
    }

    if let Some(location) = &filters.location {
        let needle = location.to_lowercase();
        matches.retain(|p| p.location.to_lowercase().contains(&needle));
    }

    if let Some(property_type) = &filters.property_type {
        matches.retain(|p| p.property_type == *property_type);
    }

    sort(&mut matches, filters.sort_by);

    let offset = filters.offset.unwrap_or(0);
    let limit = filters.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    matches.into_iter().skip(offset).take(limit).collect()
}

fn sort(listings: &mut [Property], key: Option<SortKey>) {
    match key {
        Some(SortKey::PriceAsc) => listings.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortKey::PriceDesc) => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortKey::Rating) => listings.sort_by(|a, b| b.rating.cmp(&a.rating)),
        Some(SortKey::Area) => listings.sort_by(|a, b| {
            match (area_magnitude(&a.area), area_magnitude(&b.area)) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        None => {}
    }
}

/// Leading numeric magnitude of a display area such as `"320m²"`.
///
/// Areas are stored as free text, so a string without leading digits has no
/// magnitude and sorts after every listing that has one.
pub fn area_magnitude(area: &str) -> Option<u64> {
    let digits: String = area
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
