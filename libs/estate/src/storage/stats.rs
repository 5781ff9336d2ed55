//! Dashboard aggregation over the current store contents

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Contact, DashboardStats, LocationCount, Property};

const TOP_LOCATIONS: usize = 5;

/// Compute the dashboard snapshot. Pure: nothing is cached or persisted,
/// every call reflects exactly the records passed in.
pub fn compute(
    properties: &[Property],
    contacts: &[Contact],
    total_visits: usize,
    total_interactions: usize,
    now: DateTime<Utc>,
) -> DashboardStats {
    let active_properties = properties.iter().filter(|p| p.is_active).count();

    // Month-of-year comparison only; the year is not part of the check.
    let new_contacts_this_month = contacts
        .iter()
        .filter(|c| c.created_at.month() == now.month())
        .count();

    DashboardStats {
        total_properties: properties.len(),
        total_contacts: contacts.len(),
        total_visits,
        active_properties,
        new_contacts_this_month,
        total_ai_interactions: total_interactions,
        average_property_price: average_price(properties),
        top_locations: top_locations(properties),
    }
}

/// Mean asking price across every stored listing, active or not.
fn average_price(properties: &[Property]) -> f64 {
    if properties.is_empty() {
        return 0.0;
    }
    let total: Decimal = properties.iter().map(|p| p.price).sum();
    total.to_f64().unwrap_or(0.0) / properties.len() as f64
}

/// Listings grouped by exact location, most common first. Ties keep
/// first-seen order and at most five groups survive.
fn top_locations(properties: &[Property]) -> Vec<LocationCount> {
    let mut counts: Vec<LocationCount> = Vec::new();
    for property in properties {
        match counts.iter_mut().find(|c| c.location == property.location) {
            Some(entry) => entry.count += 1,
            None => counts.push(LocationCount {
                location: property.location.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_LOCATIONS);
    counts
}
