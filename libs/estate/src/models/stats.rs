//! Dashboard summary shapes

use serde::{Deserialize, Serialize};

/// Occurrence count for one exact location string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Snapshot of the dashboard statistics, recomputed from scratch per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: usize,
    pub total_contacts: usize,
    pub total_visits: usize,
    pub active_properties: usize,
    pub new_contacts_this_month: usize,
    pub total_ai_interactions: usize,
    /// Arithmetic mean over every property regardless of the active flag;
    /// 0.0 when the store holds no properties.
    pub average_property_price: f64,
    /// Top five locations by listing count, ties in first-seen order.
    pub top_locations: Vec<LocationCount>,
}
