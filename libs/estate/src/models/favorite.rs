//! Favorite model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Favorite entity
///
/// The semantic key is the (user, property) pair; the store permits
/// duplicates for a pair and removal takes out the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub property_id: i32,
    pub created_at: DateTime<Utc>,
}

/// New favorite creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub user_id: i32,
    pub property_id: i32,
}
