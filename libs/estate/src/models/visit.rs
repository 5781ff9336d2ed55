//! Visit model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduling status of a property visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

/// Visit entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i32,
    pub contact_id: i32,
    pub property_id: i32,
    pub scheduled_date: DateTime<Utc>,
    pub status: VisitStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New visit creation payload
///
/// Every visit starts as [`VisitStatus::Scheduled`], whatever the caller
/// sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisit {
    pub contact_id: i32,
    pub property_id: i32,
    pub scheduled_date: DateTime<Utc>,
    pub notes: Option<String>,
}
