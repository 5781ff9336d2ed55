//! Contact model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lead pipeline status of a contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Closed,
}

/// Contact entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: Option<String>,
    /// Open interest category set ("compra", "venda", "aluguel", ...).
    pub interest: String,
    pub message: Option<String>,
    pub property_id: Option<i32>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// New contact creation payload
///
/// The status field is deliberately absent: every contact starts as
/// [`ContactStatus::New`], whatever the caller sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: Option<String>,
    pub interest: String,
    pub message: Option<String>,
    pub property_id: Option<i32>,
}
