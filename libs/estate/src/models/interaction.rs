//! AI interaction analytics events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of scripted AI affordance the visitor used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    AudioTour,
    DecorCustomization,
    Recommendation,
}

/// AI interaction entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInteraction {
    pub id: i32,
    /// Opaque browser-session correlation string supplied by the client.
    pub session_id: String,
    pub interaction_type: InteractionType,
    pub property_id: Option<i32>,
    /// Free-form event payload.
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// New AI interaction creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAiInteraction {
    pub session_id: String,
    pub interaction_type: InteractionType,
    pub property_id: Option<i32>,
    pub data: Option<serde_json::Value>,
}

/// Filter set for the interaction analytics listing; all supplied dimensions
/// are AND-ed.
#[derive(Debug, Clone, Default)]
pub struct InteractionFilters {
    pub property_id: Option<i32>,
    pub interaction_type: Option<InteractionType>,
    pub session_id: Option<String>,
}
