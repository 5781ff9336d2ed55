//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role of a registered user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Agent,
    Admin,
}

/// User entity
///
/// Username and email are meant to be unique; the store never enforces this.
/// Callers look an existing record up before creating a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// New user creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
}
