//! User model and listing filters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Superadmin,
    Admin,
    Moderator,
    User,
}

impl UserRole {
    /// Wire spelling, as sent in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Superadmin => "SUPERADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::Moderator => "MODERATOR",
            UserRole::User => "USER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform user profile.
///
/// Immutable from the client's perspective except through the session
/// store's `update_user` after a profile update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: String,

    pub email: String,
    pub full_name: String,
    pub username: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,

    /// Assigned role
    pub role: UserRole,

    /// Active flag; deactivated users keep their records
    pub is_active: bool,

    pub avatar_url: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// Filters for the user listing endpoint.
///
/// Only the keys below are ever sent; absent fields are omitted from the
/// query string, never sent as empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilters {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub per_page: Option<u32>,

    /// Free-text search
    #[serde(default)]
    pub q: Option<String>,

    #[serde(default)]
    pub role: Option<UserRole>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UserFilters {
    /// Query pairs for the present fields.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(ref q) = self.q {
            query.push(("q", q.clone()));
        }
        if let Some(role) = self.role {
            query.push(("role", role.to_string()));
        }
        if let Some(is_active) = self.is_active {
            query.push(("is_active", is_active.to_string()));
        }
        query
    }
}
