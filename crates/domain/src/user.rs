use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Administrative user as rendered by the Users screen, with role
/// names already joined to role records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Login name; matches the credential `sub` claim.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Account status reported by the backend.
    pub status: String,
    /// Last update timestamp. `None` is the sentinel for "password not
    /// yet set": the user must complete the set-password flow first.
    pub updated_at: Option<DateTime<Utc>>,
    /// Roles granted to the user.
    pub roles: Vec<Role>,
}

impl User {
    /// Returns true when the account still needs its first password.
    #[must_use]
    pub fn needs_password_setup(&self) -> bool {
        self.updated_at.is_none()
    }
}

/// User record as the backend returns it: roles arrive as role names
/// and are resolved against the role list by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Account status reported by the backend.
    pub status: String,
    /// Last update timestamp; `None` until the first password is set.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Role names granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserRecord {
    /// Joins the record's role names against the resident role list.
    /// Names without a matching role are dropped from display.
    #[must_use]
    pub fn resolve_roles(self, roles: &[Role]) -> User {
        let resolved = self
            .roles
            .iter()
            .filter_map(|name| roles.iter().find(|role| &role.role_name == name).cloned())
            .collect();

        User {
            id: self.id,
            username: self.username,
            full_name: self.full_name,
            email: self.email,
            status: self.status,
            updated_at: self.updated_at,
            roles: resolved,
        }
    }
}

/// Payload for creating or updating a user. The password is required
/// on create only; updates leave it `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Initial password; only meaningful on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Role identifiers to grant.
    #[serde(default)]
    pub role_ids: Vec<i64>,
}
