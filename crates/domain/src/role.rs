use serde::{Deserialize, Serialize};

/// Named capability bundle as listed by the Roles screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Unique role name.
    pub role_name: String,
}

/// Full role detail used to seed an edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDetails {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Unique role name.
    pub role_name: String,
    /// Identifiers of the permissions currently in the bundle.
    #[serde(default)]
    pub permission_ids: Vec<i64>,
    /// Principals currently granted the role.
    #[serde(default)]
    pub usernames: Vec<String>,
}

/// Payload for creating a role: the full selected permission set,
/// since there is no prior state to diff against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    /// Unique role name.
    pub role_name: String,
    /// Selected permission identifiers.
    pub permission_ids: Vec<i64>,
}

/// Delta payload for editing a role. The backend contract is
/// PATCH-with-delta: unchanged members must never be resent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChangeSet {
    /// New role name, when renamed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    /// Usernames to grant the role to.
    pub add_users: Vec<String>,
    /// Usernames to revoke the role from.
    pub remove_users: Vec<String>,
    /// Permission identifiers to add to the bundle.
    pub add_permission_ids: Vec<i64>,
    /// Permission identifiers to remove from the bundle.
    pub remove_permission_ids: Vec<i64>,
}

impl RoleChangeSet {
    /// Returns true when the change set would not alter anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.role_name.is_none()
            && self.add_users.is_empty()
            && self.remove_users.is_empty()
            && self.add_permission_ids.is_empty()
            && self.remove_permission_ids.is_empty()
    }
}
