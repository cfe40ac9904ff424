use std::sync::Arc;

use asista_core::{ClientError, ClientResult};
use asista_domain::{
    NewRole, PermissionEntry, PermissionMatrix, RoleChangeSet, Selection,
};

use crate::ports::RoleGateway;

#[cfg(test)]
mod tests;

/// Role names shorter than this are rejected before any network call.
const ROLE_NAME_MIN_LENGTH: usize = 2;

/// Whether the editor creates a new role or amends an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// New role: save sends the full selected permission set.
    Create,
    /// Existing role: save sends only the four diff lists.
    Edit {
        /// Backend identifier of the role under edit.
        role_id: i64,
    },
}

/// Edit session for the permission-matrix role editor.
///
/// Holds the matrix display model plus the original/selected sets the
/// diff protocol is computed from. A failed save leaves every set
/// untouched so the user can retry without re-picking permissions.
pub struct RoleEditor {
    roles: Arc<dyn RoleGateway>,
    mode: EditorMode,
    loaded_role_name: Option<String>,
    /// Role name under edit.
    pub role_name: String,
    /// Permission matrix display model.
    pub matrix: PermissionMatrix,
    /// Selected versus original permission identifiers.
    pub permissions: Selection<i64>,
    /// Selected versus original usernames (edit mode only).
    pub users: Selection<String>,
}

impl RoleEditor {
    /// Starts a create session with an empty selection.
    #[must_use]
    pub fn create(roles: Arc<dyn RoleGateway>) -> Self {
        Self {
            roles,
            mode: EditorMode::Create,
            loaded_role_name: None,
            role_name: String::new(),
            matrix: PermissionMatrix::default(),
            permissions: Selection::default(),
            users: Selection::default(),
        }
    }

    /// Starts an edit session seeded from the stored role.
    pub async fn edit(roles: Arc<dyn RoleGateway>, role_id: i64) -> ClientResult<Self> {
        let details = roles.details(role_id).await?;

        Ok(Self {
            roles,
            mode: EditorMode::Edit { role_id },
            loaded_role_name: Some(details.role_name.clone()),
            role_name: details.role_name,
            matrix: PermissionMatrix::default(),
            permissions: Selection::seeded(details.permission_ids),
            users: Selection::seeded(details.usernames),
        })
    }

    /// Returns the session mode.
    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Loads the permission matrix for display.
    pub async fn load_matrix(&mut self) -> ClientResult<()> {
        let wire = self.roles.permission_matrix().await?;
        self.matrix = PermissionMatrix::from_wire(wire);
        Ok(())
    }

    /// Returns true when the cell's permission is selected.
    #[must_use]
    pub fn is_checked(&self, cell: Option<&PermissionEntry>) -> bool {
        cell.is_some_and(|permission| self.permissions.contains(&permission.id))
    }

    /// Toggles one cell; a null cell is a no-op.
    pub fn toggle(&mut self, cell: Option<&PermissionEntry>, checked: bool) {
        if let Some(permission) = cell {
            self.permissions.toggle(permission.id, checked);
        }
    }

    /// Toggles every non-null cell of a category row to one state.
    pub fn toggle_row(&mut self, category: &str, checked: bool) {
        let ids = self
            .matrix
            .row(category)
            .map(|row| row.permission_ids())
            .unwrap_or_default();
        for id in ids {
            self.permissions.toggle(id, checked);
        }
    }

    /// Deselects every permission.
    pub fn clear_all(&mut self) {
        self.permissions.clear();
    }

    /// Grants or revokes the role for a username (edit mode).
    pub fn toggle_user(&mut self, username: &str, checked: bool) {
        self.users.toggle(username.to_owned(), checked);
    }

    /// Persists the session.
    ///
    /// Create sends the full selected set; edit sends the delta change
    /// set only, never resending unchanged members. On failure the
    /// session state is retained for retry.
    pub async fn save(&mut self) -> ClientResult<()> {
        let name = self.role_name.trim();
        if name.chars().count() < ROLE_NAME_MIN_LENGTH {
            return Err(ClientError::field_validation(
                "roleName",
                format!("role name must have at least {ROLE_NAME_MIN_LENGTH} characters"),
            ));
        }

        match self.mode {
            EditorMode::Create => {
                self.roles
                    .create(&NewRole {
                        role_name: name.to_owned(),
                        permission_ids: self.permissions.selected(),
                    })
                    .await?;
            }
            EditorMode::Edit { role_id } => {
                let renamed = self.loaded_role_name.as_deref() != Some(name);
                let change = RoleChangeSet {
                    role_name: renamed.then(|| name.to_owned()),
                    add_users: self.users.added(),
                    remove_users: self.users.removed(),
                    add_permission_ids: self.permissions.added(),
                    remove_permission_ids: self.permissions.removed(),
                };
                self.roles.patch(role_id, &change).await?;
            }
        }

        Ok(())
    }
}
