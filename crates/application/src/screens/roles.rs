use std::sync::Arc;

use asista_core::{Capability, ClientResult};
use asista_domain::Role;

use crate::permission_gate::PermissionGate;
use crate::ports::{Confirmer, Notifier, RoleGateway};
use crate::role_editor::RoleEditor;

use super::failure_key;

/// Role administration view: list, delete, and editor entry points.
pub struct RolesScreen {
    roles: Arc<dyn RoleGateway>,
    gate: PermissionGate,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    /// Rows currently displayed.
    pub rows: Vec<Role>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

impl RolesScreen {
    /// Wires the screen to its gateway and interaction ports.
    #[must_use]
    pub fn new(
        roles: Arc<dyn RoleGateway>,
        gate: PermissionGate,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            roles,
            gate,
            notifier,
            confirmer,
            rows: Vec::new(),
            loading: false,
        }
    }

    /// Reloads the role list.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.roles.list().await {
            Ok(rows) => self.rows = rows,
            Err(error) => self.notifier.error(failure_key(&error, "roles.loadFailed")),
        }
        self.loading = false;
    }

    /// Opens a create session in the role editor.
    #[must_use]
    pub fn new_role(&self) -> RoleEditor {
        RoleEditor::create(self.roles.clone())
    }

    /// Opens an edit session seeded from the stored role.
    pub async fn edit_role(&self, role_id: i64) -> ClientResult<RoleEditor> {
        RoleEditor::edit(self.roles.clone(), role_id).await
    }

    /// Deletes a role after confirmation.
    pub async fn delete(&mut self, id: i64) {
        if !self.gate.has(&Capability::new("ROLE", "DELETE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        if !self.confirmer.confirm("roles.confirmDelete").await {
            return;
        }
        match self.roles.delete(id).await {
            Ok(()) => {
                self.notifier.success("roles.deleted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "roles.deleteFailed")),
        }
    }
}
