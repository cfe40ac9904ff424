use std::sync::Arc;

use asista_core::Capability;
use asista_domain::{AssistanceProgram, ProgramDraft};

use crate::permission_gate::PermissionGate;
use crate::ports::{Confirmer, Notifier, ProgramGateway};
use crate::sidenav::SidenavCoordinator;

use super::failure_key;

/// Assistance-program view: list and CRUD over program definitions.
pub struct ProgramsScreen {
    programs: Arc<dyn ProgramGateway>,
    gate: PermissionGate,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    sidenav: SidenavCoordinator,
    /// Rows currently displayed.
    pub rows: Vec<AssistanceProgram>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

impl ProgramsScreen {
    /// Wires the screen to its gateway and interaction ports.
    #[must_use]
    pub fn new(
        programs: Arc<dyn ProgramGateway>,
        gate: PermissionGate,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
        sidenav: SidenavCoordinator,
    ) -> Self {
        Self {
            programs,
            gate,
            notifier,
            confirmer,
            sidenav,
            rows: Vec::new(),
            loading: false,
        }
    }

    /// Reloads the program list.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.programs.list().await {
            Ok(rows) => self.rows = rows,
            Err(error) => self
                .notifier
                .error(failure_key(&error, "programs.loadFailed")),
        }
        self.loading = false;
    }

    /// Closes the nav drawer ahead of the program dialog.
    pub fn open_editor(&self) {
        self.sidenav.request_close();
    }

    /// Creates a program definition.
    pub async fn create(&mut self, draft: &ProgramDraft) {
        if !self.gate.has(&Capability::new("PROGRAM", "CREATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.programs.create(draft).await {
            Ok(_) => {
                self.notifier.success("programs.created");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "programs.saveFailed")),
        }
    }

    /// Updates a program definition.
    pub async fn update(&mut self, id: i64, draft: &ProgramDraft) {
        if !self.gate.has(&Capability::new("PROGRAM", "UPDATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.programs.update(id, draft).await {
            Ok(_) => {
                self.notifier.success("programs.updated");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "programs.saveFailed")),
        }
    }

    /// Deletes a program after confirmation.
    pub async fn delete(&mut self, id: i64) {
        if !self.gate.has(&Capability::new("PROGRAM", "DELETE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        if !self.confirmer.confirm("programs.confirmDelete").await {
            return;
        }
        match self.programs.delete(id).await {
            Ok(()) => {
                self.notifier.success("programs.deleted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "programs.deleteFailed")),
        }
    }
}
