use std::sync::Arc;

use asista_core::Capability;
use asista_domain::{Citizen, CitizenDraft, CitizenQuery, masked_income};

use crate::permission_gate::PermissionGate;
use crate::ports::{CitizenGateway, Confirmer, HouseholdGateway, Notifier};
use crate::search::SearchDebouncer;
use crate::sidenav::SidenavCoordinator;

use super::failure_key;

/// Citizen registry view: list, debounced search, CRUD, household
/// attachment, and income masking.
pub struct CitizensScreen {
    citizens: Arc<dyn CitizenGateway>,
    households: Arc<dyn HouseholdGateway>,
    gate: PermissionGate,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    sidenav: SidenavCoordinator,
    debouncer: SearchDebouncer,
    /// Rows currently displayed.
    pub rows: Vec<Citizen>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

impl CitizensScreen {
    /// Wires the screen to its gateways and interaction ports.
    #[must_use]
    pub fn new(
        citizens: Arc<dyn CitizenGateway>,
        households: Arc<dyn HouseholdGateway>,
        gate: PermissionGate,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
        sidenav: SidenavCoordinator,
    ) -> Self {
        Self {
            citizens,
            households,
            gate,
            notifier,
            confirmer,
            sidenav,
            debouncer: SearchDebouncer::default(),
            rows: Vec::new(),
            loading: false,
        }
    }

    /// Reloads the full registry list.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.citizens.list().await {
            Ok(rows) => self.rows = rows,
            Err(error) => self
                .notifier
                .error(failure_key(&error, "citizens.loadFailed")),
        }
        self.loading = false;
    }

    /// Runs a debounced registry search.
    ///
    /// Rapid keystrokes collapse into one request; a response that
    /// arrives after a newer query was submitted is discarded instead
    /// of overwriting fresher rows.
    pub async fn search(&mut self, input: &str) {
        let Some(ticket) = self.debouncer.debounce(input).await else {
            return;
        };

        let result = self.citizens.search(&CitizenQuery::classify(input)).await;
        if !self.debouncer.is_current(ticket) {
            return;
        }

        match result {
            Ok(rows) => self.rows = rows,
            Err(error) => self
                .notifier
                .error(failure_key(&error, "citizens.searchFailed")),
        }
    }

    /// Whether the viewer may read unmasked income figures.
    #[must_use]
    pub fn can_view_sensitive(&self) -> bool {
        self.gate.has(&Capability::new("CITIZEN", "VIEW_SENSITIVE"))
    }

    /// Income cell text for one row, masked without the sensitive-data
    /// capability.
    #[must_use]
    pub fn income_label(&self, citizen: &Citizen) -> String {
        masked_income(citizen.annual_income, self.can_view_sensitive())
    }

    /// Closes the nav drawer ahead of the citizen dialog.
    pub fn open_editor(&self) {
        self.sidenav.request_close();
    }

    /// Registers a new citizen.
    pub async fn create(&mut self, draft: &CitizenDraft) {
        if !self.gate.has(&Capability::new("CITIZEN", "CREATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.citizens.create(draft).await {
            Ok(_) => {
                self.notifier.success("citizens.created");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "citizens.saveFailed")),
        }
    }

    /// Updates an existing citizen.
    pub async fn update(&mut self, id: i64, draft: &CitizenDraft) {
        if !self.gate.has(&Capability::new("CITIZEN", "UPDATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.citizens.update(id, draft).await {
            Ok(_) => {
                self.notifier.success("citizens.updated");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "citizens.saveFailed")),
        }
    }

    /// Deletes a citizen after confirmation.
    pub async fn delete(&mut self, id: i64) {
        if !self.gate.has(&Capability::new("CITIZEN", "DELETE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        if !self.confirmer.confirm("citizens.confirmDelete").await {
            return;
        }
        match self.citizens.delete(id).await {
            Ok(()) => {
                self.notifier.success("citizens.deleted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "citizens.deleteFailed")),
        }
    }

    /// Creates a household on demand and attaches the citizen to it.
    pub async fn create_household_for(&mut self, citizen_id: i64) {
        let result = async {
            let household = self.households.create().await?;
            self.households.add_citizen(household.id, citizen_id).await
        }
        .await;

        match result {
            Ok(()) => self.notifier.success("citizens.householdCreated"),
            Err(error) => self
                .notifier
                .error(failure_key(&error, "citizens.householdFailed")),
        }
    }
}
