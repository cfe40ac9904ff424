use std::sync::Arc;

use asista_core::Capability;
use asista_domain::{ApplicationStatus, AssistanceProgram, BenefitApplication, SubmissionRequest};

use crate::permission_gate::PermissionGate;
use crate::ports::{ApplicationGateway, Confirmer, Notifier, ProgramGateway};

use super::failure_key;

/// Benefit-application view: submitted list, draft list, status moves,
/// and the draft-promotion flow.
pub struct ApplicationsScreen {
    applications: Arc<dyn ApplicationGateway>,
    programs: Arc<dyn ProgramGateway>,
    gate: PermissionGate,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    /// Submitted applications currently displayed.
    pub rows: Vec<BenefitApplication>,
    /// Draft applications currently displayed.
    pub drafts: Vec<BenefitApplication>,
    /// Active programs for the submission selector.
    pub active_programs: Vec<AssistanceProgram>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

impl ApplicationsScreen {
    /// Wires the screen to its gateways and interaction ports.
    #[must_use]
    pub fn new(
        applications: Arc<dyn ApplicationGateway>,
        programs: Arc<dyn ProgramGateway>,
        gate: PermissionGate,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            applications,
            programs,
            gate,
            notifier,
            confirmer,
            rows: Vec::new(),
            drafts: Vec::new(),
            active_programs: Vec::new(),
            loading: false,
        }
    }

    /// Reloads the submitted and draft lists plus the program selector.
    pub async fn load(&mut self) {
        self.loading = true;
        let result = async {
            let rows = self.applications.list().await?;
            let drafts = self.applications.list_drafts().await?;
            let active = self.programs.list_active().await?;
            Ok::<_, asista_core::ClientError>((rows, drafts, active))
        }
        .await;

        match result {
            Ok((rows, drafts, active)) => {
                self.rows = rows;
                self.drafts = drafts;
                self.active_programs = active;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.loadFailed")),
        }
        self.loading = false;
    }

    /// Narrows the submitted list to one citizen's applications.
    pub async fn filter_by_citizen(&mut self, citizen_id: i64) {
        match self.applications.list_by_citizen(citizen_id).await {
            Ok(rows) => self.rows = rows,
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.loadFailed")),
        }
    }

    /// Narrows the submitted list to one program's applications.
    pub async fn filter_by_program(&mut self, program_id: i64) {
        match self.applications.list_by_program(program_id).await {
            Ok(rows) => self.rows = rows,
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.loadFailed")),
        }
    }

    /// Submits a new application.
    pub async fn submit(&mut self, request: SubmissionRequest) {
        if !self.gate.has(&Capability::new("APPLICATION", "CREATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.applications.submit(request).await {
            Ok(_) => {
                self.notifier.success("applications.submitted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.saveFailed")),
        }
    }

    /// Saves an application draft; backend validation is bypassed.
    pub async fn save_draft(&mut self, request: SubmissionRequest) {
        if !self.gate.has(&Capability::new("APPLICATION", "CREATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.applications.save_draft(request).await {
            Ok(_) => {
                self.notifier.success("applications.draftSaved");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.saveFailed")),
        }
    }

    /// Promotes a draft: persists the latest edits, then moves it to
    /// `SUBMITTED`.
    pub async fn promote_draft(&mut self, id: i64, request: SubmissionRequest) {
        if !self.gate.has(&Capability::new("APPLICATION", "CREATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        let result = async {
            self.applications.update_draft(id, request).await?;
            self.applications
                .update_status(id, ApplicationStatus::Submitted)
                .await
        }
        .await;

        match result {
            Ok(_) => {
                self.notifier.success("applications.submitted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.saveFailed")),
        }
    }

    /// Moves an application to a new status.
    ///
    /// Approval decisions are blocked client-side without the
    /// `APPLICATION:APPROVE` capability; no request is issued.
    pub async fn update_status(&mut self, id: i64, status: ApplicationStatus) {
        if status.is_decision() && !self.gate.has(&Capability::new("APPLICATION", "APPROVE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.applications.update_status(id, status).await {
            Ok(_) => {
                self.notifier.success("applications.statusUpdated");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.statusFailed")),
        }
    }

    /// Deletes an application after confirmation.
    pub async fn delete(&mut self, id: i64) {
        if !self.gate.has(&Capability::new("APPLICATION", "DELETE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        if !self.confirmer.confirm("applications.confirmDelete").await {
            return;
        }
        match self.applications.delete(id).await {
            Ok(()) => {
                self.notifier.success("applications.deleted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "applications.deleteFailed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex as StdMutex};

    use async_trait::async_trait;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use asista_core::ClientResult;
    use asista_domain::{
        ApplicationStatus, AssistanceProgram, BenefitApplication, ProgramDraft, SubmissionRequest,
    };
    use tokio::sync::Mutex;

    use crate::permission_gate::PermissionGate;
    use crate::ports::{
        ApplicationGateway, Confirmer, KeyValueStore, Notifier, ProgramGateway,
    };
    use crate::token_store::TokenStore;

    use super::ApplicationsScreen;

    #[derive(Default)]
    struct MapStore {
        values: StdMutex<std::collections::HashMap<String, String>>,
    }

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.lock().ok()?.get(key).cloned()
        }

        fn put(&self, key: &str, value: &str) {
            if let Ok(mut values) = self.values.lock() {
                values.insert(key.to_owned(), value.to_owned());
            }
        }

        fn remove(&self, key: &str) {
            if let Ok(mut values) = self.values.lock() {
                values.remove(key);
            }
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        errors: StdMutex<Vec<String>>,
        successes: StdMutex<Vec<String>>,
    }

    impl Notifier for FakeNotifier {
        fn success(&self, message: &str) {
            if let Ok(mut successes) = self.successes.lock() {
                successes.push(message.to_owned());
            }
        }

        fn error(&self, message: &str) {
            if let Ok(mut errors) = self.errors.lock() {
                errors.push(message.to_owned());
            }
        }
    }

    struct AlwaysConfirm;

    #[async_trait]
    impl Confirmer for AlwaysConfirm {
        async fn confirm(&self, _message: &str) -> bool {
            true
        }
    }

    fn application(id: i64, status: ApplicationStatus) -> BenefitApplication {
        BenefitApplication {
            application_id: id,
            citizen_id: 1,
            program_id: 2,
            status,
            submission_date: "2026-08-01".to_owned(),
            created_at: None,
            updated_at: None,
        }
    }

    #[derive(Default)]
    struct FakeApplicationGateway {
        status_calls: Mutex<Vec<(i64, ApplicationStatus)>>,
        draft_updates: Mutex<Vec<(i64, SubmissionRequest)>>,
    }

    #[async_trait]
    impl ApplicationGateway for FakeApplicationGateway {
        async fn list(&self) -> ClientResult<Vec<BenefitApplication>> {
            Ok(vec![application(1, ApplicationStatus::Review)])
        }

        async fn list_drafts(&self) -> ClientResult<Vec<BenefitApplication>> {
            Ok(vec![application(2, ApplicationStatus::Draft)])
        }

        async fn list_by_citizen(&self, _citizen_id: i64) -> ClientResult<Vec<BenefitApplication>> {
            Ok(Vec::new())
        }

        async fn list_by_program(&self, _program_id: i64) -> ClientResult<Vec<BenefitApplication>> {
            Ok(Vec::new())
        }

        async fn submit(&self, request: SubmissionRequest) -> ClientResult<BenefitApplication> {
            Ok(BenefitApplication {
                application_id: 9,
                citizen_id: request.citizen_id,
                program_id: request.program_id,
                status: ApplicationStatus::Submitted,
                submission_date: "2026-08-30".to_owned(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn save_draft(&self, request: SubmissionRequest) -> ClientResult<BenefitApplication> {
            Ok(BenefitApplication {
                application_id: 10,
                citizen_id: request.citizen_id,
                program_id: request.program_id,
                status: ApplicationStatus::Draft,
                submission_date: "2026-08-30".to_owned(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_draft(
            &self,
            id: i64,
            request: SubmissionRequest,
        ) -> ClientResult<BenefitApplication> {
            self.draft_updates.lock().await.push((id, request));
            Ok(application(id, ApplicationStatus::Draft))
        }

        async fn update_status(
            &self,
            id: i64,
            status: ApplicationStatus,
        ) -> ClientResult<BenefitApplication> {
            self.status_calls.lock().await.push((id, status));
            Ok(application(id, status))
        }

        async fn delete(&self, _id: i64) -> ClientResult<()> {
            Ok(())
        }
    }

    struct FakeProgramGateway;

    #[async_trait]
    impl ProgramGateway for FakeProgramGateway {
        async fn list(&self) -> ClientResult<Vec<AssistanceProgram>> {
            Ok(Vec::new())
        }

        async fn list_active(&self) -> ClientResult<Vec<AssistanceProgram>> {
            Ok(Vec::new())
        }

        async fn get(&self, _id: i64) -> ClientResult<AssistanceProgram> {
            Err(asista_core::ClientError::NotFound("program".to_owned()))
        }

        async fn create(&self, _draft: &ProgramDraft) -> ClientResult<AssistanceProgram> {
            Err(asista_core::ClientError::NotFound("program".to_owned()))
        }

        async fn update(&self, _id: i64, _draft: &ProgramDraft) -> ClientResult<AssistanceProgram> {
            Err(asista_core::ClientError::NotFound("program".to_owned()))
        }

        async fn delete(&self, _id: i64) -> ClientResult<()> {
            Ok(())
        }
    }

    fn gate_with_permissions(permissions: &[&str]) -> PermissionGate {
        let payload = serde_json::json!({ "sub": "worker", "permissions": permissions });
        let token = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(b"{}"),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        );
        let tokens = TokenStore::new(Arc::new(MapStore::default()));
        tokens.save_credential(&token);
        PermissionGate::new(tokens)
    }

    fn screen(
        gateway: Arc<FakeApplicationGateway>,
        notifier: Arc<FakeNotifier>,
        permissions: &[&str],
    ) -> ApplicationsScreen {
        ApplicationsScreen::new(
            gateway,
            Arc::new(FakeProgramGateway),
            gate_with_permissions(permissions),
            notifier,
            Arc::new(AlwaysConfirm),
        )
    }

    #[tokio::test]
    async fn approval_without_the_capability_issues_no_request() {
        let gateway = Arc::new(FakeApplicationGateway::default());
        let notifier = Arc::new(FakeNotifier::default());
        let mut screen = screen(gateway.clone(), notifier.clone(), &["APPLICATION:UPDATE"]);

        screen.update_status(1, ApplicationStatus::Approved).await;

        assert!(gateway.status_calls.lock().await.is_empty());
        let Ok(errors) = notifier.errors.lock() else {
            panic!("notifier lock poisoned");
        };
        assert_eq!(
            errors.first().map(String::as_str),
            Some("errors.permissionDenied")
        );
    }

    #[tokio::test]
    async fn approval_with_the_capability_reaches_the_gateway() {
        let gateway = Arc::new(FakeApplicationGateway::default());
        let notifier = Arc::new(FakeNotifier::default());
        let mut screen = screen(gateway.clone(), notifier, &["APPLICATION:APPROVE"]);

        screen.update_status(1, ApplicationStatus::Approved).await;

        let calls = gateway.status_calls.lock().await;
        assert_eq!(calls.first(), Some(&(1, ApplicationStatus::Approved)));
    }

    #[tokio::test]
    async fn non_decision_moves_need_no_approval_capability() {
        let gateway = Arc::new(FakeApplicationGateway::default());
        let notifier = Arc::new(FakeNotifier::default());
        let mut screen = screen(gateway.clone(), notifier, &["APPLICATION:UPDATE"]);

        screen.update_status(1, ApplicationStatus::Review).await;

        let calls = gateway.status_calls.lock().await;
        assert_eq!(calls.first(), Some(&(1, ApplicationStatus::Review)));
    }

    #[tokio::test]
    async fn draft_promotion_updates_before_submitting() {
        let gateway = Arc::new(FakeApplicationGateway::default());
        let notifier = Arc::new(FakeNotifier::default());
        let mut screen = screen(gateway.clone(), notifier, &["APPLICATION:CREATE"]);

        let request = SubmissionRequest {
            citizen_id: 1,
            program_id: 2,
        };
        screen.promote_draft(5, request).await;

        assert_eq!(gateway.draft_updates.lock().await.first(), Some(&(5, request)));
        assert_eq!(
            gateway.status_calls.lock().await.first(),
            Some(&(5, ApplicationStatus::Submitted))
        );
    }

    #[tokio::test]
    async fn load_fills_rows_drafts_and_selector() {
        let gateway = Arc::new(FakeApplicationGateway::default());
        let notifier = Arc::new(FakeNotifier::default());
        let mut screen = screen(gateway, notifier, &["APPLICATION:VIEW"]);

        screen.load().await;

        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.drafts.len(), 1);
        assert!(!screen.loading);
    }
}
