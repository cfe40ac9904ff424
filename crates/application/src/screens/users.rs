use std::sync::Arc;

use asista_core::Capability;
use asista_domain::{Role, User, UserDraft};

use crate::permission_gate::PermissionGate;
use crate::ports::{Confirmer, Notifier, RoleGateway, UserGateway};

use super::failure_key;

/// User administration view.
///
/// Loading is explicitly sequenced: the role list must be resident
/// before user records arrive, because records carry role names that
/// are joined against it.
pub struct UsersScreen {
    users: Arc<dyn UserGateway>,
    roles: Arc<dyn RoleGateway>,
    gate: PermissionGate,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    /// Users with resolved roles.
    pub rows: Vec<User>,
    /// Resident role list, also feeding the role-assignment picker.
    pub roles_list: Vec<Role>,
    /// True while a fetch is in flight.
    pub loading: bool,
}

impl UsersScreen {
    /// Wires the screen to its gateways and interaction ports.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserGateway>,
        roles: Arc<dyn RoleGateway>,
        gate: PermissionGate,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            users,
            roles,
            gate,
            notifier,
            confirmer,
            rows: Vec::new(),
            roles_list: Vec::new(),
            loading: false,
        }
    }

    /// Loads roles first, then users, joining role names to records.
    pub async fn load(&mut self) {
        self.loading = true;
        let result = async {
            let roles = self.roles.list().await?;
            let records = self.users.list().await?;
            Ok::<_, asista_core::ClientError>((roles, records))
        }
        .await;

        match result {
            Ok((roles, records)) => {
                self.rows = records
                    .into_iter()
                    .map(|record| record.resolve_roles(&roles))
                    .collect();
                self.roles_list = roles;
            }
            Err(error) => self.notifier.error(failure_key(&error, "users.loadFailed")),
        }
        self.loading = false;
    }

    /// Creates a user; the draft must carry the initial password.
    pub async fn create(&mut self, draft: &UserDraft) {
        if !self.gate.has(&Capability::new("USER", "CREATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        if draft.password.as_deref().is_none_or(str::is_empty) {
            // the backend would reject this anyway; fail fast locally
            self.notifier.error("users.saveFailed");
            return;
        }
        match self.users.create(draft).await {
            Ok(_) => {
                self.notifier.success("users.created");
                self.load().await;
            }
            Err(error) => self.notifier.error(failure_key(&error, "users.saveFailed")),
        }
    }

    /// Updates a user; the password field is ignored on update.
    pub async fn update(&mut self, id: i64, draft: &UserDraft) {
        if !self.gate.has(&Capability::new("USER", "UPDATE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        match self.users.update(id, draft).await {
            Ok(_) => {
                self.notifier.success("users.updated");
                self.load().await;
            }
            Err(error) => self.notifier.error(failure_key(&error, "users.saveFailed")),
        }
    }

    /// Deletes a user after confirmation.
    pub async fn delete(&mut self, id: i64) {
        if !self.gate.has(&Capability::new("USER", "DELETE")) {
            self.notifier.error("errors.permissionDenied");
            return;
        }
        if !self.confirmer.confirm("users.confirmDelete").await {
            return;
        }
        match self.users.delete(id).await {
            Ok(()) => {
                self.notifier.success("users.deleted");
                self.load().await;
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "users.deleteFailed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex as StdMutex};

    use async_trait::async_trait;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use asista_core::{ClientError, ClientResult};
    use asista_domain::{
        NewRole, Role, RoleChangeSet, RoleDetails, UserDraft, UserRecord, WireMatrix,
    };
    use tokio::sync::Mutex;

    use crate::permission_gate::PermissionGate;
    use crate::ports::{Confirmer, KeyValueStore, Notifier, RoleGateway, UserGateway};
    use crate::token_store::TokenStore;

    use super::UsersScreen;

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
    }

    impl Notifier for FakeNotifier {
        fn success(&self, _message: &str) {}

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

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct OrderedRoleGateway {
        log: CallLog,
    }

    #[async_trait]
    impl RoleGateway for OrderedRoleGateway {
        async fn list(&self) -> ClientResult<Vec<Role>> {
            self.log.lock().await.push("roles");
            Ok(vec![
                Role {
                    id: 1,
                    role_name: "ADMIN".to_owned(),
                },
                Role {
                    id: 2,
                    role_name: "REVIEWER".to_owned(),
                },
            ])
        }

        async fn details(&self, id: i64) -> ClientResult<RoleDetails> {
            Err(ClientError::NotFound(format!("role {id}")))
        }

        async fn permission_matrix(&self) -> ClientResult<WireMatrix> {
            Ok(WireMatrix::new())
        }

        async fn create(&self, _role: &NewRole) -> ClientResult<Role> {
            Err(ClientError::Unexpected("not used in tests".to_owned()))
        }

        async fn patch(&self, _id: i64, _change: &RoleChangeSet) -> ClientResult<()> {
            Ok(())
        }

        async fn delete(&self, _id: i64) -> ClientResult<()> {
            Ok(())
        }
    }

    struct OrderedUserGateway {
        log: CallLog,
        creates: Mutex<Vec<UserDraft>>,
    }

    fn record(roles: Vec<String>) -> UserRecord {
        UserRecord {
            id: 3,
            username: "clerk".to_owned(),
            full_name: "Clerk One".to_owned(),
            email: "clerk@example.org".to_owned(),
            status: "ACTIVE".to_owned(),
            updated_at: None,
            roles,
        }
    }

    #[async_trait]
    impl UserGateway for OrderedUserGateway {
        async fn list(&self) -> ClientResult<Vec<UserRecord>> {
            self.log.lock().await.push("users");
            Ok(vec![record(vec![
                "REVIEWER".to_owned(),
                "GHOST".to_owned(),
            ])])
        }

        async fn find_by_username(&self, _username: &str) -> ClientResult<Option<UserRecord>> {
            Ok(None)
        }

        async fn create(&self, draft: &UserDraft) -> ClientResult<UserRecord> {
            self.creates.lock().await.push(draft.clone());
            Ok(record(Vec::new()))
        }

        async fn update(&self, _id: i64, _draft: &UserDraft) -> ClientResult<UserRecord> {
            Ok(record(Vec::new()))
        }

        async fn delete(&self, _id: i64) -> ClientResult<()> {
            Ok(())
        }
    }

    fn gate_with_permissions(permissions: &[&str]) -> PermissionGate {
        let payload = serde_json::json!({ "sub": "admin", "permissions": permissions });
        let token = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(b"{}"),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        );
        let tokens = TokenStore::new(Arc::new(MapStore::default()));
        tokens.save_credential(&token);
        PermissionGate::new(tokens)
    }

    fn screen(log: CallLog, permissions: &[&str]) -> (UsersScreen, Arc<OrderedUserGateway>) {
        let users = Arc::new(OrderedUserGateway {
            log: log.clone(),
            creates: Mutex::new(Vec::new()),
        });
        let screen = UsersScreen::new(
            users.clone(),
            Arc::new(OrderedRoleGateway { log }),
            gate_with_permissions(permissions),
            Arc::new(FakeNotifier::default()),
            Arc::new(AlwaysConfirm),
        );
        (screen, users)
    }

    #[tokio::test]
    async fn roles_load_before_users_and_names_resolve() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let (mut screen, _users) = screen(log.clone(), &["USER:VIEW"]);

        screen.load().await;

        assert_eq!(*log.lock().await, vec!["roles", "users"]);
        assert_eq!(screen.rows.len(), 1);
        // GHOST has no matching role record and is dropped
        assert_eq!(screen.rows[0].roles.len(), 1);
        assert_eq!(screen.rows[0].roles[0].role_name, "REVIEWER");
    }

    #[tokio::test]
    async fn create_without_a_password_is_rejected_locally() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let (mut screen, users) = screen(log, &["USER:CREATE"]);

        let draft = UserDraft {
            username: "newbie".to_owned(),
            full_name: "New User".to_owned(),
            email: "new@example.org".to_owned(),
            password: None,
            role_ids: vec![1],
        };
        screen.create(&draft).await;

        assert!(users.creates.lock().await.is_empty());
    }

    #[tokio::test]
    async fn create_with_a_password_reaches_the_gateway() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let (mut screen, users) = screen(log, &["USER:CREATE"]);

        let draft = UserDraft {
            username: "newbie".to_owned(),
            full_name: "New User".to_owned(),
            email: "new@example.org".to_owned(),
            password: Some("initial-secret".to_owned()),
            role_ids: vec![1],
        };
        screen.create(&draft).await;

        assert_eq!(users.creates.lock().await.len(), 1);
    }
}
