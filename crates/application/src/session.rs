use std::sync::Arc;

use asista_core::{ClientError, ClientResult};
use asista_domain::UserRecord;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::permission_gate::PermissionGate;
use crate::ports::{AuthGateway, UserGateway};
use crate::token_store::TokenStore;


/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No credential is stored.
    Anonymous,
    /// Authenticated, but the mandatory set-password step is pending.
    FirstLoginPending,
    /// Authenticated and fully usable.
    Active,
}

/// Orchestrates login, logout, the first-login gate, and the cached
/// current-user profile.
///
/// This is the only component with a stateful lifecycle, and the only
/// writer of the stored credential. It is an explicit value injected
/// into screens, not an ambient singleton.
pub struct SessionService {
    auth: Arc<dyn AuthGateway>,
    users: Arc<dyn UserGateway>,
    tokens: TokenStore,
    gate: PermissionGate,
    // One shared fetch per credential; cleared on login and logout.
    profile: Mutex<Option<UserRecord>>,
}

impl SessionService {
    /// Creates a session service over the auth and user gateways.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        users: Arc<dyn UserGateway>,
        tokens: TokenStore,
        gate: PermissionGate,
    ) -> Self {
        Self {
            auth,
            users,
            tokens,
            gate,
            profile: Mutex::new(None),
        }
    }

    /// Exchanges credentials for a bearer credential and stores it.
    ///
    /// A 401 from the backend surfaces as
    /// [`ClientError::InvalidCredentials`]; a 403 or any other failure
    /// propagates unchanged as a generic failure. No retry. On success
    /// the decode cache and profile cache are invalidated for the new
    /// subject, and the returned state tells the caller whether to
    /// route to the set-password flow or the dashboard.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<SessionState> {
        let credential = self.auth.login(username, password).await?;

        self.tokens.save_credential(&credential);
        self.gate.invalidate();
        self.profile.lock().await.take();

        info!(subject = username, "login succeeded");

        if self.is_first_login().await? {
            Ok(SessionState::FirstLoginPending)
        } else {
            Ok(SessionState::Active)
        }
    }

    /// Returns true when the current user still has to set a password.
    ///
    /// Derived from the profile's `updatedAt` sentinel on every call;
    /// nothing is cached beyond the profile fetch itself.
    pub async fn is_first_login(&self) -> ClientResult<bool> {
        Ok(self.current_user().await?.updated_at.is_none())
    }

    /// Fetches the profile of the current subject, reusing the cached
    /// copy when one exists for this credential.
    pub async fn current_user(&self) -> ClientResult<UserRecord> {
        let Some(subject) = self.gate.current_subject() else {
            return Err(ClientError::PermissionDenied);
        };

        // The lock is held across the fetch so concurrent callers
        // share one request instead of racing duplicates.
        let mut cached = self.profile.lock().await;
        if let Some(user) = cached.as_ref() {
            return Ok(user.clone());
        }

        let user = self
            .users
            .find_by_username(&subject)
            .await?
            .ok_or_else(|| ClientError::NotFound(format!("user '{subject}'")))?;

        *cached = Some(user.clone());
        Ok(user)
    }

    /// Sets the password of the current user, then terminates the
    /// session so the user re-authenticates with the new credentials.
    pub async fn set_password(&self, password: &str) -> ClientResult<()> {
        self.auth.set_password(password).await?;
        self.logout().await;
        Ok(())
    }

    /// Clears the local credential and caches, then best-effort
    /// notifies the backend.
    ///
    /// Local state is cleared first so a failing network call can
    /// never leave the UI stuck logged in.
    pub async fn logout(&self) {
        let credential = self.tokens.credential();

        self.tokens.clear_credential();
        self.gate.invalidate();
        self.profile.lock().await.take();

        if let Some(credential) = credential
            && let Err(error) = self.auth.logout(&credential).await
        {
            warn!(%error, "server-side session invalidation failed; local session already cleared");
        }
    }

    /// Derives the current state from the stored credential and the
    /// first-login probe.
    pub async fn state(&self) -> ClientResult<SessionState> {
        if !self.tokens.is_authenticated() {
            return Ok(SessionState::Anonymous);
        }
        if self.is_first_login().await? {
            return Ok(SessionState::FirstLoginPending);
        }
        Ok(SessionState::Active)
    }
}
