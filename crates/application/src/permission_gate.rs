use std::sync::{Arc, Mutex};

use asista_core::credential::decode_claims;
use asista_core::{Capability, Claims};

use crate::token_store::TokenStore;

/// Capability checks derived from the decoded bearer credential.
///
/// Purely a rendering and gating hint: the decode performs no
/// signature verification, so every gated action is still re-validated
/// by the backend, which answers 401/403 on violation.
#[derive(Clone)]
pub struct PermissionGate {
    tokens: TokenStore,
    cache: Arc<Mutex<Option<(String, Option<Claims>)>>>,
}

impl PermissionGate {
    /// Creates a gate reading from the given token store.
    #[must_use]
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            tokens,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns true when the current credential grants the capability.
    ///
    /// `false` without a credential, `false` when the claims cannot be
    /// decoded, and `false` when the permissions claim is absent.
    #[must_use]
    pub fn has(&self, capability: &Capability) -> bool {
        self.claims()
            .is_some_and(|claims| claims.grants(capability.as_str()))
    }

    /// Returns the `sub` claim of the current credential.
    #[must_use]
    pub fn current_subject(&self) -> Option<String> {
        self.claims()?.sub
    }

    /// Drops the decode cache; called on login and logout.
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = None;
        }
    }

    // At most one decode per credential value. The cache is keyed by
    // the raw credential so a re-login naturally invalidates it.
    fn claims(&self) -> Option<Claims> {
        let credential = self.tokens.credential()?;

        let Ok(mut cache) = self.cache.lock() else {
            return decode_claims(&credential);
        };

        if let Some((cached_credential, claims)) = cache.as_ref()
            && cached_credential == &credential
        {
            return claims.clone();
        }

        let claims = decode_claims(&credential);
        *cache = Some((credential, claims.clone()));
        claims
    }
}
