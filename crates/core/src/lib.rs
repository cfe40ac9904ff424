//! Shared primitives for all Rust crates in Asista.

#![forbid(unsafe_code)]

/// Bearer-credential decoding shared across services.
pub mod credential;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use credential::Claims;

/// Result type used across Asista crates.
pub type ClientResult<T> = Result<T, ClientError>;

/// A capability token of the form `RESOURCE:ACTION`.
///
/// Flat set membership only: no hierarchy, no wildcards. Capability
/// checks are a rendering hint; the backend re-validates every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability(String);

impl Capability {
    /// Builds a capability from its resource and action parts.
    #[must_use]
    pub fn new(resource: &str, action: &str) -> Self {
        Self(format!("{resource}:{action}"))
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Capability {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Backend call failure categories surfaced to screens.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached at the transport level.
    #[error("cannot reach backend: {0}")]
    Transport(String),

    /// The backend answered with HTML where JSON was expected, which
    /// signals a misconfigured or absent backend behind a web server.
    #[error("backend unavailable: received HTML instead of JSON")]
    BackendUnavailable,

    /// The backend reported an internal failure (5xx).
    #[error("server error (status {0})")]
    Server(u16),

    /// The backend refused the action for the authenticated caller (403).
    #[error("permission denied")]
    PermissionDenied,

    /// The backend did not accept the presented credentials (401),
    /// whether login credentials or a stale stored bearer credential.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The request payload failed backend validation.
    #[error("validation error: {message}")]
    Validation {
        /// Form field the failure applies to, when the backend names one.
        field: Option<String>,
        /// Human-readable validation message.
        message: String,
    },

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any response the client could not interpret.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// Creates a validation error without a field reference.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error tied to a specific form field.
    #[must_use]
    pub fn field_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns true when the error denotes a denied or unauthenticated call.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::{Capability, ClientError};

    #[test]
    fn capability_joins_resource_and_action() {
        let capability = Capability::new("CITIZEN", "VIEW_SENSITIVE");
        assert_eq!(capability.as_str(), "CITIZEN:VIEW_SENSITIVE");
        assert_eq!(capability.to_string(), "CITIZEN:VIEW_SENSITIVE");
    }

    #[test]
    fn both_auth_failures_read_as_permission_denied() {
        assert!(ClientError::PermissionDenied.is_permission_denied());
        assert!(ClientError::InvalidCredentials.is_permission_denied());
        assert!(!ClientError::BackendUnavailable.is_permission_denied());
        assert!(!ClientError::NotFound("role 4".to_owned()).is_permission_denied());
    }

    #[test]
    fn field_validation_carries_field_name() {
        let error = ClientError::field_validation("roleName", "too short");
        let ClientError::Validation { field, .. } = error else {
            panic!("expected validation error");
        };
        assert_eq!(field.as_deref(), Some("roleName"));
    }
}
