//! Headless screen controllers, one per feature view.
//!
//! A controller owns the list state of its view and exposes a method
//! per user action. Every action follows the same control flow: check
//! the permission gate, call the gateway, reload on success, surface a
//! translated message key through the [`Notifier`](crate::ports::Notifier)
//! port on failure.

mod analytics;
mod applications;
mod citizens;
mod programs;
mod roles;
mod users;

pub use analytics::AnalyticsScreen;
pub use applications::ApplicationsScreen;
pub use citizens::CitizensScreen;
pub use programs::ProgramsScreen;
pub use roles::RolesScreen;
pub use users::UsersScreen;

use asista_core::ClientError;

/// Maps a backend failure to its message key, keeping the screen's own
/// fallback for anything without a dedicated copy line.
#[must_use]
pub fn failure_key(error: &ClientError, fallback: &'static str) -> &'static str {
    match error {
        ClientError::BackendUnavailable => "errors.backendNotAvailable",
        ClientError::Server(_) => "errors.serverError",
        ClientError::Transport(_) => "errors.connectionFailed",
        denied if denied.is_permission_denied() => "errors.permissionDenied",
        _ => fallback,
    }
}
