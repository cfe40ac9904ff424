use async_trait::async_trait;

/// Outcome surface for screen actions (the snackbar analogue).
pub trait Notifier: Send + Sync {
    /// Reports a successful action.
    fn success(&self, message: &str);
    /// Reports a failed action.
    fn error(&self, message: &str);
}

/// Single confirmation abstraction used by every destructive action,
/// replacing the ad hoc dialogs of earlier revisions.
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Asks the user to confirm; `false` aborts the action.
    async fn confirm(&self, message: &str) -> bool;
}
