use tokio::sync::watch;

/// Broadcasts close requests for the navigation drawer.
///
/// Screens ask the drawer to close before opening a dialog; the shell
/// observes the signal and collapses the drawer. Requests are counted
/// so a receiver that missed intermediate signals still sees the
/// latest one.
#[derive(Clone)]
pub struct SidenavCoordinator {
    sender: watch::Sender<u64>,
}

impl SidenavCoordinator {
    /// Creates a coordinator with no pending close requests.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Requests the drawer to close.
    pub fn request_close(&self) {
        self.sender.send_modify(|count| *count += 1);
    }

    /// Subscribes to close requests.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }
}

impl Default for SidenavCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SidenavCoordinator;

    #[tokio::test]
    async fn observers_see_each_close_request() {
        let coordinator = SidenavCoordinator::new();
        let mut observer = coordinator.subscribe();

        coordinator.request_close();

        assert!(observer.changed().await.is_ok());
        assert_eq!(*observer.borrow_and_update(), 1);
    }

    #[tokio::test]
    async fn late_subscribers_observe_the_latest_count() {
        let coordinator = SidenavCoordinator::new();

        coordinator.request_close();
        coordinator.request_close();

        let observer = coordinator.subscribe();
        assert_eq!(*observer.borrow(), 2);
    }
}
