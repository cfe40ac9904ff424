use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

/// Quiescence window applied to search input before dispatching.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Dispatch permit handed out once a query survives the debounce.
///
/// The generation stamp lets callers discard a late response from a
/// superseded query: check [`SearchDebouncer::is_current`] again after
/// the network call resolves, before writing results into view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// Debounces rapid search input and deduplicates repeat queries.
///
/// Each submission bumps a generation counter; a submission only
/// dispatches when it is still the latest after the quiescence window
/// and differs from the previously dispatched query.
pub struct SearchDebouncer {
    window: Duration,
    generation: AtomicU64,
    last_dispatched: Mutex<Option<String>>,
}

impl SearchDebouncer {
    /// Creates a debouncer with a custom quiescence window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: AtomicU64::new(0),
            last_dispatched: Mutex::new(None),
        }
    }

    /// Waits out the quiescence window.
    ///
    /// Returns a ticket when this query is still the latest submission
    /// and is not a duplicate of the previous dispatch; `None` means
    /// the query was superseded or redundant and no network call
    /// should be made.
    pub async fn debounce(&self, query: &str) -> Option<SearchTicket> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        sleep(self.window).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            return None;
        }

        let mut last = self.last_dispatched.lock().ok()?;
        if last.as_deref() == Some(query) {
            return None;
        }
        *last = Some(query.to_owned());

        Some(SearchTicket { generation })
    }

    /// Returns true when no newer submission has been made since the
    /// ticket was issued.
    #[must_use]
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Forgets the dedup state, so the next query always dispatches.
    pub fn reset(&self) {
        if let Ok(mut last) = self.last_dispatched.lock() {
            *last = None;
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
