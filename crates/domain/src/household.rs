use serde::{Deserialize, Serialize};

/// Grouping key over citizens used to aggregate household income.
/// Created on demand when a citizen is attached to a new household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Backend-assigned identifier.
    pub id: i64,
}
