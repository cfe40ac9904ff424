use serde::{Deserialize, Serialize};

/// Citizen registry record. Identity and timestamps are backend-owned;
/// the client never invents identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citizen {
    /// Backend-assigned identifier.
    pub citizen_id: i64,
    /// Full legal name.
    pub full_name: String,
    /// National identifier, digits only.
    pub national_id: String,
    /// Date of birth as an ISO-8601 date string.
    pub date_of_birth: String,
    /// Registered address.
    pub address: String,
    /// Declared annual income. Sensitive; masked without
    /// `CITIZEN:VIEW_SENSITIVE`.
    pub annual_income: f64,
    /// Creation timestamp, when the backend reports one.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp, when the backend reports one.
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a citizen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitizenDraft {
    /// Full legal name.
    pub full_name: String,
    /// National identifier, digits only.
    pub national_id: String,
    /// Date of birth as an ISO-8601 date string.
    pub date_of_birth: String,
    /// Registered address.
    pub address: String,
    /// Declared annual income.
    pub annual_income: f64,
    /// Household to attach the citizen to, if any.
    pub household_id: Option<i64>,
}

/// Search dispatch for the citizen registry.
///
/// Digits-only input targets the national-id lookup; anything else is
/// a name search; blank input lists everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitizenQuery {
    /// Blank query: list all citizens.
    All,
    /// Digits-only query: exact national-id lookup.
    NationalId(String),
    /// Free-text query: name search.
    Name(String),
}

impl CitizenQuery {
    /// Classifies raw search input into its dispatch target.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::All;
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Self::NationalId(trimmed.to_owned());
        }
        Self::Name(trimmed.to_owned())
    }
}

/// Renders an income figure for display, masking it for viewers
/// without the sensitive-data capability.
#[must_use]
pub fn masked_income(annual_income: f64, can_view_sensitive: bool) -> String {
    if can_view_sensitive {
        format!("{annual_income:.2}")
    } else {
        "•••••".to_owned()
    }
}
