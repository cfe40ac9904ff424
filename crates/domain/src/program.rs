use serde::{Deserialize, Serialize};

/// Assistance-program definition. Eligibility enforcement (age and
/// income bounds) is a backend rule; the client only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistanceProgram {
    /// Backend-assigned identifier.
    pub program_id: i64,
    /// Display name of the program.
    pub program_name: String,
    /// Whether the program currently accepts applications.
    pub is_active: bool,
    /// Minimum applicant age, when the program restricts it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Maximum applicant age, when the program restricts it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Income ceiling for eligibility, when the program restricts it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_income_threshold: Option<f64>,
    /// Creation timestamp, when the backend reports one.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp, when the backend reports one.
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating an assistance program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDraft {
    /// Display name of the program.
    pub program_name: String,
    /// Whether the program currently accepts applications.
    pub is_active: bool,
    /// Minimum applicant age, when restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Maximum applicant age, when restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Income ceiling for eligibility, when restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_income_threshold: Option<f64>,
}
