use std::fmt::{Display, Formatter};
use std::str::FromStr;

use asista_core::ClientError;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a benefit application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Saved but not yet submitted; validation is bypassed.
    Draft,
    /// Submitted and awaiting review.
    Submitted,
    /// Under review by a case worker.
    Review,
    /// Approved for benefit payout.
    Approved,
    /// Rejected after review.
    Rejected,
}

impl ApplicationStatus {
    /// Returns the stable wire value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Review => "REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns true when moving to this status is an approval decision,
    /// which requires the `APPLICATION:APPROVE` capability.
    #[must_use]
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "REVIEW" => Ok(Self::Review),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ClientError::validation(format!(
                "unknown application status '{value}'"
            ))),
        }
    }
}

/// Benefit application record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitApplication {
    /// Backend-assigned identifier.
    pub application_id: i64,
    /// Applicant citizen.
    pub citizen_id: i64,
    /// Target assistance program.
    pub program_id: i64,
    /// Current lifecycle status.
    pub status: ApplicationStatus,
    /// Submission date as an ISO-8601 date string.
    pub submission_date: String,
    /// Creation timestamp, when the backend reports one.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp, when the backend reports one.
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Citizen/program pair submitted for a new application or draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Applicant citizen.
    pub citizen_id: i64,
    /// Target assistance program.
    pub program_id: i64,
}
