use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::benefit::ApplicationStatus;

/// Date range and program filter shared by every dashboard chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    /// Inclusive start date.
    pub from: Option<NaiveDate>,
    /// Inclusive end date.
    pub to: Option<NaiveDate>,
    /// Restrict to a single program.
    pub program_id: Option<i64>,
}

impl DashboardFilter {
    /// Serializes the filter as query parameters; dates use `yyyy-MM-dd`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(program_id) = self.program_id {
            pairs.push(("programId", program_id.to_string()));
        }
        pairs
    }
}

/// One stage of the application funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    /// Application status the stage counts.
    pub status: ApplicationStatus,
    /// Number of applications in the stage.
    pub count: u64,
    /// Share of the total, in the range 0–100.
    pub percentage: f64,
}

/// Application funnel chart payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationFunnel {
    /// Total applications in the filtered window.
    pub total: u64,
    /// Per-status stages.
    pub items: Vec<FunnelStage>,
}

/// Beneficiary count for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityBeneficiaries {
    /// City name.
    pub city: String,
    /// Number of beneficiaries registered there.
    pub beneficiary_count: u64,
}

/// Beneficiaries-by-city chart payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiariesByCity {
    /// Per-city counts.
    pub items: Vec<CityBeneficiaries>,
}

/// Projected liability for one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramLiability {
    /// Program identifier.
    pub program_id: i64,
    /// Program display name.
    pub program_name: String,
    /// Approved applications counted toward the projection.
    pub approved_count: u64,
    /// Payout amount per approval.
    pub payout_amount: f64,
    /// Projected total liability.
    pub projected_liability: f64,
}

/// Financial liability chart payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialLiability {
    /// Total liability across programs.
    pub total_liability: f64,
    /// Per-program breakdown.
    pub by_program: Vec<ProgramLiability>,
}
