//! Domain records and pure logic for the Asista client.

#![forbid(unsafe_code)]

mod benefit;
mod citizen;
mod household;
mod metrics;
mod permission;
mod program;
mod role;
mod selection;
mod user;

pub use benefit::{ApplicationStatus, BenefitApplication, SubmissionRequest};
pub use citizen::{Citizen, CitizenDraft, CitizenQuery, masked_income};
pub use household::Household;
pub use metrics::{
    ApplicationFunnel, BeneficiariesByCity, CityBeneficiaries, DashboardFilter, FinancialLiability,
    FunnelStage, ProgramLiability,
};
pub use permission::{
    MatrixRow, PermissionAction, PermissionEntry, PermissionMatrix, WireMatrix,
    WireMatrixCategory,
};
pub use program::{AssistanceProgram, ProgramDraft};
pub use role::{NewRole, Role, RoleChangeSet, RoleDetails};
pub use selection::Selection;
pub use user::{User, UserDraft, UserRecord};
