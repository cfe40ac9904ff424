use async_trait::async_trait;
use asista_core::ClientResult;
use asista_domain::{
    ApplicationFunnel, ApplicationStatus, AssistanceProgram, BeneficiariesByCity,
    BenefitApplication, Citizen, CitizenDraft, CitizenQuery, DashboardFilter, FinancialLiability,
    Household, NewRole, ProgramDraft, Role, RoleChangeSet, RoleDetails, SubmissionRequest,
    UserDraft, UserRecord, WireMatrix,
};

/// Credential exchange and session endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a bearer credential string.
    async fn login(&self, username: &str, password: &str) -> ClientResult<String>;

    /// Notifies the backend to invalidate its session state.
    ///
    /// The caller passes the credential explicitly because the local
    /// store is cleared before this best-effort call is made.
    async fn logout(&self, credential: &str) -> ClientResult<()>;

    /// Sets the password of the authenticated user.
    async fn set_password(&self, password: &str) -> ClientResult<()>;
}

/// Citizen registry resource.
#[async_trait]
pub trait CitizenGateway: Send + Sync {
    /// Lists all citizens.
    async fn list(&self) -> ClientResult<Vec<Citizen>>;
    /// Fetches one citizen by id.
    async fn get(&self, id: i64) -> ClientResult<Citizen>;
    /// Runs a classified registry search.
    async fn search(&self, query: &CitizenQuery) -> ClientResult<Vec<Citizen>>;
    /// Creates a citizen.
    async fn create(&self, draft: &CitizenDraft) -> ClientResult<Citizen>;
    /// Updates a citizen.
    async fn update(&self, id: i64, draft: &CitizenDraft) -> ClientResult<Citizen>;
    /// Deletes a citizen.
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Assistance-program resource.
#[async_trait]
pub trait ProgramGateway: Send + Sync {
    /// Lists all programs.
    async fn list(&self) -> ClientResult<Vec<AssistanceProgram>>;
    /// Lists programs currently accepting applications.
    async fn list_active(&self) -> ClientResult<Vec<AssistanceProgram>>;
    /// Fetches one program by id.
    async fn get(&self, id: i64) -> ClientResult<AssistanceProgram>;
    /// Creates a program.
    async fn create(&self, draft: &ProgramDraft) -> ClientResult<AssistanceProgram>;
    /// Updates a program.
    async fn update(&self, id: i64, draft: &ProgramDraft) -> ClientResult<AssistanceProgram>;
    /// Deletes a program.
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Benefit-application resource.
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    /// Lists submitted applications.
    async fn list(&self) -> ClientResult<Vec<BenefitApplication>>;
    /// Lists draft applications.
    async fn list_drafts(&self) -> ClientResult<Vec<BenefitApplication>>;
    /// Lists applications filed by one citizen.
    async fn list_by_citizen(&self, citizen_id: i64) -> ClientResult<Vec<BenefitApplication>>;
    /// Lists applications filed against one program.
    async fn list_by_program(&self, program_id: i64) -> ClientResult<Vec<BenefitApplication>>;
    /// Submits a new application.
    async fn submit(&self, request: SubmissionRequest) -> ClientResult<BenefitApplication>;
    /// Saves an application draft; backend validation is bypassed.
    async fn save_draft(&self, request: SubmissionRequest) -> ClientResult<BenefitApplication>;
    /// Updates an existing draft.
    async fn update_draft(
        &self,
        id: i64,
        request: SubmissionRequest,
    ) -> ClientResult<BenefitApplication>;
    /// Moves an application to a new status.
    async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> ClientResult<BenefitApplication>;
    /// Deletes an application.
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Role administration resource.
#[async_trait]
pub trait RoleGateway: Send + Sync {
    /// Lists all roles.
    async fn list(&self) -> ClientResult<Vec<Role>>;
    /// Fetches the full detail of one role.
    async fn details(&self, id: i64) -> ClientResult<RoleDetails>;
    /// Fetches the permission matrix keyed by category.
    async fn permission_matrix(&self) -> ClientResult<WireMatrix>;
    /// Creates a role from the full selected permission set.
    async fn create(&self, role: &NewRole) -> ClientResult<Role>;
    /// Applies a delta change set to a role.
    async fn patch(&self, id: i64, change: &RoleChangeSet) -> ClientResult<()>;
    /// Deletes a role.
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Administrative-user resource.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Lists all users.
    async fn list(&self) -> ClientResult<Vec<UserRecord>>;
    /// Looks a user up by login name.
    async fn find_by_username(&self, username: &str) -> ClientResult<Option<UserRecord>>;
    /// Creates a user.
    async fn create(&self, draft: &UserDraft) -> ClientResult<UserRecord>;
    /// Updates a user.
    async fn update(&self, id: i64, draft: &UserDraft) -> ClientResult<UserRecord>;
    /// Deletes a user.
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Household grouping resource.
#[async_trait]
pub trait HouseholdGateway: Send + Sync {
    /// Creates an empty household on demand.
    async fn create(&self) -> ClientResult<Household>;
    /// Attaches a citizen to a household.
    async fn add_citizen(&self, household_id: i64, citizen_id: i64) -> ClientResult<()>;
}

/// Analytics dashboard resource.
#[async_trait]
pub trait MetricsGateway: Send + Sync {
    /// Fetches the application funnel for the filtered window.
    async fn application_funnel(&self, filter: &DashboardFilter)
    -> ClientResult<ApplicationFunnel>;
    /// Fetches beneficiary counts grouped by city.
    async fn beneficiaries_by_city(
        &self,
        filter: &DashboardFilter,
    ) -> ClientResult<BeneficiariesByCity>;
    /// Fetches the projected financial liability breakdown.
    async fn financial_liability(
        &self,
        filter: &DashboardFilter,
    ) -> ClientResult<FinancialLiability>;
}
