use async_trait::async_trait;
use asista_application::ports::ApplicationGateway;
use asista_core::ClientResult;
use asista_domain::{ApplicationStatus, BenefitApplication, SubmissionRequest};
use reqwest::Method;

use crate::rest_client::RestClient;

/// Benefit-application endpoints over REST.
///
/// Submissions and drafts share one POST endpoint differentiated by
/// the `isDraft` query flag; status moves ride on the query string
/// rather than a body.
pub struct HttpApplicationGateway {
    client: RestClient,
}

impl HttpApplicationGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn submission_pairs(request: SubmissionRequest, draft: bool) -> [(&'static str, String); 3] {
        [
            ("citizenId", request.citizen_id.to_string()),
            ("programId", request.program_id.to_string()),
            ("isDraft", draft.to_string()),
        ]
    }

    async fn post_submission(
        &self,
        request: SubmissionRequest,
        draft: bool,
    ) -> ClientResult<BenefitApplication> {
        let builder = self
            .client
            .request(Method::POST, "applications")?
            .query(&Self::submission_pairs(request, draft));
        self.client.execute(builder).await
    }
}

#[async_trait]
impl ApplicationGateway for HttpApplicationGateway {
    async fn list(&self) -> ClientResult<Vec<BenefitApplication>> {
        self.client.get("applications").await
    }

    async fn list_drafts(&self) -> ClientResult<Vec<BenefitApplication>> {
        self.client
            .get_with_query("applications", &[("isDraft", "true".to_owned())])
            .await
    }

    async fn list_by_citizen(&self, citizen_id: i64) -> ClientResult<Vec<BenefitApplication>> {
        self.client
            .get(&format!("applications/citizen/{citizen_id}"))
            .await
    }

    async fn list_by_program(&self, program_id: i64) -> ClientResult<Vec<BenefitApplication>> {
        self.client
            .get(&format!("applications/program/{program_id}"))
            .await
    }

    async fn submit(&self, request: SubmissionRequest) -> ClientResult<BenefitApplication> {
        self.post_submission(request, false).await
    }

    async fn save_draft(&self, request: SubmissionRequest) -> ClientResult<BenefitApplication> {
        self.post_submission(request, true).await
    }

    async fn update_draft(
        &self,
        id: i64,
        request: SubmissionRequest,
    ) -> ClientResult<BenefitApplication> {
        self.client
            .put_with_query(
                &format!("applications/{id}"),
                &Self::submission_pairs(request, true),
            )
            .await
    }

    async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> ClientResult<BenefitApplication> {
        let builder = self
            .client
            .request(Method::PATCH, &format!("applications/{id}/status"))?
            .query(&[("status", status.as_str())]);
        self.client.execute(builder).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("applications/{id}")).await
    }
}
