use async_trait::async_trait;
use asista_application::ports::MetricsGateway;
use asista_core::ClientResult;
use asista_domain::{ApplicationFunnel, BeneficiariesByCity, DashboardFilter, FinancialLiability};

use crate::rest_client::RestClient;

/// Analytics dashboard endpoints over REST. Every chart takes the
/// shared filter serialized as query parameters.
pub struct HttpMetricsGateway {
    client: RestClient,
}

impl HttpMetricsGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricsGateway for HttpMetricsGateway {
    async fn application_funnel(
        &self,
        filter: &DashboardFilter,
    ) -> ClientResult<ApplicationFunnel> {
        self.client
            .get_with_query("metrics/applications/funnel", &filter.query_pairs())
            .await
    }

    async fn beneficiaries_by_city(
        &self,
        filter: &DashboardFilter,
    ) -> ClientResult<BeneficiariesByCity> {
        self.client
            .get_with_query("metrics/beneficiaries/by-city", &filter.query_pairs())
            .await
    }

    async fn financial_liability(
        &self,
        filter: &DashboardFilter,
    ) -> ClientResult<FinancialLiability> {
        self.client
            .get_with_query("metrics/financial-liability", &filter.query_pairs())
            .await
    }
}
