use async_trait::async_trait;
use asista_application::ports::HouseholdGateway;
use asista_core::ClientResult;
use asista_domain::Household;
use serde_json::json;

use crate::rest_client::RestClient;

/// Household endpoints over REST.
pub struct HttpHouseholdGateway {
    client: RestClient,
}

impl HttpHouseholdGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HouseholdGateway for HttpHouseholdGateway {
    async fn create(&self) -> ClientResult<Household> {
        // The backend expects an empty JSON object, not an empty body.
        self.client.post("households", &json!({})).await
    }

    async fn add_citizen(&self, household_id: i64, citizen_id: i64) -> ClientResult<()> {
        self.client
            .post_unit(
                &format!("households/{household_id}/citizens/{citizen_id}"),
                &json!({}),
            )
            .await
    }
}
