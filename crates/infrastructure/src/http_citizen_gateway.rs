use async_trait::async_trait;
use asista_application::ports::CitizenGateway;
use asista_core::{ClientError, ClientResult};
use asista_domain::{Citizen, CitizenDraft, CitizenQuery};

use crate::rest_client::RestClient;

/// Citizen registry endpoints over REST.
///
/// The search dispatch mirrors the query classification: national-id
/// lookups hit the exact-match endpoint and return at most one row,
/// name lookups hit the free-text endpoint.
pub struct HttpCitizenGateway {
    client: RestClient,
}

impl HttpCitizenGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CitizenGateway for HttpCitizenGateway {
    async fn list(&self) -> ClientResult<Vec<Citizen>> {
        self.client.get("citizens").await
    }

    async fn get(&self, id: i64) -> ClientResult<Citizen> {
        self.client.get(&format!("citizens/{id}")).await
    }

    async fn search(&self, query: &CitizenQuery) -> ClientResult<Vec<Citizen>> {
        match query {
            CitizenQuery::All => self.list().await,
            CitizenQuery::NationalId(national_id) => {
                let result: ClientResult<Citizen> = self
                    .client
                    .get_with_query("citizens/search", &[("nationalId", national_id.clone())])
                    .await;
                match result {
                    Ok(citizen) => Ok(vec![citizen]),
                    Err(ClientError::NotFound(_)) => Ok(Vec::new()),
                    Err(error) => Err(error),
                }
            }
            CitizenQuery::Name(name) => {
                self.client
                    .get_with_query("citizens/search/name", &[("name", name.clone())])
                    .await
            }
        }
    }

    async fn create(&self, draft: &CitizenDraft) -> ClientResult<Citizen> {
        self.client.post("citizens", draft).await
    }

    async fn update(&self, id: i64, draft: &CitizenDraft) -> ClientResult<Citizen> {
        self.client.put(&format!("citizens/{id}"), draft).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("citizens/{id}")).await
    }
}
