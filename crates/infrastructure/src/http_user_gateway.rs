use async_trait::async_trait;
use asista_application::ports::UserGateway;
use asista_core::{ClientError, ClientResult};
use asista_domain::{UserDraft, UserRecord};

use crate::rest_client::RestClient;

/// Administrative-user endpoints over REST.
pub struct HttpUserGateway {
    client: RestClient,
}

impl HttpUserGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn list(&self) -> ClientResult<Vec<UserRecord>> {
        self.client.get("users").await
    }

    async fn find_by_username(&self, username: &str) -> ClientResult<Option<UserRecord>> {
        let result: ClientResult<UserRecord> = self
            .client
            .get_with_query("users/search", &[("username", username.to_owned())])
            .await;
        match result {
            Ok(record) => Ok(Some(record)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn create(&self, draft: &UserDraft) -> ClientResult<UserRecord> {
        self.client.post("users", draft).await
    }

    async fn update(&self, id: i64, draft: &UserDraft) -> ClientResult<UserRecord> {
        self.client.put(&format!("users/{id}"), draft).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("users/{id}")).await
    }
}
