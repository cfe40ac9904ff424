use async_trait::async_trait;
use asista_application::ports::AuthGateway;
use asista_core::ClientResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::rest_client::RestClient;

/// Auth endpoints over REST: login, logout, set-password.
pub struct HttpAuthGateway {
    client: RestClient,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct SetPasswordRequest<'a> {
    password: &'a str,
}

impl HttpAuthGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, username: &str, password: &str) -> ClientResult<String> {
        let response: LoginResponse = self
            .client
            .post("login", &LoginRequest { username, password })
            .await?;
        Ok(response.token)
    }

    async fn logout(&self, credential: &str) -> ClientResult<()> {
        // The local store is already cleared at this point, so the
        // credential rides along explicitly instead of via the store.
        let builder = self
            .client
            .request(Method::POST, "logout")?
            .bearer_auth(credential);
        self.client.execute_unit(builder).await
    }

    async fn set_password(&self, password: &str) -> ClientResult<()> {
        self.client
            .post_unit("set-password", &SetPasswordRequest { password })
            .await
    }
}
