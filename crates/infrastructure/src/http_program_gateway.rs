use async_trait::async_trait;
use asista_application::ports::ProgramGateway;
use asista_core::ClientResult;
use asista_domain::{AssistanceProgram, ProgramDraft};

use crate::rest_client::RestClient;

/// Assistance-program endpoints over REST.
pub struct HttpProgramGateway {
    client: RestClient,
}

impl HttpProgramGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProgramGateway for HttpProgramGateway {
    async fn list(&self) -> ClientResult<Vec<AssistanceProgram>> {
        self.client.get("programs").await
    }

    async fn list_active(&self) -> ClientResult<Vec<AssistanceProgram>> {
        self.client.get("programs/active").await
    }

    async fn get(&self, id: i64) -> ClientResult<AssistanceProgram> {
        self.client.get(&format!("programs/{id}")).await
    }

    async fn create(&self, draft: &ProgramDraft) -> ClientResult<AssistanceProgram> {
        self.client.post("programs", draft).await
    }

    async fn update(&self, id: i64, draft: &ProgramDraft) -> ClientResult<AssistanceProgram> {
        self.client.put(&format!("programs/{id}"), draft).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("programs/{id}")).await
    }
}
