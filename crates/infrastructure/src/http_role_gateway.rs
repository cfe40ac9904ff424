use async_trait::async_trait;
use asista_application::ports::RoleGateway;
use asista_core::ClientResult;
use asista_domain::{NewRole, Role, RoleChangeSet, RoleDetails, WireMatrix};

use crate::rest_client::RestClient;

/// Role administration endpoints over REST, including the permission
/// matrix and the delta-patch protocol.
pub struct HttpRoleGateway {
    client: RestClient,
}

impl HttpRoleGateway {
    /// Creates the gateway over the shared REST client.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoleGateway for HttpRoleGateway {
    async fn list(&self) -> ClientResult<Vec<Role>> {
        self.client.get("roles").await
    }

    async fn details(&self, id: i64) -> ClientResult<RoleDetails> {
        self.client.get(&format!("roles/{id}")).await
    }

    async fn permission_matrix(&self) -> ClientResult<WireMatrix> {
        self.client.get("permissions/matrix").await
    }

    async fn create(&self, role: &NewRole) -> ClientResult<Role> {
        self.client.post("roles", role).await
    }

    async fn patch(&self, id: i64, change: &RoleChangeSet) -> ClientResult<()> {
        self.client.patch_unit(&format!("roles/{id}"), change).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("roles/{id}")).await
    }
}
