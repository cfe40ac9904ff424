//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_application_gateway;
mod http_auth_gateway;
mod http_citizen_gateway;
mod http_household_gateway;
mod http_metrics_gateway;
mod http_program_gateway;
mod http_role_gateway;
mod http_user_gateway;
mod in_memory_key_value_store;
mod json_file_key_value_store;
mod rest_client;

pub use http_application_gateway::HttpApplicationGateway;
pub use http_auth_gateway::HttpAuthGateway;
pub use http_citizen_gateway::HttpCitizenGateway;
pub use http_household_gateway::HttpHouseholdGateway;
pub use http_metrics_gateway::HttpMetricsGateway;
pub use http_program_gateway::HttpProgramGateway;
pub use http_role_gateway::HttpRoleGateway;
pub use http_user_gateway::HttpUserGateway;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use json_file_key_value_store::JsonFileKeyValueStore;
pub use rest_client::RestClient;
