//! Ports consumed by the application services.
//!
//! Gateways wrap the backend REST resources; storage wraps the
//! persistent key-value browser store; interaction wraps the
//! snackbar/confirm-dialog surfaces a host shell provides.

mod gateways;
mod interaction;
mod storage;

pub use gateways::{
    ApplicationGateway, AuthGateway, CitizenGateway, HouseholdGateway, MetricsGateway,
    ProgramGateway, RoleGateway, UserGateway,
};
pub use interaction::{Confirmer, Notifier};
pub use storage::KeyValueStore;
