//! Application services of the Asista client.
//!
//! Ports (gateway traits, key-value storage, user interaction) plus
//! the services composed from them: token store, permission gate,
//! session lifecycle, role editor, debounced search, locale and
//! translation services, sidenav coordination, and the headless screen
//! controllers.

#![forbid(unsafe_code)]

pub mod locale;
pub mod permission_gate;
pub mod ports;
pub mod role_editor;
pub mod screens;
pub mod search;
pub mod session;
pub mod sidenav;
pub mod token_store;
pub mod translation;

pub use locale::{Locale, LocaleService};
pub use permission_gate::PermissionGate;
pub use role_editor::{EditorMode, RoleEditor};
pub use screens::{
    AnalyticsScreen, ApplicationsScreen, CitizensScreen, ProgramsScreen, RolesScreen, UsersScreen,
};
pub use search::{SEARCH_DEBOUNCE, SearchDebouncer, SearchTicket};
pub use session::{SessionService, SessionState};
pub use sidenav::SidenavCoordinator;
pub use token_store::{CREDENTIAL_KEY, TokenStore};
pub use translation::TranslationService;
