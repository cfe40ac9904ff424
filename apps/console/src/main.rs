//! Asista console shell.
//!
//! Wires configuration, the HTTP stack, and the client services into a
//! runnable smoke flow: login, load the main screens, log the result,
//! log out.

#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use asista_application::ports::{Confirmer, KeyValueStore, Notifier};
use asista_application::{
    AnalyticsScreen, ApplicationsScreen, CitizensScreen, LocaleService, PermissionGate,
    SessionService, SessionState, SidenavCoordinator, TokenStore, TranslationService, UsersScreen,
};
use asista_core::{ClientError, ClientResult};
use asista_infrastructure::{
    HttpApplicationGateway, HttpAuthGateway, HttpCitizenGateway, HttpHouseholdGateway,
    HttpMetricsGateway, HttpProgramGateway, HttpRoleGateway, HttpUserGateway,
    InMemoryKeyValueStore, JsonFileKeyValueStore, RestClient,
};
use async_trait::async_trait;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone)]
struct ConsoleConfig {
    api_url: Url,
    storage_path: Option<PathBuf>,
    username: Option<String>,
    password: Option<String>,
}

impl ConsoleConfig {
    fn load() -> ClientResult<Self> {
        let raw_url =
            env::var("ASISTA_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned());
        let api_url = Url::parse(&raw_url).map_err(|error| {
            ClientError::validation(format!("invalid ASISTA_API_URL '{raw_url}': {error}"))
        })?;

        let storage_path = env::var("ASISTA_STORAGE_FILE")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_url,
            storage_path,
            username: env::var("ASISTA_USERNAME").ok(),
            password: env::var("ASISTA_PASSWORD").ok(),
        })
    }

    fn credentials(&self) -> Option<(String, String)> {
        Some((self.username.clone()?, self.password.clone()?))
    }
}

/// Notifier rendering translated messages to the log.
struct ConsoleNotifier {
    translations: TranslationService,
    language: String,
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        info!("{}", self.translations.translate(&self.language, message));
    }

    fn error(&self, message: &str) {
        warn!("{}", self.translations.translate(&self.language, message));
    }
}

/// Console sessions are read-only; destructive actions are declined.
struct DeclineConfirmer;

#[async_trait]
impl Confirmer for DeclineConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        warn!(prompt = message, "declining destructive action in console mode");
        false
    }
}

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ConsoleConfig::load()?;

    let store: Arc<dyn KeyValueStore> = match &config.storage_path {
        Some(path) => Arc::new(JsonFileKeyValueStore::open(path)),
        None => Arc::new(InMemoryKeyValueStore::new()),
    };
    let tokens = TokenStore::new(store.clone());
    let gate = PermissionGate::new(tokens.clone());

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|error| ClientError::Transport(format!("failed to build HTTP client: {error}")))?;
    let rest = RestClient::new(http, config.api_url.clone(), tokens.clone());

    let auth = Arc::new(HttpAuthGateway::new(rest.clone()));
    let citizens = Arc::new(HttpCitizenGateway::new(rest.clone()));
    let programs = Arc::new(HttpProgramGateway::new(rest.clone()));
    let applications = Arc::new(HttpApplicationGateway::new(rest.clone()));
    let roles = Arc::new(HttpRoleGateway::new(rest.clone()));
    let users = Arc::new(HttpUserGateway::new(rest.clone()));
    let households = Arc::new(HttpHouseholdGateway::new(rest.clone()));
    let metrics = Arc::new(HttpMetricsGateway::new(rest));

    let session = SessionService::new(auth, users.clone(), tokens, gate.clone());

    let locales = LocaleService::new(store);
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier {
        translations: TranslationService::with_defaults(),
        language: locales.language().to_owned(),
    });
    let confirmer: Arc<dyn Confirmer> = Arc::new(DeclineConfirmer);
    let sidenav = SidenavCoordinator::new();

    info!(api_url = %config.api_url, locale = locales.current().code, "asista-console started");

    let Some((username, password)) = config.credentials() else {
        info!("ASISTA_USERNAME/ASISTA_PASSWORD not set; skipping the login smoke flow");
        return Ok(());
    };

    let state = session.login(&username, &password).await?;
    if state == SessionState::FirstLoginPending {
        info!("password not yet set; complete the set-password flow before using the client");
        session.logout().await;
        return Ok(());
    }

    let mut citizens_screen = CitizensScreen::new(
        citizens,
        households,
        gate.clone(),
        notifier.clone(),
        confirmer.clone(),
        sidenav,
    );
    citizens_screen.load().await;
    info!(count = citizens_screen.rows.len(), "citizen registry loaded");

    let mut applications_screen = ApplicationsScreen::new(
        applications,
        programs,
        gate.clone(),
        notifier.clone(),
        confirmer.clone(),
    );
    applications_screen.load().await;
    info!(
        submitted = applications_screen.rows.len(),
        drafts = applications_screen.drafts.len(),
        "benefit applications loaded"
    );

    let mut users_screen = UsersScreen::new(users, roles, gate, notifier.clone(), confirmer);
    users_screen.load().await;
    info!(count = users_screen.rows.len(), "user accounts loaded");

    let mut analytics = AnalyticsScreen::new(metrics, notifier);
    analytics.load().await;
    if let Some(funnel) = &analytics.funnel {
        info!(total = funnel.total, "application funnel loaded");
    }

    session.logout().await;
    info!("session closed");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
