//! # API crate — REST client for the gym backend
//!
//! Everything that talks to the backend lives here: the credential-attaching
//! HTTP client, one typed facade per resource, the authentication/session
//! manager, and the role-guard state machine the routing layer drives.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL and request timeout |
//! | [`http`] | `reqwest` wrapper that attaches the stored token/email headers |
//! | [`error`] | [`ApiError`] taxonomy shared by every facade |
//! | [`models`] | Backend record shapes and the [`Role`] enum |
//! | [`auth`] | Login/signup/logout and the persisted session ([`SessionManager`]) |
//! | [`guard`] | Role-gating state machine ([`RouteGuard`]) |
//! | [`members`] .. [`reports`] | Per-resource facades |
//!
//! Facades return `Result<_, ApiError>` and never retry; authentication
//! operations return a structured [`AuthOutcome`] instead of an error, since
//! the sign-in view presents failures inline rather than catching them.

use store::KeyValueStore;

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod models;

pub mod bills;
pub mod diet_plans;
pub mod fee_packages;
pub mod members;
pub mod notifications;
pub mod reports;
pub mod supplements;

pub use auth::{AuthOutcome, RestoredSession, SessionManager};
pub use config::ApiConfig;
pub use error::ApiError;
pub use guard::{GuardOutcome, GuardState, RouteGuard, ROLE_WAIT};
pub use http::HttpClient;
pub use models::Role;
pub use reports::ReportRow;

/// One client per process is plenty; clones share the underlying connection
/// pool and credential store.
#[derive(Clone)]
pub struct GymClient<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> GymClient<S> {
    pub fn new(config: ApiConfig, kv: S) -> Self {
        Self {
            http: HttpClient::new(config, kv),
        }
    }

    pub fn session(&self) -> SessionManager<S> {
        SessionManager::new(self.http.clone())
    }

    pub fn members(&self) -> members::MembersApi<S> {
        members::MembersApi::new(self.http.clone())
    }

    pub fn bills(&self) -> bills::BillsApi<S> {
        bills::BillsApi::new(self.http.clone())
    }

    pub fn fee_packages(&self) -> fee_packages::FeePackagesApi<S> {
        fee_packages::FeePackagesApi::new(self.http.clone())
    }

    pub fn notifications(&self) -> notifications::NotificationsApi<S> {
        notifications::NotificationsApi::new(self.http.clone())
    }

    pub fn supplements(&self) -> supplements::SupplementsApi<S> {
        supplements::SupplementsApi::new(self.http.clone())
    }

    pub fn diet_plans(&self) -> diet_plans::DietPlansApi<S> {
        diet_plans::DietPlansApi::new(self.http.clone())
    }

    pub fn reports(&self) -> reports::ReportsApi<S> {
        reports::ReportsApi::new(self.http.clone())
    }
}
