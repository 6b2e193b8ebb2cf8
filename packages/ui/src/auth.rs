//! Authentication context and hooks for the UI.

use api::{AuthOutcome, Role};
use dioxus::prelude::*;

use crate::backend::gym_client;

/// Authentication state for the application.
///
/// A mirror of what the session manager last persisted; the backend is the
/// actual authority and rejects stale tokens on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub email: Option<String>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            email: None,
            role: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            email: None,
            role: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the persisted session on mount.
/// Wrap the router with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Trust-on-read: a persisted email+role counts as authenticated without
    // re-validating against the backend.
    use_effect(move || {
        let state = match gym_client().session().restore() {
            Some(restored) => {
                tracing::info!("restored session for {}", restored.email);
                AuthState {
                    email: Some(restored.email),
                    role: Some(restored.role),
                    loading: false,
                }
            }
            None => AuthState::signed_out(),
        };
        auth_state.set(state);
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Log in and, on success, reflect the newly persisted identity in the
/// shared auth state.
pub async fn do_login(
    mut auth: Signal<AuthState>,
    email: &str,
    password: &str,
    role: Role,
) -> AuthOutcome {
    let client = gym_client();
    let outcome = client.session().login(email, password, role).await;
    if outcome.is_success() {
        if let Some(restored) = client.session().restore() {
            auth.set(AuthState {
                email: Some(restored.email),
                role: Some(restored.role),
                loading: false,
            });
        }
    }
    outcome
}

/// Register an account. Does not touch the auth state; callers log in after.
pub async fn do_signup(email: &str, password: &str, role: Role, name: &str) -> AuthOutcome {
    gym_client().session().signup(email, password, role, name).await
}

/// Log out (best-effort backend notification) and clear the shared state.
pub async fn do_logout(mut auth: Signal<AuthState>) {
    gym_client().session().logout().await;
    auth.set(AuthState::signed_out());
}
