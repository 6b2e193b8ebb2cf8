//! Role gate wrapping each dashboard subtree.

use api::{GuardOutcome, GuardState, Role, RouteGuard, ROLE_WAIT};
use dioxus::prelude::*;
use ui::{use_auth, Spinner};

use super::sleep;
use crate::Route;

/// Renders its children only for a signed-in identity carrying `required`.
///
/// Session snapshots are fed into a [`RouteGuard`]; a bare identity gets one
/// bounded wait for a late role, and every denial lands on the sign-in view
/// exactly once.
#[component]
pub fn RoleGate(required: Role, children: Element) -> Element {
    let auth = use_auth();
    let mut guard = use_signal(|| RouteGuard::new(required));
    let nav = use_navigator();

    use_effect(move || {
        let snapshot = auth();
        let before = guard.peek().state();
        let after = guard
            .write()
            .on_session(snapshot.loading, snapshot.email.as_deref(), snapshot.role);

        // Arm the one-shot role-wait timer on entry to the wait state.
        if after == GuardState::WaitingForRole && before != GuardState::WaitingForRole {
            spawn(async move {
                sleep(ROLE_WAIT).await;
                guard.write().on_timeout();
                if guard.write().take_redirect() {
                    nav.replace(Route::Login {});
                }
            });
        }

        if guard.write().take_redirect() {
            nav.replace(Route::Login {});
        }
    });

    let outcome = guard.read().outcome();
    match outcome {
        GuardOutcome::Grant => rsx! {
            {children}
        },
        GuardOutcome::Pending => rsx! {
            Spinner {}
        },
        GuardOutcome::Redirect => rsx! {},
    }
}
